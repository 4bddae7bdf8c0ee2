use serde_json::{Map, Value};
use std::env;
use std::path::PathBuf;

use crate::error::{AppError, Result};

/// Key the credential is stored under in `storage.json`.
pub const CREDENTIAL_KEY: &str = "gemini_api_key";
/// Fallback source used when nothing has been persisted yet.
pub const API_KEY_ENV: &str = "EXAM_FORGE_API_KEY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Stored,
    Environment,
}

impl CredentialSource {
    pub fn description(&self) -> &'static str {
        match self {
            CredentialSource::Stored => "local storage",
            CredentialSource::Environment => "environment variable",
        }
    }
}

/// Single-slot key-value store for the API key, persisted as a JSON object.
pub struct CredentialStore {
    path: PathBuf,
    default_key: Option<String>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        let default_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self::with_default(path, default_key)
    }

    pub fn with_default(path: PathBuf, default_key: Option<String>) -> Self {
        Self { path, default_key }
    }

    /// A persisted non-empty value wins over the built-in default.
    pub fn load(&self) -> Result<Option<(String, CredentialSource)>> {
        if let Some(stored) = self.read_map()?.get(CREDENTIAL_KEY).and_then(Value::as_str) {
            if !stored.is_empty() {
                return Ok(Some((stored.to_string(), CredentialSource::Stored)));
            }
        }

        Ok(self
            .default_key
            .clone()
            .map(|key| (key, CredentialSource::Environment)))
    }

    /// Stores the raw value as typed. Other keys in the file are kept.
    pub fn save(&self, credential: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(
            CREDENTIAL_KEY.to_string(),
            Value::String(credential.to_string()),
        );

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AppError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| AppError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                log::warn!(
                    "Ignoring unreadable credential storage at {}",
                    self.path.display()
                );
                Ok(Map::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_in(dir: &tempfile::TempDir, default_key: Option<&str>) -> CredentialStore {
        CredentialStore::with_default(
            dir.path().join("storage.json"),
            default_key.map(str::to_string),
        )
    }

    #[test]
    fn empty_storage_without_default_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&tmp, None).load().unwrap(), None);
    }

    #[test]
    fn falls_back_to_default_key() {
        let tmp = tempfile::tempdir().unwrap();
        let loaded = store_in(&tmp, Some("builtin")).load().unwrap();
        assert_eq!(
            loaded,
            Some(("builtin".to_string(), CredentialSource::Environment))
        );
    }

    #[test]
    fn persisted_value_wins_over_default() {
        let tmp = tempfile::tempdir().unwrap();
        store_in(&tmp, Some("builtin")).save("user-key").unwrap();

        // Fresh instance simulates a reload.
        let loaded = store_in(&tmp, Some("builtin")).load().unwrap();
        assert_eq!(
            loaded,
            Some(("user-key".to_string(), CredentialSource::Stored))
        );
    }

    #[test]
    fn saving_empty_clears_the_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp, None);
        store.save("user-key").unwrap();
        store.save("").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_preserves_unrelated_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("storage.json");
        std::fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

        store_in(&tmp, None).save("abc").unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw[CREDENTIAL_KEY], "abc");
    }

    #[test]
    fn corrupt_storage_is_treated_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("storage.json"), "[1, 2").unwrap();
        assert_eq!(store_in(&tmp, None).load().unwrap(), None);
    }
}
