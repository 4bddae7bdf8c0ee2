use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

pub struct AppConfig {
    pub data_dir: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "exam-forge", "ExamForge").ok_or_else(|| {
            AppError::Storage("Failed to determine project directories".to_string())
        })?;
        Ok(Self::with_data_dir(proj_dirs.data_dir()))
    }

    pub fn with_data_dir(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir.join("settings.json")
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }
}
