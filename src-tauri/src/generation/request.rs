use reqwest::Url;
use serde::Serialize;

use super::prompt;
use crate::error::{AppError, Result};
use crate::settings::GenerationSettings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// Body of a `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(rename = "system_instruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

/// Endpoint and body ready for the transport. Dropped after the call.
#[derive(Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: Url,
    pub body: GenerateContentRequest,
}

impl std::fmt::Debug for PreparedRequest {
    // The URL carries the API key.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedRequest")
            .field("path", &self.url.path())
            .field("body", &self.body)
            .finish()
    }
}

/// Assembles the request. Callers must reject blank credential and transcript first.
pub fn build(
    credential: &str,
    transcript: &str,
    settings: &GenerationSettings,
) -> Result<PreparedRequest> {
    debug_assert!(!credential.trim().is_empty());
    debug_assert!(!transcript.trim().is_empty());

    let raw = format!(
        "{}/models/{}:generateContent",
        settings.endpoint.trim_end_matches('/'),
        settings.model
    );
    let mut url = Url::parse(&raw)
        .map_err(|e| AppError::Validation(format!("Invalid endpoint URL {}: {}", raw, e)))?;
    url.query_pairs_mut().append_pair("key", credential);

    let strategy = settings.prompt_strategy;
    let body = GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part {
                text: prompt::user_message(strategy, transcript),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: settings.temperature,
            top_k: settings.top_k,
            top_p: settings.top_p,
            max_output_tokens: settings.max_output_tokens,
        },
        system_instruction: prompt::system_instruction(strategy).map(|text| SystemInstruction {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }),
    };

    Ok(PreparedRequest { url, body })
}
