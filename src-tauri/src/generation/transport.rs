use reqwest::Client;
use serde_json::Value;
use std::future::Future;

use super::request::PreparedRequest;
use crate::error::{AppError, Result};

/// One request, one response. No retries, no timeout beyond the client default.
pub trait Transport: Send + Sync {
    /// Resolves with the raw JSON body on HTTP success, even if it carries an
    /// in-band `error` object.
    fn send(&self, request: &PreparedRequest) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &PreparedRequest) -> Result<Value> {
        let resp = self
            .client
            .post(request.url.clone())
            .json(&request.body)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| status.to_string())
                });
            log::error!("Generation endpoint returned {}: {}", status, message);
            return Err(AppError::Api(message));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {}", e)))
    }
}
