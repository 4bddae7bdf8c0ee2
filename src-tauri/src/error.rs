use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Empty credential or transcript; never reaches the transport.
    #[error("{0}")]
    Validation(String),
    /// Non-success HTTP status. Carries the server message, or the status text.
    #[error("{0}")]
    Api(String),
    /// No usable response from the endpoint.
    #[error("{0}")]
    Network(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl AppError {
    /// Text shown in the result area when a generation attempt fails.
    pub fn display_message(&self) -> String {
        match self {
            AppError::Network(msg) => format!(
                "Network/System Error: {}. Check the application log for details.",
                msg
            ),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_render_the_server_message_verbatim() {
        let err = AppError::Api("API key not valid. Please pass a valid API key.".into());
        assert_eq!(
            err.display_message(),
            "Error: API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn network_errors_carry_a_distinguishing_prefix() {
        let err = AppError::Network("connection refused".into());
        let shown = err.display_message();
        assert!(shown.starts_with("Network/System Error: "));
        assert!(shown.contains("connection refused"));
    }

    #[test]
    fn storage_errors_are_labelled() {
        let err = AppError::Storage("disk full".into());
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
