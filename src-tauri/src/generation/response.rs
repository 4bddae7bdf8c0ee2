use serde_json::Value;

pub const EMPTY_RESPONSE_MESSAGE: &str = "No response generated. Please check your text input.";

/// What a successfully delivered response body amounts to.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationResult {
    /// The body carried an `error` object.
    Error(String),
    /// `candidates[0].content.parts[0].text`, or the fallback notice when absent.
    Text(String),
}

impl GenerationResult {
    pub fn from_json(json: &Value) -> Self {
        if let Some(error) = json.get("error").filter(|e| !e.is_null()) {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string());
            return GenerationResult::Error(message);
        }

        let text = json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|t| !t.is_empty())
            .unwrap_or(EMPTY_RESPONSE_MESSAGE);
        GenerationResult::Text(text.to_string())
    }

    /// Text for the result area.
    pub fn display_text(&self) -> String {
        match self {
            GenerationResult::Error(message) => format!("Error: {}", message),
            GenerationResult::Text(text) => text.clone(),
        }
    }
}
