use serde::{Deserialize, Serialize};

use crate::samples::SampleCursor;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiStatus {
    #[default]
    Idle,
    Loading,
    Result,
    Error,
}

pub struct AppState {
    pub status: UiStatus,
    pub credential: String,
    pub transcript: String,
    /// Text in the result area; empty unless status is Result or Error.
    pub output: String,
    pub samples: SampleCursor,
    pub copy_label: &'static str,
    /// Bumped on every successful copy so only the latest revert applies.
    pub copy_epoch: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            status: UiStatus::Idle,
            credential: String::new(),
            transcript: String::new(),
            output: String::new(),
            samples: SampleCursor::default(),
            copy_label: COPY_LABEL,
            copy_epoch: 0,
        }
    }
}

/// What the page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub status: UiStatus,
    pub credential: String,
    pub transcript: String,
    pub output: String,
    pub generate_enabled: bool,
    pub loading: bool,
    pub result_visible: bool,
    pub copy_label: String,
}

impl From<&AppState> for ViewSnapshot {
    fn from(state: &AppState) -> Self {
        Self {
            status: state.status,
            credential: state.credential.clone(),
            transcript: state.transcript.clone(),
            output: state.output.clone(),
            generate_enabled: state.status != UiStatus::Loading,
            loading: state.status == UiStatus::Loading,
            result_visible: matches!(state.status, UiStatus::Result | UiStatus::Error),
            copy_label: state.copy_label.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_section_is_active_per_status() {
        for status in [
            UiStatus::Idle,
            UiStatus::Loading,
            UiStatus::Result,
            UiStatus::Error,
        ] {
            let state = AppState {
                status,
                ..AppState::default()
            };
            let view = ViewSnapshot::from(&state);
            let input_active = status == UiStatus::Idle;
            let active = [input_active, view.loading, view.result_visible]
                .iter()
                .filter(|on| **on)
                .count();
            assert_eq!(active, 1, "status {:?}", status);
            assert_eq!(view.generate_enabled, !view.loading);
        }
    }
}
