use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::credentials::CredentialStore;
use crate::error::{AppError, Result};
use crate::generation::prompt::PromptStrategy;
use crate::generation::{self, GenerationResult, PreparedRequest, Transport};
use crate::settings::{GenerationSettings, Settings};
use crate::state::{AppState, UiStatus, ViewSnapshot, COPIED_LABEL, COPY_LABEL};
use crate::system::clipboard::ClipboardWriter;

pub const MISSING_CREDENTIAL: &str = "Please enter your Gemini API key.";
pub const MISSING_TRANSCRIPT: &str = "Please enter a transcript or topic text.";

/// Every user action the page or tray can trigger.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    EditCredential(String),
    EditTranscript(String),
    Generate,
    LoadSample,
    Copy,
}

/// Side effect the host must carry out after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Blocking message for the user; nothing was sent.
    Advisory(String),
    /// State is now Loading; send this and report back through `complete`.
    Send(PreparedRequest),
    CopyToClipboard(String),
}

/// Where the driver shows advisories and pushes intermediate views.
pub trait ViewHost: Send + Sync {
    fn advise(&self, message: &str);
    fn render(&self, view: &ViewSnapshot);
}

pub struct ViewController {
    state: AppState,
    credentials: CredentialStore,
    settings: Settings,
}

impl ViewController {
    pub fn new(credentials: CredentialStore, settings: Settings) -> Self {
        let mut state = AppState::default();
        match credentials.load() {
            Ok(Some((key, source))) => {
                log::info!("API key loaded from {}", source.description());
                state.credential = key;
            }
            Ok(None) => log::info!("No API key configured yet"),
            Err(e) => log::error!("Failed to load API key: {}", e),
        }
        Self {
            state,
            credentials,
            settings,
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::from(&self.state)
    }

    pub fn status(&self) -> UiStatus {
        self.state.status
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[cfg(test)]
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Saves new prompt options to `path`; the live settings change only once the write succeeds.
    pub fn update_prompt_options(
        &mut self,
        model: &str,
        strategy: PromptStrategy,
        path: &Path,
    ) -> Result<GenerationSettings> {
        let model = model.trim();
        if model.is_empty() {
            return Err(AppError::Validation("Model id cannot be empty".to_string()));
        }

        let mut updated = self.settings.clone();
        updated.generation.model = model.to_string();
        updated.generation.prompt_strategy = strategy;
        updated.save(path).map_err(AppError::Storage)?;

        log::info!(
            "Prompt options updated: model={} strategy={:?}",
            model,
            strategy
        );
        self.settings = updated;
        Ok(self.settings.generation.clone())
    }

    pub fn dispatch(&mut self, action: Action) -> Effect {
        match action {
            Action::EditCredential(value) => self.edit_credential(value),
            Action::EditTranscript(value) => {
                self.state.transcript = value;
                Effect::None
            }
            Action::Generate => self.begin_generate(),
            Action::LoadSample => self.load_sample(),
            Action::Copy => self.copy(),
        }
    }

    fn edit_credential(&mut self, value: String) -> Effect {
        if let Err(e) = self.credentials.save(&value) {
            log::error!("Failed to persist API key: {}", e);
        }
        self.state.credential = value;
        Effect::None
    }

    fn begin_generate(&mut self) -> Effect {
        if self.state.status == UiStatus::Loading {
            log::warn!("Generate ignored: a request is already in flight");
            return Effect::None;
        }

        let credential = self.state.credential.trim();
        let transcript = self.state.transcript.trim();
        if credential.is_empty() {
            return Effect::Advisory(MISSING_CREDENTIAL.to_string());
        }
        if transcript.is_empty() {
            return Effect::Advisory(MISSING_TRANSCRIPT.to_string());
        }

        let generation = &self.settings.generation;
        match generation::build(credential, transcript, generation) {
            Ok(request) => {
                log::info!(
                    "Requesting exam from {} ({:?} prompt, {} chars)",
                    generation.model,
                    generation.prompt_strategy,
                    transcript.len()
                );
                self.state.status = UiStatus::Loading;
                self.state.output.clear();
                Effect::Send(request)
            }
            Err(e) => {
                log::error!("Failed to build request: {}", e);
                self.state.output = e.display_message();
                self.state.status = UiStatus::Error;
                Effect::None
            }
        }
    }

    /// Finishes the in-flight generation. The trigger is enabled again on every branch.
    pub fn complete(&mut self, outcome: Result<Value>) {
        let (status, output) = match outcome {
            Ok(json) => match GenerationResult::from_json(&json) {
                result @ GenerationResult::Error(_) => {
                    log::error!("Generation returned an error payload: {:?}", result);
                    (UiStatus::Error, result.display_text())
                }
                result @ GenerationResult::Text(_) => {
                    log::info!("Generation complete");
                    (UiStatus::Result, result.display_text())
                }
            },
            Err(e) => {
                log::error!("Generation failed: {}", e);
                (UiStatus::Error, e.display_message())
            }
        };
        self.state.output = output;
        self.state.status = status;
    }

    fn load_sample(&mut self) -> Effect {
        self.state.transcript = self.state.samples.advance().to_string();
        // An in-flight request keeps the trigger disabled.
        if self.state.status != UiStatus::Loading {
            self.state.status = UiStatus::Idle;
            self.state.output.clear();
        }
        Effect::None
    }

    fn copy(&mut self) -> Effect {
        match self.state.status {
            UiStatus::Result | UiStatus::Error => {
                Effect::CopyToClipboard(self.state.output.clone())
            }
            _ => Effect::None,
        }
    }

    /// Swaps in the confirmation label; returns the token for `restore_copy_label`.
    pub fn mark_copied(&mut self) -> u64 {
        self.state.copy_epoch += 1;
        self.state.copy_label = COPIED_LABEL;
        self.state.copy_epoch
    }

    /// Reverts the label unless a newer copy happened since `epoch`.
    pub fn restore_copy_label(&mut self, epoch: u64) -> bool {
        if self.state.copy_epoch != epoch {
            return false;
        }
        self.state.copy_label = COPY_LABEL;
        true
    }
}

/// What a performed action left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub view: ViewSnapshot,
    /// Set after a copy; pass to `restore_copy_label` once the feedback delay elapses.
    pub revert_token: Option<u64>,
}

pub fn lock(controller: &Mutex<ViewController>) -> MutexGuard<'_, ViewController> {
    controller.lock().unwrap_or_else(|e| e.into_inner())
}

/// Runs one action end to end. The lock is never held across the network await.
pub async fn perform<T, C, H>(
    controller: &Mutex<ViewController>,
    action: Action,
    transport: &T,
    clipboard: &C,
    host: &H,
) -> Completion
where
    T: Transport,
    C: ClipboardWriter + ?Sized,
    H: ViewHost + ?Sized,
{
    let effect = lock(controller).dispatch(action);
    let mut revert_token = None;

    match effect {
        Effect::None => {}
        Effect::Advisory(message) => host.advise(&message),
        Effect::Send(request) => {
            host.render(&lock(controller).snapshot());
            let outcome = transport.send(&request).await;
            lock(controller).complete(outcome);
        }
        Effect::CopyToClipboard(text) => match clipboard.write_text(&text) {
            Ok(()) => revert_token = Some(lock(controller).mark_copied()),
            Err(e) => log::error!("Copy failed: {}", e),
        },
    }

    let view = lock(controller).snapshot();
    host.render(&view);
    Completion { view, revert_token }
}

/// Waits out the copy feedback delay, then reverts the label. Returns the new
/// view, or `None` when a newer copy took over.
pub async fn revert_copy_label_after(
    controller: &Mutex<ViewController>,
    token: u64,
    delay: Duration,
) -> Option<ViewSnapshot> {
    tokio::time::sleep(delay).await;
    let mut c = lock(controller);
    if !c.restore_copy_label(token) {
        return None;
    }
    Some(c.snapshot())
}
