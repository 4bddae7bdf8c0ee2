use std::sync::Mutex;
use std::time::Duration;
use tauri::{AppHandle, Emitter, Manager, State};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

use crate::config::AppConfig;
use crate::controller::{self, lock, Action, Completion, ViewController, ViewHost};
use crate::generation::prompt::PromptStrategy;
use crate::generation::HttpTransport;
use crate::settings::GenerationSettings;
use crate::state::ViewSnapshot;
use crate::system::clipboard::SystemClipboard;

pub const VIEW_CHANGED: &str = "view-changed";

/// Shows advisories as native dialogs and pushes views to the page.
pub struct WindowHost {
    app: AppHandle,
}

impl WindowHost {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ViewHost for WindowHost {
    fn advise(&self, message: &str) {
        log::info!("Advisory: {}", message);
        let mut dialog = self
            .app
            .dialog()
            .message(message)
            .title("Exam Forge")
            .kind(MessageDialogKind::Warning);
        // Modal to the main window, like a browser alert.
        if let Some(window) = self.app.get_webview_window("main") {
            dialog = dialog.parent(&window);
        }
        dialog.show(|_| {});
    }

    fn render(&self, view: &ViewSnapshot) {
        let _ = self.app.emit(VIEW_CHANGED, view);
    }
}

/// Shared entry point for page and tray actions.
pub async fn run_action(app: &AppHandle, action: Action) -> Completion {
    let controller = app.state::<Mutex<ViewController>>();
    let transport = app.state::<HttpTransport>();
    let clipboard = app.state::<SystemClipboard>();
    let host = WindowHost::new(app.clone());

    let done = controller::perform(
        controller.inner(),
        action,
        transport.inner(),
        clipboard.inner(),
        &host,
    )
    .await;

    if let Some(token) = done.revert_token {
        schedule_label_revert(app, token);
    }
    done
}

fn schedule_label_revert(app: &AppHandle, token: u64) {
    let delay = lock(&app.state::<Mutex<ViewController>>())
        .settings()
        .copy_feedback_ms;
    let app = app.clone();
    tauri::async_runtime::spawn(async move {
        let state = app.state::<Mutex<ViewController>>();
        let reverted =
            controller::revert_copy_label_after(&state, token, Duration::from_millis(delay)).await;
        if let Some(view) = reverted {
            let _ = app.emit(VIEW_CHANGED, view);
        }
    });
}

#[tauri::command]
pub fn get_view(controller: State<'_, Mutex<ViewController>>) -> ViewSnapshot {
    lock(&controller).snapshot()
}

#[tauri::command]
pub async fn dispatch(app: AppHandle, action: Action) -> Result<ViewSnapshot, String> {
    Ok(run_action(&app, action).await.view)
}

#[tauri::command]
pub fn get_generation_settings(
    controller: State<'_, Mutex<ViewController>>,
) -> Result<GenerationSettings, String> {
    Ok(lock(&controller).settings().generation.clone())
}

#[tauri::command]
pub fn set_prompt_options(
    model: String,
    prompt_strategy: PromptStrategy,
    controller: State<'_, Mutex<ViewController>>,
    config: State<'_, AppConfig>,
) -> Result<GenerationSettings, String> {
    lock(&controller)
        .update_prompt_options(&model, prompt_strategy, &config.settings_path())
        .map_err(|e| e.to_string())
}
