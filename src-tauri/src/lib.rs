pub mod commands;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod generation;
pub mod samples;
pub mod settings;
pub mod state;
pub mod system;

use std::sync::Mutex;
use tauri::{Listener, Manager};

use config::AppConfig;
use controller::{Action, ViewController};
use credentials::CredentialStore;
use generation::HttpTransport;
use settings::Settings;
use system::clipboard::SystemClipboard;
use system::tray::{TRAY_COPY_RESULT, TRAY_LOAD_SAMPLE};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let config = AppConfig::new()?;
            config.ensure_dirs()?;
            log::info!("Data directory: {:?}", config.data_dir);

            let settings = Settings::load(&config.settings_path());
            log::info!(
                "Generation model: {} ({:?} prompt)",
                settings.generation.model,
                settings.generation.prompt_strategy
            );

            let controller = ViewController::new(
                CredentialStore::new(config.storage_path()),
                settings,
            );

            app.manage(Mutex::new(controller));
            app.manage(HttpTransport::new());
            app.manage(SystemClipboard);
            app.manage(config);

            system::tray::setup_tray(app.handle())?;

            // Closing the window hides it; Quit lives in the tray.
            if let Some(window) = app.get_webview_window("main") {
                let w = window.clone();
                window.on_window_event(move |event| {
                    if let tauri::WindowEvent::CloseRequested { api, .. } = event {
                        api.prevent_close();
                        let _ = w.hide();
                    }
                });
            }

            for (event, action) in [
                (TRAY_LOAD_SAMPLE, Action::LoadSample),
                (TRAY_COPY_RESULT, Action::Copy),
            ] {
                let app_handle = app.handle().clone();
                app.listen(event, move |_event| {
                    let app = app_handle.clone();
                    let action = action.clone();
                    tauri::async_runtime::spawn(async move {
                        commands::run_action(&app, action).await;
                    });
                });
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_view,
            commands::dispatch,
            commands::get_generation_settings,
            commands::set_prompt_options,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
