use tauri::{
    image::Image,
    menu::{Menu, MenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Emitter, Manager,
};

pub const TRAY_LOAD_SAMPLE: &str = "tray-load-sample";
pub const TRAY_COPY_RESULT: &str = "tray-copy-result";

pub fn setup_tray(app: &AppHandle) -> Result<(), Box<dyn std::error::Error>> {
    let show_item = MenuItem::with_id(app, "show_window", "Show Window", true, None::<&str>)?;
    let sample_item = MenuItem::with_id(app, "load_sample", "Load Sample", true, None::<&str>)?;
    let copy_item = MenuItem::with_id(app, "copy_result", "Copy Result", true, None::<&str>)?;
    let quit_item = MenuItem::with_id(app, "quit", "Quit", true, None::<&str>)?;

    let menu = Menu::with_items(app, &[&show_item, &sample_item, &copy_item, &quit_item])?;

    let icon = app.default_window_icon().cloned().unwrap_or_else(|| {
        let mut rgba = Vec::with_capacity(32 * 32 * 4);
        for _ in 0..(32 * 32) {
            rgba.extend_from_slice(&[37, 99, 235, 255]);
        }
        Image::new_owned(rgba, 32, 32)
    });

    let _tray = TrayIconBuilder::new()
        .icon(icon)
        .menu(&menu)
        .show_menu_on_left_click(false)
        .tooltip("Exam Forge")
        .on_menu_event(|app, event| match event.id.as_ref() {
            "show_window" => show_main_window(app),
            "load_sample" => {
                show_main_window(app);
                let _ = app.emit(TRAY_LOAD_SAMPLE, ());
            }
            "copy_result" => {
                let _ = app.emit(TRAY_COPY_RESULT, ());
            }
            "quit" => {
                app.exit(0);
            }
            _ => {}
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                show_main_window(tray.app_handle());
            }
        })
        .build(app)?;

    Ok(())
}

fn show_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window("main") {
        let _ = window.show();
        let _ = window.set_focus();
    }
}
