pub mod clipboard;
pub mod tray;
