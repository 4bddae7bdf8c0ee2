use arboard::Clipboard;

use crate::error::{AppError, Result};

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

#[derive(Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| AppError::Clipboard(format!("Failed to open clipboard: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| AppError::Clipboard(format!("Failed to set clipboard text: {}", e)))
    }
}
