//! Clipboard access for copying generated poems.

use arboard::Clipboard;

/// Place a poem on the system clipboard.
pub fn copy_text(text: &str) -> Result<(), String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Clipboard unavailable: {}", e))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| format!("Failed to copy text: {}", e))
}
