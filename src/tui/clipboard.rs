// src/tui/clipboard.rs
use arboard::Clipboard;
use tracing::warn;

/// Places `text` on the system clipboard. Failures are returned as display strings
/// because they only ever end up in the status line.
pub fn copy(text: &str) -> Result<(), String> {
    let mut clipboard = Clipboard::new().map_err(|err| {
        warn!(error = %err, "clipboard unavailable");
        err.to_string()
    })?;
    clipboard.set_text(text).map_err(|err| {
        warn!(error = %err, "clipboard write failed");
        err.to_string()
    })
}
