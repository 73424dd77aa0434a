//! MultiClip - Clipboard adapter trait
//!
//! The capability boundary the dispatcher depends on

use std::time::Duration;

/// Clipboard failure modes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// Platform clipboard could not be opened or the operation failed
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// Operation exceeded the configured deadline
    #[error("clipboard operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Text clipboard capability.
///
/// Reads yield an empty string when the clipboard holds no text content
/// (e.g. an image), so callers only need one "nothing to store" path.
pub trait ClipboardProvider {
    /// Current clipboard text
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
