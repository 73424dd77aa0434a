//! MultiClip - Clipboard module
//!
//! Text clipboard access behind a capability trait

pub mod adapter;
pub mod system;

pub use adapter::{ClipboardError, ClipboardProvider};
pub use system::{SystemClipboard, DEFAULT_TIMEOUT_MS};
