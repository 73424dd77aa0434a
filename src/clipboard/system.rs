//! MultiClip - System clipboard implementation
//!
//! arboard-backed provider with deadline-bounded operations

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use arboard::Clipboard;

use super::adapter::{ClipboardError, ClipboardProvider};

/// Default per-operation deadline (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 2000;

/// arboard-backed [`ClipboardProvider`].
///
/// Every operation runs on a short-lived worker thread and is awaited with a
/// deadline, so a hung platform call (an unresponsive X11 selection owner,
/// for example) degrades into a [`ClipboardError::Timeout`] instead of
/// stalling the caller.
pub struct SystemClipboard {
    timeout: Duration,
}

impl SystemClipboard {
    /// Open the system clipboard, probing it once.
    ///
    /// Failure here means no clipboard backend exists (headless session,
    /// missing display server) and the daemon cannot meaningfully run.
    pub fn new(timeout: Duration) -> Result<Self, ClipboardError> {
        open().map(|_| Self { timeout })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        bounded(self.timeout, read_current)
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let owned = text.to_string();
        bounded(self.timeout, move || write_current(owned))
    }
}

// Fresh instance per operation so each call observes the latest clipboard state
fn open() -> Result<Clipboard, ClipboardError> {
    Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Read the current clipboard text.
///
/// On Linux the PRIMARY selection (the most recent mouse selection) is
/// preferred, falling back to the regular clipboard when PRIMARY is empty.
fn read_current() -> Result<String, ClipboardError> {
    let mut clipboard = open()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::{GetExtLinux, LinuxClipboardKind};
        match clipboard.get().clipboard(LinuxClipboardKind::Primary).text() {
            Ok(text) if !text.is_empty() => return Ok(text),
            _ => {}
        }
    }

    match clipboard.get_text() {
        Ok(text) => Ok(text),
        // No text on the clipboard is "nothing to store", not a failure
        Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
        Err(e) => Err(ClipboardError::Unavailable(e.to_string())),
    }
}

/// Write `text` to the clipboard.
///
/// On Linux the PRIMARY selection is mirrored as well (best-effort) so that
/// middle-click paste matches what was recalled.
fn write_current(text: String) -> Result<(), ClipboardError> {
    let mut clipboard = open()?;

    #[cfg(target_os = "linux")]
    {
        use arboard::{LinuxClipboardKind, SetExtLinux};
        if let Err(e) = clipboard
            .set()
            .clipboard(LinuxClipboardKind::Primary)
            .text(text.clone())
        {
            log::debug!("[Clipboard] Failed to set PRIMARY selection: {}", e);
        }
    }

    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Unavailable(e.to_string()))
}

/// Run `op` on a worker thread, waiting at most `deadline` for its result.
///
/// On timeout the worker is abandoned; whatever it eventually produces is
/// discarded along with the channel.
fn bounded<T, F>(deadline: Duration, op: F) -> Result<T, ClipboardError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ClipboardError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(op());
    });
    match rx.recv_timeout(deadline) {
        Ok(result) => result,
        Err(mpsc::RecvTimeoutError::Timeout) => Err(ClipboardError::Timeout(deadline)),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(ClipboardError::Unavailable(
            "clipboard worker died".to_string(),
        )),
    }
}
