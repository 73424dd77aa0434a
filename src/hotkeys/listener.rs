//! MultiClip - Global key listener
//!
//! Background thread feeding raw key events through the chord recognizer

use std::sync::mpsc::Sender;
use std::thread;

use super::recognizer::{ChordEvent, ChordRecognizer};

/// Handle to the background key-capture thread.
///
/// The thread runs `rdev::listen`, which blocks for the life of the process
/// on success. It therefore only ever finishes when the platform listener
/// could not start (no display server, missing input permission); in that
/// case the chord sender is dropped, which the consumer observes as a closed
/// channel.
pub struct HotkeyListener {
    handle: thread::JoinHandle<()>,
}

impl HotkeyListener {
    /// Spawn the capture thread.
    ///
    /// The callback does nothing heavier than recognition and a channel
    /// send; all slot and clipboard work happens on the consumer side.
    pub fn spawn(mut recognizer: ChordRecognizer, tx: Sender<ChordEvent>) -> Self {
        let handle = thread::spawn(move || {
            let result = rdev::listen(move |event| {
                if let Some(chord) = recognizer.observe(&event.event_type) {
                    log::debug!(
                        "[Hotkeys] Recognized {:?} for slot {}",
                        chord.action,
                        chord.slot
                    );
                    if tx.send(chord).is_err() {
                        log::debug!("[Hotkeys] Event channel closed, dropping chord");
                    }
                }
            });
            if let Err(e) = result {
                log::error!("[Hotkeys] Global key listener failed: {:?}", e);
            }
        });
        Self { handle }
    }

    /// Reap the capture thread after it has stopped
    pub fn join(self) {
        if self.handle.join().is_err() {
            log::error!("[Hotkeys] Listener thread panicked");
        }
    }
}
