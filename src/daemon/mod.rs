//! MultiClip - Daemon module
//!
//! Wires the key listener, the dispatcher and persistence together

pub mod dispatcher;

pub use dispatcher::{DispatchError, Dispatcher};

use std::sync::mpsc;

use crate::clipboard::{ClipboardError, SystemClipboard};
use crate::config::Settings;
use crate::hotkeys::{ChordRecognizer, HotkeyListener};
use crate::slots::SlotStore;
use crate::storage::{SnapshotError, SnapshotFile};

/// Why the daemon stopped
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    /// The global key listener never started or died
    #[error("global key listener stopped; hotkeys cannot be received")]
    ListenerStopped,
    /// Snapshot unreadable at startup (I/O failure, not corruption)
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// No clipboard backend available at startup
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Run the daemon until externally terminated.
///
/// Startup: load the snapshot (missing file means empty slots, a corrupt one
/// is set aside with a warning, an unreadable one is fatal), probe the
/// clipboard, spawn the key listener, then hand the current thread to the
/// dispatcher loop. The loop only ends when the listener dies, which is an
/// error; orderly shutdown is the process being terminated from outside.
pub fn run(settings: Settings) -> Result<(), DaemonError> {
    let snapshot = SnapshotFile::new(settings.data_file.clone());
    let store = match snapshot.load() {
        Ok(store) => store,
        Err(SnapshotError::Corrupt { path, reason }) => {
            log::warn!(
                "Ignoring corrupt snapshot {:?} ({}), starting with empty slots",
                path,
                reason
            );
            SlotStore::new()
        }
        Err(e) => return Err(e.into()),
    };
    log::info!("Loaded {} slot(s) from {:?}", store.len(), snapshot.path());

    let clipboard = SystemClipboard::new(settings.clipboard_timeout())?;

    let (tx, rx) = mpsc::channel();
    let recognizer = ChordRecognizer::new(settings.store_modifier, settings.recall_modifier);
    let listener = HotkeyListener::spawn(recognizer, tx);
    log::info!(
        "Hotkeys active: {}+<key> stores, {}+<key> recalls (keys A-Z, 0-9)",
        settings.store_modifier,
        settings.recall_modifier
    );

    let mut dispatcher = Dispatcher::new(store, Box::new(clipboard), snapshot);
    dispatcher.run(rx);

    // The listener is the only producer and never exits on its own, so a
    // closed channel means it failed
    listener.join();
    Err(DaemonError::ListenerStopped)
}
