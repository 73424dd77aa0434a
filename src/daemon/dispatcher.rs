//! MultiClip - Event dispatcher
//!
//! Single consumer of the chord channel; owns the slot store, the clipboard
//! and the snapshot file

use std::sync::mpsc::Receiver;

use crate::clipboard::{ClipboardError, ClipboardProvider};
use crate::hotkeys::{ChordAction, ChordEvent};
use crate::slots::{preview, SlotError, SlotKey, SlotStore};
use crate::storage::{SnapshotError, SnapshotFile};

/// Width of the content preview in dispatcher logs
const LOG_PREVIEW_CHARS: usize = 60;

/// Why a single dispatched action failed
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Slot(#[from] SlotError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// Clipboard held no text when a store chord arrived
    #[error("clipboard has no text, slot {0} unchanged")]
    EmptyClipboard(SlotKey),
}

/// Serializing consumer of chord events.
///
/// Exclusive owner of the slot store for the daemon's lifetime. Every store,
/// recall and snapshot save happens here, one event at a time, in arrival
/// order, so no action can observe another halfway through.
pub struct Dispatcher {
    store: SlotStore,
    clipboard: Box<dyn ClipboardProvider>,
    snapshot: SnapshotFile,
    /// Slot most recently recalled into the clipboard
    active_load: Option<SlotKey>,
}

impl Dispatcher {
    pub fn new(
        store: SlotStore,
        clipboard: Box<dyn ClipboardProvider>,
        snapshot: SnapshotFile,
    ) -> Self {
        Self {
            store,
            clipboard,
            snapshot,
            active_load: None,
        }
    }

    /// Consume events until the channel closes.
    ///
    /// A failed action is logged and the loop moves on; nothing short of the
    /// producer disappearing stops the dispatcher. On exit the store is
    /// saved once more (each store action already saved synchronously, so
    /// this only matters for an orderly shutdown mid-queue).
    pub fn run(&mut self, rx: Receiver<ChordEvent>) {
        while let Ok(event) = rx.recv() {
            match self.dispatch(&event) {
                Ok(()) => {}
                Err(e @ DispatchError::EmptyClipboard(_)) => log::info!("{}", e),
                Err(DispatchError::Slot(e)) => log::warn!("{}", e),
                Err(e) => log::error!(
                    "Failed to handle {:?} for slot {}: {}",
                    event.action,
                    event.slot,
                    e
                ),
            }
        }
        log::info!("Event channel closed, saving slots");
        if let Err(e) = self.snapshot.save(&self.store) {
            log::error!("Final snapshot save failed: {}", e);
        }
    }

    /// Apply one chord event to the store/clipboard pair
    pub fn dispatch(&mut self, event: &ChordEvent) -> Result<(), DispatchError> {
        match event.action {
            ChordAction::Store => self.handle_store(event.slot),
            ChordAction::Recall => self.handle_recall(event.slot),
        }
    }

    /// Capture the current clipboard text into `slot` and persist
    fn handle_store(&mut self, slot: SlotKey) -> Result<(), DispatchError> {
        let text = self.clipboard.read_text()?;
        if text.is_empty() {
            return Err(DispatchError::EmptyClipboard(slot));
        }
        let shown = preview(&text, LOG_PREVIEW_CHARS);
        self.store.store(slot, text);
        self.snapshot.save(&self.store)?;
        log::info!("{} <- \"{}\"", slot, shown);
        Ok(())
    }

    /// Load `slot` into the clipboard
    fn handle_recall(&mut self, slot: SlotKey) -> Result<(), DispatchError> {
        let entry = self.store.load(slot)?;
        self.clipboard.write_text(&entry.content)?;
        self.active_load = Some(slot);
        log::info!("{} -> clipboard", slot);
        Ok(())
    }

    /// Slot whose content was most recently loaded into the clipboard
    pub fn active_load(&self) -> Option<SlotKey> {
        self.active_load
    }

    /// Read access to the owned store
    pub fn store(&self) -> &SlotStore {
        &self.store
    }
}
