//! MultiClip - A multi-slot clipboard daemon
//!
//! Extends the system clipboard with named slots (A-Z, 0-9): global hotkey
//! chords store the current clipboard text into a slot or recall a slot back
//! into the paste buffer, and the slot table survives restarts through a
//! versioned JSON snapshot.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod daemon;
pub mod hotkeys;
pub mod slots;
pub mod storage;

pub use clipboard::{ClipboardError, ClipboardProvider, SystemClipboard};
pub use config::Settings;
pub use daemon::{DaemonError, DispatchError, Dispatcher};
pub use hotkeys::{ChordAction, ChordEvent, ChordRecognizer, Modifier};
pub use slots::{SlotEntry, SlotError, SlotKey, SlotStore};
pub use storage::{SnapshotError, SnapshotFile};
