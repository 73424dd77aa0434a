//! MultiClip - Hotkeys module
//!
//! Global chord capture: key map, chord recognizer, and the raw key listener

pub mod keymap;
pub mod listener;
pub mod recognizer;

pub use keymap::Modifier;
pub use listener::HotkeyListener;
pub use recognizer::{ChordAction, ChordEvent, ChordRecognizer};
