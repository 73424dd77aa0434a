//! MultiClip - Slot module
//!
//! The named-slot data model: validated keys and the in-memory mapping

pub mod key;
pub mod store;

pub use key::{SlotError, SlotKey, SLOT_COUNT};
pub use store::{preview, SlotEntry, SlotStore};
