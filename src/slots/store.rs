//! MultiClip - Slot store
//!
//! In-memory slot mapping with ordered iteration and whole-store replacement

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::key::{SlotError, SlotKey};

/// Render a single-line preview of slot content.
///
/// Newlines collapse to spaces and the result is truncated to `max_chars`
/// characters with a `...` marker, multi-byte text included.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    let flat = flat.trim();
    if flat.chars().count() <= max_chars {
        flat.to_string()
    } else {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

/// A stored slot value with its storage timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntry {
    /// Stored text (may be empty, never absent)
    pub content: String,
    /// When the value was stored
    pub stored_at: DateTime<Utc>,
}

impl SlotEntry {
    /// Create an entry stamped with the current time
    pub fn new(content: String) -> Self {
        Self {
            content,
            stored_at: Utc::now(),
        }
    }

    /// Single-line preview of the content
    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.content, max_chars)
    }
}

/// In-memory mapping of slot keys to stored values.
///
/// Bounded at 36 entries by the `SlotKey` alphabet; iteration is ordered by
/// key. The daemon's dispatcher owns the store exclusively for the process
/// lifetime; the snapshot codec only borrows it per save/load call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotStore {
    slots: BTreeMap<SlotKey, SlotEntry>,
}

impl SlotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from an already-validated mapping
    pub fn from_slots(slots: BTreeMap<SlotKey, SlotEntry>) -> Self {
        Self { slots }
    }

    /// Insert or overwrite a slot value, stamping the storage time
    pub fn store(&mut self, key: SlotKey, content: String) {
        self.slots.insert(key, SlotEntry::new(content));
    }

    /// Look up a slot value.
    ///
    /// Presence is tracked, not content truthiness: a slot holding the empty
    /// string loads successfully, only a never-stored key is
    /// `SlotError::Empty`.
    pub fn load(&self, key: SlotKey) -> Result<&SlotEntry, SlotError> {
        self.slots.get(&key).ok_or(SlotError::Empty(key))
    }

    /// Iterate all slots in key order
    pub fn all(&self) -> impl Iterator<Item = (SlotKey, &SlotEntry)> {
        self.slots.iter().map(|(k, v)| (*k, v))
    }

    /// Atomically replace the whole mapping.
    ///
    /// Keys present only in the old store disappear. Callers validate the
    /// replacement before calling, so this can never half-apply.
    pub fn replace_all(&mut self, other: SlotStore) {
        self.slots = other.slots;
    }

    /// Remove a single slot, returning the old entry if it existed.
    ///
    /// The hotkey engine never removes slots; this backs the offline
    /// `clear` maintenance command.
    pub fn clear_slot(&mut self, key: SlotKey) -> Option<SlotEntry> {
        self.slots.remove(&key)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is occupied
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
