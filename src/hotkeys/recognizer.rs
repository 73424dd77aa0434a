//! MultiClip - Chord recognizer
//!
//! Pure state machine turning raw key press/release pairs into chord events

use std::collections::HashSet;

use rdev::{EventType, Key};

use super::keymap::{self, Modifier};
use crate::slots::SlotKey;

/// What a recognized chord asks the daemon to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordAction {
    /// Capture the current clipboard into the slot
    Store,
    /// Load the slot into the clipboard
    Recall,
}

/// A fully recognized hotkey chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordEvent {
    pub action: ChordAction,
    pub slot: SlotKey,
}

/// Recognizes store/recall chords from the raw key event stream.
///
/// A chord is a slot key pressed while exactly one of the two configured
/// modifiers is held. The modifier can stay down across several chords;
/// releasing it re-arms nothing special, each slot-key press is judged
/// against the modifier state at that moment. Keys outside the slot alphabet
/// and modifiers other than the configured two are ignored entirely.
pub struct ChordRecognizer {
    store_modifier: Modifier,
    recall_modifier: Modifier,
    store_held: bool,
    recall_held: bool,
    /// Slot keys currently physically down, to swallow OS auto-repeat
    held_slot_keys: HashSet<Key>,
}

impl ChordRecognizer {
    pub fn new(store_modifier: Modifier, recall_modifier: Modifier) -> Self {
        Self {
            store_modifier,
            recall_modifier,
            store_held: false,
            recall_held: false,
            held_slot_keys: HashSet::new(),
        }
    }

    /// Feed one raw event through the state machine.
    ///
    /// Returns a [`ChordEvent`] exactly when this event completes a chord.
    pub fn observe(&mut self, event: &EventType) -> Option<ChordEvent> {
        match event {
            EventType::KeyPress(key) => self.on_press(*key),
            EventType::KeyRelease(key) => {
                self.on_release(*key);
                None
            }
            _ => None,
        }
    }

    fn on_press(&mut self, key: Key) -> Option<ChordEvent> {
        if self.store_modifier.matches(key) {
            self.store_held = true;
            return None;
        }
        if self.recall_modifier.matches(key) {
            self.recall_held = true;
            return None;
        }

        let slot_char = keymap::slot_char_for(key)?;
        // Auto-repeat re-sends KeyPress while a key is down; one chord per
        // physical press
        if !self.held_slot_keys.insert(key) {
            return None;
        }

        let action = match (self.store_held, self.recall_held) {
            (true, false) => ChordAction::Store,
            (false, true) => ChordAction::Recall,
            // Neither modifier is ordinary typing; both at once is ambiguous
            _ => return None,
        };

        let slot = SlotKey::new(slot_char).ok()?;
        Some(ChordEvent { action, slot })
    }

    fn on_release(&mut self, key: Key) {
        if self.store_modifier.matches(key) {
            self.store_held = false;
        }
        if self.recall_modifier.matches(key) {
            self.recall_held = false;
        }
        self.held_slot_keys.remove(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> ChordRecognizer {
        ChordRecognizer::new(Modifier::Ctrl, Modifier::Alt)
    }

    fn press(r: &mut ChordRecognizer, key: Key) -> Option<ChordEvent> {
        r.observe(&EventType::KeyPress(key))
    }

    fn release(r: &mut ChordRecognizer, key: Key) {
        r.observe(&EventType::KeyRelease(key));
    }

    fn slot(c: char) -> SlotKey {
        SlotKey::new(c).unwrap()
    }

    #[test]
    fn store_chord_fires() {
        let mut r = recognizer();
        assert_eq!(press(&mut r, Key::ControlLeft), None);
        assert_eq!(
            press(&mut r, Key::KeyA),
            Some(ChordEvent {
                action: ChordAction::Store,
                slot: slot('A'),
            })
        );
    }

    #[test]
    fn recall_chord_fires() {
        let mut r = recognizer();
        press(&mut r, Key::Alt);
        assert_eq!(
            press(&mut r, Key::KeyB),
            Some(ChordEvent {
                action: ChordAction::Recall,
                slot: slot('B'),
            })
        );
    }

    #[test]
    fn digit_and_keypad_chords_fire() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        assert_eq!(press(&mut r, Key::Num7).map(|e| e.slot), Some(slot('7')));
        release(&mut r, Key::Num7);
        assert_eq!(press(&mut r, Key::Kp3).map(|e| e.slot), Some(slot('3')));
    }

    #[test]
    fn plain_typing_produces_nothing() {
        let mut r = recognizer();
        assert_eq!(press(&mut r, Key::KeyA), None);
        release(&mut r, Key::KeyA);
        assert_eq!(press(&mut r, Key::KeyA), None);
    }

    #[test]
    fn slot_key_pressed_before_modifier_does_not_fire() {
        let mut r = recognizer();
        press(&mut r, Key::KeyA);
        assert_eq!(press(&mut r, Key::ControlLeft), None);
    }

    #[test]
    fn auto_repeat_fires_once_per_physical_press() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        assert!(press(&mut r, Key::KeyA).is_some());
        // OS auto-repeat while A stays down
        assert_eq!(press(&mut r, Key::KeyA), None);
        assert_eq!(press(&mut r, Key::KeyA), None);
        // Released and pressed again is a new chord
        release(&mut r, Key::KeyA);
        assert!(press(&mut r, Key::KeyA).is_some());
    }

    #[test]
    fn several_chords_during_one_modifier_hold() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        assert_eq!(press(&mut r, Key::KeyA).map(|e| e.slot), Some(slot('A')));
        assert_eq!(press(&mut r, Key::KeyB).map(|e| e.slot), Some(slot('B')));
        release(&mut r, Key::KeyA);
        release(&mut r, Key::KeyB);
        assert_eq!(press(&mut r, Key::KeyC).map(|e| e.slot), Some(slot('C')));
    }

    #[test]
    fn modifier_release_disarms() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        release(&mut r, Key::ControlLeft);
        assert_eq!(press(&mut r, Key::KeyA), None);
    }

    #[test]
    fn both_modifiers_held_is_ambiguous() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        press(&mut r, Key::Alt);
        assert_eq!(press(&mut r, Key::KeyA), None);
        // Releasing one side resolves the ambiguity
        release(&mut r, Key::Alt);
        release(&mut r, Key::KeyA);
        assert_eq!(
            press(&mut r, Key::KeyA).map(|e| e.action),
            Some(ChordAction::Store)
        );
    }

    #[test]
    fn keys_outside_the_slot_alphabet_are_ignored() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        assert_eq!(press(&mut r, Key::Dot), None);
        assert_eq!(press(&mut r, Key::F5), None);
        assert_eq!(press(&mut r, Key::Space), None);
        // State is undisturbed; a real chord still fires
        assert!(press(&mut r, Key::KeyA).is_some());
    }

    #[test]
    fn untracked_modifiers_do_not_interfere() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        press(&mut r, Key::ShiftLeft);
        assert_eq!(
            press(&mut r, Key::KeyA).map(|e| e.action),
            Some(ChordAction::Store)
        );
    }

    #[test]
    fn right_side_modifier_keys_count() {
        let mut r = recognizer();
        press(&mut r, Key::ControlRight);
        assert_eq!(
            press(&mut r, Key::KeyA).map(|e| e.action),
            Some(ChordAction::Store)
        );
        release(&mut r, Key::ControlRight);
        release(&mut r, Key::KeyA);

        press(&mut r, Key::AltGr);
        assert_eq!(
            press(&mut r, Key::KeyA).map(|e| e.action),
            Some(ChordAction::Recall)
        );
    }

    #[test]
    fn non_key_events_are_ignored() {
        let mut r = recognizer();
        press(&mut r, Key::ControlLeft);
        assert_eq!(r.observe(&EventType::MouseMove { x: 4.0, y: 2.0 }), None);
        assert!(press(&mut r, Key::KeyA).is_some());
    }

    #[test]
    fn configured_modifiers_are_respected() {
        let mut r = ChordRecognizer::new(Modifier::Meta, Modifier::Shift);
        press(&mut r, Key::MetaLeft);
        assert_eq!(
            press(&mut r, Key::KeyQ).map(|e| e.action),
            Some(ChordAction::Store)
        );
        release(&mut r, Key::MetaLeft);
        release(&mut r, Key::KeyQ);

        press(&mut r, Key::ShiftRight);
        assert_eq!(
            press(&mut r, Key::KeyQ).map(|e| e.action),
            Some(ChordAction::Recall)
        );
        // Ctrl is nothing special under this configuration
        release(&mut r, Key::ShiftRight);
        release(&mut r, Key::KeyQ);
        press(&mut r, Key::ControlLeft);
        assert_eq!(press(&mut r, Key::KeyQ), None);
    }
}
