//! MultiClip - Key mapping
//!
//! Fixed tables from raw `rdev` keys to slot characters and modifier roles

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use rdev::Key;
use serde::{Deserialize, Serialize};

/// Raw key → slot character, covering A-Z, the digit row and the keypad
static KEYMAP: Lazy<HashMap<Key, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let letters = [
        (Key::KeyA, 'A'),
        (Key::KeyB, 'B'),
        (Key::KeyC, 'C'),
        (Key::KeyD, 'D'),
        (Key::KeyE, 'E'),
        (Key::KeyF, 'F'),
        (Key::KeyG, 'G'),
        (Key::KeyH, 'H'),
        (Key::KeyI, 'I'),
        (Key::KeyJ, 'J'),
        (Key::KeyK, 'K'),
        (Key::KeyL, 'L'),
        (Key::KeyM, 'M'),
        (Key::KeyN, 'N'),
        (Key::KeyO, 'O'),
        (Key::KeyP, 'P'),
        (Key::KeyQ, 'Q'),
        (Key::KeyR, 'R'),
        (Key::KeyS, 'S'),
        (Key::KeyT, 'T'),
        (Key::KeyU, 'U'),
        (Key::KeyV, 'V'),
        (Key::KeyW, 'W'),
        (Key::KeyX, 'X'),
        (Key::KeyY, 'Y'),
        (Key::KeyZ, 'Z'),
    ];
    let digits = [
        (Key::Num0, '0'),
        (Key::Num1, '1'),
        (Key::Num2, '2'),
        (Key::Num3, '3'),
        (Key::Num4, '4'),
        (Key::Num5, '5'),
        (Key::Num6, '6'),
        (Key::Num7, '7'),
        (Key::Num8, '8'),
        (Key::Num9, '9'),
    ];
    let keypad = [
        (Key::Kp0, '0'),
        (Key::Kp1, '1'),
        (Key::Kp2, '2'),
        (Key::Kp3, '3'),
        (Key::Kp4, '4'),
        (Key::Kp5, '5'),
        (Key::Kp6, '6'),
        (Key::Kp7, '7'),
        (Key::Kp8, '8'),
        (Key::Kp9, '9'),
    ];
    for (key, ch) in letters.into_iter().chain(digits).chain(keypad) {
        map.insert(key, ch);
    }
    map
});

/// Slot character for a raw key, if it belongs to the slot alphabet
pub fn slot_char_for(key: Key) -> Option<char> {
    KEYMAP.get(&key).copied()
}

/// A chord modifier role, matching both physical sides of the key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

impl Modifier {
    /// Whether `key` is one of this modifier's physical keys
    pub fn matches(self, key: Key) -> bool {
        match self {
            Modifier::Ctrl => matches!(key, Key::ControlLeft | Key::ControlRight),
            Modifier::Alt => matches!(key, Key::Alt | Key::AltGr),
            Modifier::Shift => matches!(key, Key::ShiftLeft | Key::ShiftRight),
            Modifier::Meta => matches!(key, Key::MetaLeft | Key::MetaRight),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::Meta => "Meta",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::SlotKey;

    #[test]
    fn letters_and_digits_map_to_slot_chars() {
        assert_eq!(slot_char_for(Key::KeyA), Some('A'));
        assert_eq!(slot_char_for(Key::KeyZ), Some('Z'));
        assert_eq!(slot_char_for(Key::Num0), Some('0'));
        assert_eq!(slot_char_for(Key::Num9), Some('9'));
    }

    #[test]
    fn keypad_digits_map_like_the_digit_row() {
        assert_eq!(slot_char_for(Key::Kp0), Some('0'));
        assert_eq!(slot_char_for(Key::Kp7), Some('7'));
    }

    #[test]
    fn non_slot_keys_do_not_map() {
        assert_eq!(slot_char_for(Key::Space), None);
        assert_eq!(slot_char_for(Key::Dot), None);
        assert_eq!(slot_char_for(Key::F5), None);
        assert_eq!(slot_char_for(Key::ControlLeft), None);
    }

    #[test]
    fn every_mapped_char_is_a_valid_slot_key() {
        for ch in KEYMAP.values() {
            SlotKey::new(*ch).unwrap();
        }
    }

    #[test]
    fn modifiers_match_both_physical_sides() {
        assert!(Modifier::Ctrl.matches(Key::ControlLeft));
        assert!(Modifier::Ctrl.matches(Key::ControlRight));
        assert!(Modifier::Alt.matches(Key::Alt));
        assert!(Modifier::Alt.matches(Key::AltGr));
        assert!(Modifier::Shift.matches(Key::ShiftLeft));
        assert!(Modifier::Shift.matches(Key::ShiftRight));
        assert!(Modifier::Meta.matches(Key::MetaLeft));
        assert!(Modifier::Meta.matches(Key::MetaRight));
        assert!(!Modifier::Ctrl.matches(Key::Alt));
        assert!(!Modifier::Meta.matches(Key::KeyA));
    }

    #[test]
    fn modifier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Modifier::Ctrl).unwrap(), "\"ctrl\"");
        let parsed: Modifier = serde_json::from_str("\"meta\"").unwrap();
        assert_eq!(parsed, Modifier::Meta);
    }
}
