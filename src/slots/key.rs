//! MultiClip - Slot key type
//!
//! The validated slot identifier drawn from the fixed A-Z / 0-9 alphabet

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of addressable slots (A-Z plus 0-9)
pub const SLOT_COUNT: usize = 36;

/// Slot-level error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Key outside the supported alphabet
    #[error("invalid slot key '{0}' (valid keys are A-Z and 0-9)")]
    InvalidKey(char),
    /// Recall of a slot that was never stored
    #[error("slot {0} is empty")]
    Empty(SlotKey),
}

/// A single slot identifier from the fixed alphabet {A-Z, 0-9}.
///
/// Lowercase letters are normalized on construction, so the canonical form
/// is always an ASCII uppercase letter or a digit. Keys order the way their
/// characters do: digits first, then letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(char);

impl SlotKey {
    /// Create a key from a character, normalizing lowercase input
    pub fn new(c: char) -> Result<Self, SlotError> {
        let up = c.to_ascii_uppercase();
        if up.is_ascii_uppercase() || up.is_ascii_digit() {
            Ok(SlotKey(up))
        } else {
            Err(SlotError::InvalidKey(c))
        }
    }

    /// The canonical (uppercase) key character
    pub fn as_char(&self) -> char {
        self.0
    }

    /// All valid keys in ascending order (digits, then letters)
    pub fn all() -> impl Iterator<Item = SlotKey> {
        ('0'..='9').chain('A'..='Z').map(SlotKey)
    }
}

impl TryFrom<char> for SlotKey {
    type Error = SlotError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        SlotKey::new(c)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as a one-character string so snapshot map keys stay readable
// and anything outside the alphabet fails the parse instead of smuggling
// bad state into a loaded store.
impl Serialize for SlotKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.0.encode_utf8(&mut buf))
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = SlotKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a single-character slot key (A-Z or 0-9)")
            }

            fn visit_str<E>(self, v: &str) -> Result<SlotKey, E>
            where
                E: de::Error,
            {
                let mut chars = v.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => SlotKey::new(c).map_err(E::custom),
                    _ => Err(E::custom(format!("invalid slot key {:?}", v))),
                }
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_and_digits() {
        assert_eq!(SlotKey::new('A').unwrap().as_char(), 'A');
        assert_eq!(SlotKey::new('Z').unwrap().as_char(), 'Z');
        assert_eq!(SlotKey::new('0').unwrap().as_char(), '0');
        assert_eq!(SlotKey::new('9').unwrap().as_char(), '9');
    }

    #[test]
    fn normalizes_lowercase() {
        assert_eq!(SlotKey::new('k').unwrap().as_char(), 'K');
        assert_eq!(SlotKey::new('a').unwrap(), SlotKey::new('A').unwrap());
    }

    #[test]
    fn rejects_out_of_alphabet() {
        for c in ['%', ' ', '.', '\n', 'é', '~'] {
            assert_eq!(SlotKey::new(c), Err(SlotError::InvalidKey(c)));
        }
    }

    #[test]
    fn alphabet_has_36_ordered_keys() {
        let keys: Vec<SlotKey> = SlotKey::all().collect();
        assert_eq!(keys.len(), SLOT_COUNT);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.first().unwrap().as_char(), '0');
        assert_eq!(keys.last().unwrap().as_char(), 'Z');
    }

    #[test]
    fn serde_roundtrip() {
        let key = SlotKey::new('G').unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"G\"");
        let back: SlotKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn deserialize_rejects_bad_keys() {
        for raw in ["\"\"", "\"AB\"", "\"%\"", "42"] {
            assert!(serde_json::from_str::<SlotKey>(raw).is_err(), "{raw}");
        }
    }
}
