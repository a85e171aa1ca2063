// Emily Symbols Stroke Type
// A symbol stroke decomposed into its six key groups

pub mod parser;

pub use parser::{normalize_numbers, parse_stroke, StrokeParseError};

use std::fmt;

use crate::key::{
    KeyClass, CAPITALIZE_KEY, LEFT_ATTACH_KEY, MAX_REPEAT, REPETITION_SELECTORS,
    RIGHT_ATTACH_KEY, SEPARATOR_KEY, VARIANT_SELECTORS,
};

/// A symbol stroke with its modifiers resolved to values
///
/// Parsing accepts modifier keys in any order and repeated; `Display`
/// always writes the canonical steno-ordered form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stroke {
    /// Starter signature (e.g. `SKWH`)
    pub starter: String,
    /// `A` key present
    pub left_key: bool,
    /// `O` key present
    pub right_key: bool,
    /// `*` key present
    pub capitalize: bool,
    /// Variant number 0..=3 (none, E, U, EU)
    pub variant: usize,
    /// Pattern keys, a subsequence of `FRPBLG`
    pub pattern: String,
    /// Repetition count 1..=4
    pub repeat: usize,
}

impl Stroke {
    /// Create a stroke with no modifiers
    pub fn new(starter: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            starter: starter.into(),
            left_key: false,
            right_key: false,
            capitalize: false,
            variant: 0,
            pattern: pattern.into(),
            repeat: 1,
        }
    }

    pub fn with_attachments(mut self, left_key: bool, right_key: bool) -> Self {
        self.left_key = left_key;
        self.right_key = right_key;
        self
    }

    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    /// Set the variant number, clamped to 0..=3
    pub fn with_variant(mut self, variant: usize) -> Self {
        self.variant = variant.min(VARIANT_SELECTORS.len() - 1);
        self
    }

    /// Set the repetition count, clamped to 1..=4
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat.clamp(1, MAX_REPEAT);
        self
    }

    /// Variant selector keys (`""`, `E`, `U` or `EU`)
    pub fn variant_keys(&self) -> &'static str {
        VARIANT_SELECTORS[self.variant]
    }

    /// Repetition keys (`""`, `S`, `T` or `TS`)
    pub fn repetition_keys(&self) -> &'static str {
        REPETITION_SELECTORS[self.repeat - 1]
    }

    /// Whether the `-` separator has to be written
    ///
    /// It is only needed when right-bank keys would otherwise follow the
    /// starter directly.
    pub fn needs_separator(&self) -> bool {
        !self.capitalize
            && !self.left_key
            && !self.right_key
            && self.variant == 0
            && !(self.pattern.is_empty() && self.repeat == 1)
    }

    /// Canonical key sequence, each key tagged with its class
    pub fn keys(&self) -> Vec<(KeyClass, char)> {
        let mut keys = Vec::with_capacity(self.starter.len() + 8);
        keys.extend(self.starter.chars().map(|k| (KeyClass::Starter, k)));
        if self.left_key {
            keys.push((KeyClass::Attachment, LEFT_ATTACH_KEY));
        }
        if self.right_key {
            keys.push((KeyClass::Attachment, RIGHT_ATTACH_KEY));
        }
        if self.capitalize {
            keys.push((KeyClass::Capitalization, CAPITALIZE_KEY));
        } else if self.needs_separator() {
            keys.push((KeyClass::Capitalization, SEPARATOR_KEY));
        }
        keys.extend(self.variant_keys().chars().map(|k| (KeyClass::Variant, k)));
        keys.extend(self.pattern.chars().map(|k| (KeyClass::Pattern, k)));
        keys.extend(
            self.repetition_keys()
                .chars()
                .map(|k| (KeyClass::Repetition, k)),
        );
        keys
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, key) in self.keys() {
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_separator_before_right_bank_keys() {
        assert_eq!(Stroke::new("SKWH", "R").to_string(), "SKWH-R");
        assert_eq!(Stroke::new("SKWH", "").with_repeat(2).to_string(), "SKWH-S");
    }

    #[test]
    fn test_display_drops_separator_when_not_needed() {
        assert_eq!(Stroke::new("SKWH", "").to_string(), "SKWH");
        assert_eq!(
            Stroke::new("SKWH", "FR").with_attachments(true, false).to_string(),
            "SKWHAFR"
        );
        assert_eq!(Stroke::new("SKWH", "FR").with_variant(1).to_string(), "SKWHEFR");
        assert_eq!(Stroke::new("#SKWH", "").to_string(), "#SKWH");
    }

    #[test]
    fn test_display_canonical_order() {
        let stroke = Stroke::new("SKWH", "FPL")
            .with_attachments(true, true)
            .with_capitalize(true)
            .with_variant(3)
            .with_repeat(4);
        assert_eq!(stroke.to_string(), "SKWHAO*EUFPLTS");
    }

    #[test]
    fn test_repeat_and_variant_are_clamped() {
        let stroke = Stroke::new("SKWH", "F").with_repeat(9).with_variant(7);
        assert_eq!(stroke.repeat, 4);
        assert_eq!(stroke.variant, 3);
        assert_eq!(Stroke::new("SKWH", "F").with_repeat(0).repeat, 1);
    }

    #[test]
    fn test_keys_are_tagged_with_their_class() {
        let keys = Stroke::new("SKWH", "R").with_repeat(3).keys();
        assert_eq!(keys[0], (KeyClass::Starter, 'S'));
        assert_eq!(keys[4], (KeyClass::Capitalization, '-'));
        assert_eq!(keys[5], (KeyClass::Pattern, 'R'));
        assert_eq!(keys[6], (KeyClass::Repetition, 'T'));
    }
}
