// Emily Symbols Key Alphabet
// Steno key classes that make up a symbol stroke, in steno order

use std::fmt;

/// The number bar key. Prepended when a stroke carries digits.
pub const NUMBER_KEY: char = '#';

/// Left-side attachment key
pub const LEFT_ATTACH_KEY: char = 'A';
/// Right-side attachment key
pub const RIGHT_ATTACH_KEY: char = 'O';
/// Capitalization key
pub const CAPITALIZE_KEY: char = '*';
/// Separator that stands in the capitalization slot when nothing else
/// splits the starter from right-bank keys
pub const SEPARATOR_KEY: char = '-';

/// Ordered pattern alphabet. Patterns are subsequences of this string.
pub const PATTERN_KEYS: &str = "FRPBLG";

/// Keys substituted for the digits 0-9
pub const DIGIT_KEYS: [char; 10] = ['O', 'S', 'T', 'P', 'H', 'A', 'F', 'P', 'L', 'T'];

/// Variant selector keys indexed by variant number
pub const VARIANT_SELECTORS: [&str; 4] = ["", "E", "U", "EU"];

/// Repetition keys indexed by `repeat - 1`
pub const REPETITION_SELECTORS: [&str; 4] = ["", "S", "T", "TS"];

/// Highest repetition count a stroke can express
pub const MAX_REPEAT: usize = 4;

/// The six key groups of a symbol stroke
///
/// A stroke is written as one run of each class in this order; the
/// capitalization class holds at most one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// `#STKPWHR` - selects the symbol bank
    Starter,
    /// `AO` - attach (or space) on the left/right side
    Attachment,
    /// `*-` - capitalize next word, or plain separator
    Capitalization,
    /// `EU` - one of four variants
    Variant,
    /// `FRPBLG` - selects the symbol within a bank
    Pattern,
    /// `TS` - repeat the symbol up to four times
    Repetition,
}

impl KeyClass {
    /// All classes in grammar order
    pub const ORDER: [KeyClass; 6] = [
        KeyClass::Starter,
        KeyClass::Attachment,
        KeyClass::Capitalization,
        KeyClass::Variant,
        KeyClass::Pattern,
        KeyClass::Repetition,
    ];

    /// Keys belonging to this class
    pub fn keys(self) -> &'static str {
        match self {
            KeyClass::Starter => "#STKPWHR",
            KeyClass::Attachment => "AO",
            KeyClass::Capitalization => "*-",
            KeyClass::Variant => "EU",
            KeyClass::Pattern => PATTERN_KEYS,
            KeyClass::Repetition => "TS",
        }
    }

    /// Check if a key belongs to this class
    pub fn contains(self, key: char) -> bool {
        self.keys().contains(key)
    }

    /// Maximum number of keys a stroke may carry for this class
    pub fn max_run(self) -> usize {
        match self {
            KeyClass::Capitalization => 1,
            _ => usize::MAX,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeyClass::Starter => "starter",
            KeyClass::Attachment => "attachment",
            KeyClass::Capitalization => "capitalization",
            KeyClass::Variant => "variant",
            KeyClass::Pattern => "pattern",
            KeyClass::Repetition => "repetition",
        }
    }
}

impl fmt::Display for KeyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Get the key a digit stands for on the number bar
pub fn digit_key(digit: char) -> Option<char> {
    digit
        .to_digit(10)
        .map(|d| DIGIT_KEYS[d as usize])
}

/// Check that a starter is non-empty and made only of starter keys
pub fn is_starter(starter: &str) -> bool {
    !starter.is_empty() && starter.chars().all(|c| KeyClass::Starter.contains(c))
}

/// Check that a pattern is an ordered subsequence of [`PATTERN_KEYS`]
///
/// The empty pattern is valid. Each key may appear at most once.
pub fn is_pattern(pattern: &str) -> bool {
    let mut alphabet = PATTERN_KEYS.chars();
    pattern
        .chars()
        .all(|key| alphabet.by_ref().any(|candidate| candidate == key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        assert_eq!(digit_key('0'), Some('O'));
        assert_eq!(digit_key('1'), Some('S'));
        assert_eq!(digit_key('3'), Some('P'));
        assert_eq!(digit_key('7'), Some('P'));
        assert_eq!(digit_key('9'), Some('T'));
        assert_eq!(digit_key('x'), None);
    }

    #[test]
    fn test_is_pattern_accepts_ordered_subsequences() {
        assert!(is_pattern(""));
        assert!(is_pattern("F"));
        assert!(is_pattern("FR"));
        assert!(is_pattern("RPBL"));
        assert!(is_pattern("FRPBLG"));
    }

    #[test]
    fn test_is_pattern_rejects_out_of_order_and_foreign_keys() {
        assert!(!is_pattern("RF"));
        assert!(!is_pattern("FF"));
        assert!(!is_pattern("FX"));
        assert!(!is_pattern("GL"));
    }

    #[test]
    fn test_is_starter() {
        assert!(is_starter("SKWH"));
        assert!(is_starter("#SKWH"));
        assert!(!is_starter(""));
        assert!(!is_starter("SKWHA"));
    }

    #[test]
    fn test_classes_are_disjoint_where_the_grammar_needs_it() {
        // Only the starter class shares keys with later classes
        for (i, a) in KeyClass::ORDER.iter().enumerate().skip(1) {
            for b in KeyClass::ORDER.iter().skip(i + 1) {
                assert!(
                    !a.keys().chars().any(|k| b.contains(k)),
                    "{} and {} overlap",
                    a,
                    b
                );
            }
        }
    }
}
