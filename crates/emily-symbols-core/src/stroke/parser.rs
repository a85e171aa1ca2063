// Emily Symbols Stroke Parser
// Staged tokenizer splitting a raw stroke like "SKWHAO*EUFPLTS" into key groups

use std::borrow::Cow;
use std::fmt;

use super::Stroke;
use crate::key::{digit_key, KeyClass, CAPITALIZE_KEY, LEFT_ATTACH_KEY, NUMBER_KEY, RIGHT_ATTACH_KEY};

/// Errors that can occur while parsing a stroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrokeParseError {
    /// A key outside the grammar, or a key out of steno order
    UnexpectedKey { key: char, position: usize },
    /// The starter is not one of the symbol table's starters
    UnknownStarter(String),
    /// Outline does not consist of exactly one stroke
    WrongStrokeCount(usize),
}

impl fmt::Display for StrokeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrokeParseError::UnexpectedKey { key, position } => {
                write!(f, "unexpected key '{}' at position {}", key, position)
            }
            StrokeParseError::UnknownStarter(starter) => {
                write!(f, "unknown starter: '{}'", starter)
            }
            StrokeParseError::WrongStrokeCount(count) => {
                write!(f, "expected exactly one stroke, got {}", count)
            }
        }
    }
}

impl std::error::Error for StrokeParseError {}

/// Rewrite embedded digits as number-bar keys
///
/// Strokes without digits are returned unchanged. Otherwise every digit is
/// replaced by its key and the number key `#` is prepended, so `1KW4` becomes
/// `#SKWH`.
pub fn normalize_numbers(raw: &str) -> Cow<'_, str> {
    if !raw.chars().any(|c| c.is_ascii_digit()) {
        return Cow::Borrowed(raw);
    }

    let mut normalized = String::with_capacity(raw.len() + 1);
    normalized.push(NUMBER_KEY);
    normalized.extend(raw.chars().map(|c| digit_key(c).unwrap_or(c)));
    Cow::Owned(normalized)
}

/// Cursor over the raw stroke, consuming one key class per stage
struct Tokenizer<'a> {
    raw: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(raw: &'a str) -> Self {
        Self { raw, pos: 0 }
    }

    /// Consume the longest run of keys from `class`
    fn stage(&mut self, class: KeyClass) -> &'a str {
        let start = self.pos;
        let run = self.raw[start..]
            .chars()
            .take_while(|&c| class.contains(c))
            .take(class.max_run())
            .map(char::len_utf8)
            .sum::<usize>();
        self.pos += run;
        &self.raw[start..self.pos]
    }

    /// Fail on the first key no stage consumed
    fn finish(&self) -> Result<(), StrokeParseError> {
        match self.raw[self.pos..].chars().next() {
            Some(key) => Err(StrokeParseError::UnexpectedKey {
                key,
                position: self.raw[..self.pos].chars().count(),
            }),
            None => Ok(()),
        }
    }
}

/// Parse a raw stroke into its key groups
///
/// The grammar is `starter* attachment* capitalization? variant* pattern*
/// repetition*`. Every stage is greedy, so starter keys that also appear on
/// the right bank (`R`, `P`, `S`, `T`) are read as part of the starter unless
/// something else separates them; `SKWH-R` is the period, `SKWHR` is a
/// stroke with starter `SKWHR`.
///
/// Digits are not handled here; run [`normalize_numbers`] first. The starter
/// is not checked against a symbol table either.
///
/// # Examples
/// ```
/// use emily_symbols_core::stroke::parse_stroke;
/// let stroke = parse_stroke("SKWHA*EFRS").unwrap();
/// assert_eq!(stroke.starter, "SKWH");
/// assert!(stroke.left_key && stroke.capitalize);
/// assert_eq!(stroke.variant, 1);
/// assert_eq!(stroke.pattern, "FR");
/// assert_eq!(stroke.repeat, 2);
/// ```
pub fn parse_stroke(raw: &str) -> Result<Stroke, StrokeParseError> {
    let mut tokens = Tokenizer::new(raw);

    let starter = tokens.stage(KeyClass::Starter);
    let attachments = tokens.stage(KeyClass::Attachment);
    let capitalization = tokens.stage(KeyClass::Capitalization);
    let variants = tokens.stage(KeyClass::Variant);
    let pattern = tokens.stage(KeyClass::Pattern);
    let repetitions = tokens.stage(KeyClass::Repetition);
    tokens.finish()?;

    let mut variant = 0;
    if variants.contains('E') {
        variant += 1;
    }
    if variants.contains('U') {
        variant += 2;
    }

    let mut repeat = 1;
    if repetitions.contains('S') {
        repeat += 1;
    }
    if repetitions.contains('T') {
        repeat += 2;
    }

    Ok(Stroke {
        starter: starter.to_string(),
        left_key: attachments.contains(LEFT_ATTACH_KEY),
        right_key: attachments.contains(RIGHT_ATTACH_KEY),
        capitalize: capitalization.starts_with(CAPITALIZE_KEY),
        variant,
        pattern: pattern.to_string(),
        repeat,
    })
}
