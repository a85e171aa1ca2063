// Emily Symbols Number Embedding
// Rewrites number-bar outlines with digits (#SKWH -> 1KW4)

use crate::key::{KeyClass, NUMBER_KEY};
use crate::stroke::Stroke;

/// Digit written for a key, given the group it sits in
fn key_digit(class: KeyClass, key: char) -> Option<char> {
    match (class, key) {
        (KeyClass::Starter, 'S') => Some('1'),
        (KeyClass::Starter, 'T') => Some('2'),
        (KeyClass::Starter, 'P') => Some('3'),
        (KeyClass::Starter, 'H') => Some('4'),
        (KeyClass::Attachment, 'A') => Some('5'),
        (KeyClass::Attachment, 'O') => Some('0'),
        (KeyClass::Pattern, 'F') => Some('6'),
        (KeyClass::Pattern, 'P') => Some('7'),
        (KeyClass::Pattern, 'L') => Some('8'),
        (KeyClass::Repetition, 'T') => Some('9'),
        _ => None,
    }
}

/// Write a stroke with its number-bar keys as digits
///
/// Only strokes whose starter holds the number key are rewritten; the number
/// key itself is dropped since digits imply it. Returns `None` when the
/// stroke has no number key or no key with a digit.
///
/// # Examples
/// ```
/// use emily_symbols_core::dictionary::embed_numbers;
/// use emily_symbols_core::stroke::parse_stroke;
/// let stroke = parse_stroke("#SKWHA-FPL").unwrap();
/// assert_eq!(embed_numbers(&stroke).as_deref(), Some("1KW45678"));
/// ```
pub fn embed_numbers(stroke: &Stroke) -> Option<String> {
    if !stroke.starter.contains(NUMBER_KEY) {
        return None;
    }

    let mut embedded = false;
    let outline: String = stroke
        .keys()
        .into_iter()
        .filter(|&(_, key)| key != NUMBER_KEY)
        .map(|(class, key)| match key_digit(class, key) {
            Some(digit) => {
                embedded = true;
                digit
            }
            None => key,
        })
        .collect();

    embedded.then_some(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{normalize_numbers, parse_stroke};

    #[test]
    fn test_embed_custom_starter() {
        let stroke = parse_stroke("#SKWH").unwrap();
        assert_eq!(embed_numbers(&stroke).as_deref(), Some("1KW4"));
    }

    #[test]
    fn test_embed_uses_key_position() {
        // Left P is 3, right P is 7; right T is 9, right S has no digit
        let stroke = parse_stroke("#STPH-PTS").unwrap();
        assert_eq!(embed_numbers(&stroke).as_deref(), Some("1234-79S"));
    }

    #[test]
    fn test_embed_keeps_non_number_keys() {
        let stroke = parse_stroke("#SKWH*EURBG").unwrap();
        assert_eq!(embed_numbers(&stroke).as_deref(), Some("1KW4*EURBG"));
    }

    #[test]
    fn test_embed_skips_outlines_without_number_key() {
        let stroke = parse_stroke("SKWHFR").unwrap();
        assert_eq!(embed_numbers(&stroke), None);
    }

    #[test]
    fn test_embed_skips_number_key_without_digits() {
        let stroke = parse_stroke("#KWR").unwrap();
        assert_eq!(embed_numbers(&stroke), None);
    }

    #[test]
    fn test_embedded_outline_normalizes_back() {
        for raw in ["#SKWH", "#SKWHAO-FPL", "#SKWH*EUFRPBLGTS", "#SKWH-RS"] {
            let stroke = parse_stroke(raw).unwrap();
            let embedded = embed_numbers(&stroke).unwrap();
            let reparsed = parse_stroke(&normalize_numbers(&embedded)).unwrap();
            assert_eq!(reparsed, stroke, "{} -> {}", raw, embedded);
        }
    }
}
