// Emily Symbols Reverse Lookup
// Recovers the strokes that render to a given output

use super::{SymbolCodec, CAPITALIZE_NEXT, GLUE, RESET_FORMATTING};
use crate::method::AttachmentMethod;
use crate::stroke::Stroke;

/// Output with its control codes removed
#[derive(Debug, Clone, PartialEq, Eq)]
struct Framing<'a> {
    text: &'a str,
    left_key: bool,
    right_key: bool,
    capitalize: bool,
}

/// Undo the framing added by forward lookup
///
/// The side flags record whether the `A`/`O` key was pressed, not whether
/// the side attaches. Under the space method a pressed key shows up as a
/// reset marker and an absent key as glue, so only the reset marker sets
/// the flag; under the attachment method a pressed key shows up as glue.
fn strip_framing(output: &str, method: AttachmentMethod) -> Framing<'_> {
    let (mut text, capitalize) = match output.strip_suffix(CAPITALIZE_NEXT) {
        Some(rest) => (rest, true),
        None => (output, false),
    };

    let (left_key, right_key) = match method {
        AttachmentMethod::Space => {
            let left_key = text.starts_with(RESET_FORMATTING);
            text = text.strip_prefix(RESET_FORMATTING).unwrap_or(text);
            text = text.strip_prefix(GLUE).unwrap_or(text);
            let right_key = text.ends_with(RESET_FORMATTING);
            text = text.strip_suffix(RESET_FORMATTING).unwrap_or(text);
            text = text.strip_suffix(GLUE).unwrap_or(text);
            (left_key, right_key)
        }
        AttachmentMethod::Attachment => {
            let left_key = text.starts_with(GLUE);
            text = text.strip_prefix(GLUE).unwrap_or(text);
            let right_key = text.ends_with(GLUE);
            text = text.strip_suffix(GLUE).unwrap_or(text);
            (left_key, right_key)
        }
    };

    Framing {
        text: text.trim(),
        left_key,
        right_key,
        capitalize,
    }
}

impl SymbolCodec {
    /// Find the strokes that produce `output`
    ///
    /// Returns canonical strokes (see [`Stroke`]'s `Display`), ordered by
    /// the declaration order of the matched symbol. An empty result means no
    /// stroke produces this output.
    ///
    /// # Examples
    /// ```
    /// use emily_symbols_core::{AttachmentMethod, SymbolCodec};
    /// let codec = SymbolCodec::standard(AttachmentMethod::Space);
    /// assert_eq!(codec.reverse_lookup("{} ¡¡ {^}{-|}"), vec!["SKWHA*EUFRS"]);
    /// assert!(codec.reverse_lookup("hello").is_empty());
    /// ```
    pub fn reverse_lookup(&self, output: &str) -> Vec<String> {
        self.reverse_strokes(output)
            .iter()
            .map(Stroke::to_string)
            .collect()
    }

    /// Like [`SymbolCodec::reverse_lookup`], returning parsed strokes
    pub fn reverse_strokes(&self, output: &str) -> Vec<Stroke> {
        let framing = strip_framing(output, self.method);

        self.index()
            .match_repetitions(framing.text)
            .into_iter()
            .map(|found| {
                Stroke::new(found.entry.starter.as_str(), found.entry.pattern.as_str())
                    .with_attachments(framing.left_key, framing.right_key)
                    .with_capitalize(framing.capitalize)
                    .with_variant(found.entry.variant)
                    .with_repeat(found.count)
            })
            .collect()
    }
}
