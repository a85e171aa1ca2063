// Emily Symbols Forward Lookup
// Renders a stroke's symbol with spacing, attachment and capitalization codes

use super::{
    LookupError, SymbolCodec, CAPITALIZE_NEXT, GLUE, LONGEST_KEY, RESET_FORMATTING,
    RETROSPECTIVE_MACROS,
};
use crate::method::AttachmentMethod;
use crate::stroke::{normalize_numbers, parse_stroke, Stroke, StrokeParseError};

impl SymbolCodec {
    /// Parse a raw stroke and check its starter against the table
    ///
    /// Embedded digits are rewritten to number-bar keys first.
    pub fn parse(&self, raw: &str) -> Result<Stroke, LookupError> {
        let malformed = |source: StrokeParseError| LookupError::MalformedStroke {
            stroke: raw.to_string(),
            source,
        };

        let normalized = normalize_numbers(raw);
        let stroke = parse_stroke(&normalized).map_err(malformed)?;
        if !self.symbols().is_starter(&stroke.starter) {
            return Err(malformed(StrokeParseError::UnknownStarter(
                stroke.starter,
            )));
        }
        Ok(stroke)
    }

    /// Translate one stroke into its output
    ///
    /// # Examples
    /// ```
    /// use emily_symbols_core::{AttachmentMethod, SymbolCodec};
    /// let codec = SymbolCodec::standard(AttachmentMethod::Space);
    /// assert_eq!(codec.lookup("SKWHAO-FR").unwrap(), "{} ! {}");
    /// assert_eq!(codec.lookup("SKWH*FRTS").unwrap(), "{^} !!!! {^}{-|}");
    /// ```
    pub fn lookup(&self, raw: &str) -> Result<String, LookupError> {
        let stroke = self.parse(raw)?;
        self.render(&stroke)
    }

    /// Translate an outline; only single-stroke outlines are defined
    pub fn lookup_outline<S: AsRef<str>>(&self, strokes: &[S]) -> Result<String, LookupError> {
        if strokes.len() != LONGEST_KEY {
            return Err(LookupError::MalformedStroke {
                stroke: strokes
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join("/"),
                source: StrokeParseError::WrongStrokeCount(strokes.len()),
            });
        }
        self.lookup(strokes[0].as_ref())
    }

    /// Render an already parsed stroke
    pub fn render(&self, stroke: &Stroke) -> Result<String, LookupError> {
        let entry = self
            .symbols()
            .get(&stroke.starter, &stroke.pattern)
            .ok_or_else(|| LookupError::UnknownPattern {
                starter: stroke.starter.clone(),
                pattern: stroke.pattern.clone(),
            })?;

        let selection = entry.select(stroke.variant);
        let attach_left = self.method.attaches(stroke.left_key);
        let attach_right = self.method.attaches(stroke.right_key);

        let mut output = selection.repeat(stroke.repeat);

        if !RETROSPECTIVE_MACROS.contains(&selection) {
            output = format!(" {} ", output);
            if attach_left {
                output.insert_str(0, GLUE);
            }
            if attach_right {
                output.push_str(GLUE);
            }
        }

        if self.method == AttachmentMethod::Space {
            if !attach_left {
                output.insert_str(0, RESET_FORMATTING);
            }
            if !attach_right {
                output.push_str(RESET_FORMATTING);
            }
        }

        if stroke.capitalize {
            output.push_str(CAPITALIZE_NEXT);
        }

        Ok(output)
    }
}
