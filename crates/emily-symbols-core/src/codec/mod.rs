// Emily Symbols Codec
// Forward (stroke -> output) and reverse (output -> strokes) translation

mod forward;
mod reverse;

use std::sync::Arc;

use crate::index::ReverseIndex;
use crate::method::AttachmentMethod;
use crate::stroke::StrokeParseError;
use crate::symbols::{SymbolTable, TableError};

/// Suppresses the space on one side of the output
pub const GLUE: &str = "{^}";

/// Cancels pending formatting on one side of the output
pub const RESET_FORMATTING: &str = "{}";

/// Capitalizes the next word
pub const CAPITALIZE_NEXT: &str = "{-|}";

/// Retrospectively add / delete a space. Never padded or glued.
pub const RETROSPECTIVE_MACROS: [&str; 2] = ["{*!}", "{*?}"];

/// Longest outline (in strokes) the dictionary translates
pub const LONGEST_KEY: usize = 1;

/// Errors returned by [`SymbolCodec::lookup`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("malformed stroke '{stroke}': {source}")]
    MalformedStroke {
        stroke: String,
        source: StrokeParseError,
    },

    #[error("no symbol for pattern '{pattern}' under starter '{starter}'")]
    UnknownPattern { starter: String, pattern: String },
}

#[derive(Debug)]
struct Tables {
    symbols: SymbolTable,
    index: ReverseIndex,
}

/// Translates symbol strokes to output and back
///
/// The symbol table and its reverse index are built once and shared; codecs
/// derived with [`SymbolCodec::with_method`] reuse them, so codecs for both
/// attachment methods can run side by side.
///
/// # Examples
/// ```
/// use emily_symbols_core::{AttachmentMethod, SymbolCodec};
/// let codec = SymbolCodec::standard(AttachmentMethod::Space);
/// assert_eq!(codec.lookup("SKWHFR").unwrap(), "{^} ! {^}");
/// assert_eq!(codec.reverse_lookup("{^} ! {^}"), vec!["SKWH-FR"]);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolCodec {
    tables: Arc<Tables>,
    method: AttachmentMethod,
}

impl SymbolCodec {
    /// Build a codec over a symbol table
    ///
    /// Derives the reverse index, failing if the table maps two positions
    /// to the same output.
    pub fn new(symbols: SymbolTable, method: AttachmentMethod) -> Result<Self, TableError> {
        let index = ReverseIndex::build(&symbols)?;
        Ok(Self {
            tables: Arc::new(Tables { symbols, index }),
            method,
        })
    }

    /// Codec over the built-in symbol table
    pub fn standard(method: AttachmentMethod) -> Self {
        match Self::new(SymbolTable::standard(), method) {
            Ok(codec) => codec,
            Err(e) => unreachable!("standard symbol table is not reversible: {}", e),
        }
    }

    /// Same tables, different attachment method
    pub fn with_method(&self, method: AttachmentMethod) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
            method,
        }
    }

    pub fn method(&self) -> AttachmentMethod {
        self.method
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.tables.symbols
    }

    pub fn index(&self) -> &ReverseIndex {
        &self.tables.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolEntry;

    #[test]
    fn test_with_method_shares_tables() {
        let space = SymbolCodec::standard(AttachmentMethod::Space);
        let attachment = space.with_method(AttachmentMethod::Attachment);
        assert!(Arc::ptr_eq(&space.tables, &attachment.tables));
        assert_eq!(space.method(), AttachmentMethod::Space);
        assert_eq!(attachment.method(), AttachmentMethod::Attachment);
    }

    #[test]
    fn test_new_rejects_ambiguous_table() {
        let mut builder = SymbolTable::builder();
        builder
            .starter("SKWH")
            .unwrap()
            .symbol("SKWH", "F", SymbolEntry::fixed("!"))
            .unwrap()
            .symbol("SKWH", "FR", SymbolEntry::fixed("!"))
            .unwrap();
        let result = SymbolCodec::new(builder.build(), AttachmentMethod::Space);
        assert!(matches!(result, Err(TableError::DuplicateOutput { .. })));
    }

    #[test]
    fn test_codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SymbolCodec>();
    }
}
