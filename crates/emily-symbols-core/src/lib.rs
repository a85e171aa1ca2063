// Emily Symbols Core Library
// Stroke grammar, symbol table and the stroke <-> output codec

pub mod codec;
pub mod dictionary;
pub mod index;
pub mod key;
pub mod method;
pub mod settings;
pub mod stroke;
pub mod symbols;

pub use codec::{LookupError, SymbolCodec, CAPITALIZE_NEXT, GLUE, LONGEST_KEY, RESET_FORMATTING};
pub use dictionary::{embed_numbers, generate, Dictionary, GenerateOptions};
pub use index::{RepetitionMatch, ReverseEntry, ReverseIndex};
pub use key::KeyClass;
pub use method::AttachmentMethod;
pub use settings::{Settings, SettingsError};
pub use stroke::{parse_stroke, Stroke, StrokeParseError};
pub use symbols::{SymbolEntry, SymbolTable, TableError};
