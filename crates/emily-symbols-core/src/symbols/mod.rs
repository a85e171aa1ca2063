// Emily Symbols Table API
// Symbol banks, their entries, and loading from TOML

pub mod entry;
pub mod parser;
pub mod standard;
pub mod table;

pub use entry::SymbolEntry;
pub use parser::{StarterToml, SymbolTableToml, SymbolTomlValue};
pub use standard::{CUSTOM_STARTER, PLACEHOLDER_SYMBOL, STANDARD_STARTER};
pub use table::{SymbolTable, SymbolTableBuilder, TableError};
