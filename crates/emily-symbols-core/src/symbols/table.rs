// Emily Symbols Table
// Starter -> pattern -> output banks, in declaration order

use indexmap::IndexMap;

use super::SymbolEntry;
use crate::key::{is_pattern, is_starter};

/// Errors raised while building or loading a symbol table
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("invalid starter '{0}': starters use only the keys #STKPWHR")]
    InvalidStarter(String),

    #[error("starter '{0}' is declared more than once")]
    DuplicateStarter(String),

    #[error("starter '{0}' has not been declared")]
    UnknownStarter(String),

    #[error("invalid pattern '{pattern}' under starter '{starter}': patterns are ordered subsets of FRPBLG")]
    InvalidPattern { starter: String, pattern: String },

    #[error("pattern '{pattern}' is declared more than once under starter '{starter}'")]
    DuplicatePattern { starter: String, pattern: String },

    #[error("pattern '{pattern}' under starter '{starter}' has {count} variants, expected 1 or 4")]
    VariantCount {
        starter: String,
        pattern: String,
        count: usize,
    },

    #[error("output '{output}' is produced by both {first} and {second}")]
    DuplicateOutput {
        output: String,
        first: String,
        second: String,
    },

    #[error("failed to compile output matcher: {0}")]
    Matcher(#[from] regex::Error),
}

/// Symbols grouped by starter
///
/// Immutable once built. Use [`SymbolTable::builder`] to assemble one by
/// hand, [`SymbolTable::from_toml`] to load one, or
/// [`SymbolTable::standard`] for the built-in banks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    banks: IndexMap<String, IndexMap<String, SymbolEntry>>,
}

impl SymbolTable {
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// Starters in declaration order
    pub fn starters(&self) -> impl Iterator<Item = &str> {
        self.banks.keys().map(String::as_str)
    }

    pub fn is_starter(&self, starter: &str) -> bool {
        self.banks.contains_key(starter)
    }

    /// All patterns of one starter, in declaration order
    pub fn bank(&self, starter: &str) -> Option<&IndexMap<String, SymbolEntry>> {
        self.banks.get(starter)
    }

    pub fn get(&self, starter: &str, pattern: &str) -> Option<&SymbolEntry> {
        self.banks.get(starter)?.get(pattern)
    }

    /// Every `(starter, pattern, entry)` in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &SymbolEntry)> {
        self.banks.iter().flat_map(|(starter, bank)| {
            bank.iter()
                .map(move |(pattern, entry)| (starter.as_str(), pattern.as_str(), entry))
        })
    }

    /// Number of (starter, pattern) entries
    pub fn len(&self) -> usize {
        self.banks.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Incremental, validating constructor for [`SymbolTable`]
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    banks: IndexMap<String, IndexMap<String, SymbolEntry>>,
}

impl SymbolTableBuilder {
    /// Declare a starter bank
    pub fn starter(&mut self, starter: &str) -> Result<&mut Self, TableError> {
        if !is_starter(starter) {
            return Err(TableError::InvalidStarter(starter.to_string()));
        }
        if self.banks.contains_key(starter) {
            return Err(TableError::DuplicateStarter(starter.to_string()));
        }
        self.banks.insert(starter.to_string(), IndexMap::new());
        Ok(self)
    }

    /// Bind a pattern of an already declared starter
    pub fn symbol(
        &mut self,
        starter: &str,
        pattern: &str,
        entry: SymbolEntry,
    ) -> Result<&mut Self, TableError> {
        let bank = self
            .banks
            .get_mut(starter)
            .ok_or_else(|| TableError::UnknownStarter(starter.to_string()))?;

        if !is_pattern(pattern) {
            return Err(TableError::InvalidPattern {
                starter: starter.to_string(),
                pattern: pattern.to_string(),
            });
        }
        if bank.contains_key(pattern) {
            return Err(TableError::DuplicatePattern {
                starter: starter.to_string(),
                pattern: pattern.to_string(),
            });
        }

        bank.insert(pattern.to_string(), entry);
        Ok(self)
    }

    pub fn build(self) -> SymbolTable {
        SymbolTable { banks: self.banks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SymbolTable {
        let mut builder = SymbolTable::builder();
        builder
            .starter("SKWH")
            .unwrap()
            .symbol("SKWH", "FR", SymbolEntry::variants(["!", "¬", "↦", "¡"]))
            .unwrap()
            .symbol("SKWH", "R", SymbolEntry::variants([".", "•", "·", "…"]))
            .unwrap()
            .starter("#SKWH")
            .unwrap()
            .symbol("#SKWH", "", SymbolEntry::fixed("test"))
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_table_lookup() {
        let table = sample();
        assert_eq!(table.get("SKWH", "FR").unwrap().select(0), "!");
        assert_eq!(table.get("#SKWH", "").unwrap().select(2), "test");
        assert!(table.get("SKWH", "G").is_none());
        assert!(table.get("STKPW", "FR").is_none());
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_keeps_declaration_order() {
        let table = sample();
        assert_eq!(table.starters().collect::<Vec<_>>(), vec!["SKWH", "#SKWH"]);
        let patterns: Vec<_> = table.entries().map(|(_, p, _)| p).collect();
        assert_eq!(patterns, vec!["FR", "R", ""]);
    }

    #[test]
    fn test_builder_rejects_invalid_starter() {
        let mut builder = SymbolTable::builder();
        assert!(matches!(
            builder.starter("SKWHA"),
            Err(TableError::InvalidStarter(_))
        ));
        assert!(matches!(builder.starter(""), Err(TableError::InvalidStarter(_))));
    }

    #[test]
    fn test_builder_rejects_duplicate_starter() {
        let mut builder = SymbolTable::builder();
        builder.starter("SKWH").unwrap();
        assert!(matches!(
            builder.starter("SKWH"),
            Err(TableError::DuplicateStarter(_))
        ));
    }

    #[test]
    fn test_builder_rejects_bad_patterns() {
        let mut builder = SymbolTable::builder();
        builder.starter("SKWH").unwrap();
        assert!(matches!(
            builder.symbol("SKWH", "RF", SymbolEntry::fixed("x")),
            Err(TableError::InvalidPattern { .. })
        ));
        builder.symbol("SKWH", "F", SymbolEntry::fixed("x")).unwrap();
        assert!(matches!(
            builder.symbol("SKWH", "F", SymbolEntry::fixed("y")),
            Err(TableError::DuplicatePattern { .. })
        ));
        assert!(matches!(
            builder.symbol("TKPW", "F", SymbolEntry::fixed("y")),
            Err(TableError::UnknownStarter(_))
        ));
    }
}
