// Emily Symbols Table Parser - TOML with Serde
// Loads custom symbol tables from TOML files

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::{SymbolEntry, SymbolTable, TableError};

/// Root of a symbol table file
///
/// ```toml
/// [[starter]]
/// keys = "SKWH"
///
/// [starter.symbols]
/// FR = ["!", "¬", "↦", "¡"]
/// "" = "nothing"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolTableToml {
    /// Starter banks, in declaration order
    #[serde(default)]
    pub starter: Vec<StarterToml>,
}

/// One starter bank
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StarterToml {
    /// Starter signature
    pub keys: String,

    /// Pattern-to-output mappings
    #[serde(default)]
    pub symbols: IndexMap<String, SymbolTomlValue>,
}

/// Output side of a symbol mapping
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SymbolTomlValue {
    /// Variant-insensitive output
    Single(String),

    /// Outputs per variant (must hold four)
    Multiple(Vec<String>),
}

impl SymbolTomlValue {
    fn into_entry(self, starter: &str, pattern: &str) -> Result<SymbolEntry, TableError> {
        match self {
            SymbolTomlValue::Single(output) => Ok(SymbolEntry::Fixed(output)),
            SymbolTomlValue::Multiple(outputs) => {
                let count = outputs.len();
                let outputs: [String; 4] =
                    outputs.try_into().map_err(|_| TableError::VariantCount {
                        starter: starter.to_string(),
                        pattern: pattern.to_string(),
                        count,
                    })?;
                Ok(SymbolEntry::Variant(outputs))
            }
        }
    }
}

impl SymbolTableToml {
    /// Validate and convert into a [`SymbolTable`]
    pub fn to_table(self) -> Result<SymbolTable, TableError> {
        let mut builder = SymbolTable::builder();
        for bank in self.starter {
            builder.starter(&bank.keys)?;
            for (pattern, value) in bank.symbols {
                let entry = value.into_entry(&bank.keys, &pattern)?;
                builder.symbol(&bank.keys, &pattern, entry)?;
            }
        }
        let table = builder.build();
        log::debug!(
            "Loaded symbol table with {} starters and {} entries",
            table.starters().count(),
            table.len()
        );
        Ok(table)
    }
}

impl SymbolTable {
    /// Parse a symbol table from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, TableError> {
        let toml_table: SymbolTableToml =
            toml::from_str(content).map_err(|e| TableError::TomlParse(e.to_string()))?;
        toml_table.to_table()
    }

    /// Load a symbol table from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let content = fs::read_to_string(&path)?;
        log::debug!("Reading symbol table from {}", path.as_ref().display());
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let toml = r##"
[[starter]]
keys = "SKWH"

[starter.symbols]
FR = ["!", "¬", "↦", "¡"]
"" = ["", "{*!}", "{*?}", "{#Space}"]

[[starter]]
keys = "#SKWH"

[starter.symbols]
"" = "test"
"##;

        let table = SymbolTable::from_toml(toml).unwrap();
        assert_eq!(table.starters().collect::<Vec<_>>(), vec!["SKWH", "#SKWH"]);
        assert_eq!(table.get("SKWH", "FR").unwrap().select(3), "¡");
        assert_eq!(table.get("SKWH", "").unwrap().select(1), "{*!}");
        assert_eq!(table.get("#SKWH", ""), Some(&SymbolEntry::fixed("test")));
    }

    #[test]
    fn test_parse_keeps_pattern_order() {
        let toml = r#"
[[starter]]
keys = "SKWH"

[starter.symbols]
R = "."
FR = "!"
B = ","
"#;

        let table = SymbolTable::from_toml(toml).unwrap();
        let patterns: Vec<_> = table.entries().map(|(_, p, _)| p).collect();
        assert_eq!(patterns, vec!["R", "FR", "B"]);
    }

    #[test]
    fn test_parse_rejects_wrong_variant_count() {
        let toml = r#"
[[starter]]
keys = "SKWH"

[starter.symbols]
FR = ["!", "¬"]
"#;

        let result = SymbolTable::from_toml(toml);
        assert!(matches!(
            result,
            Err(TableError::VariantCount { count: 2, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_bad_pattern() {
        let toml = r#"
[[starter]]
keys = "SKWH"

[starter.symbols]
RF = "!"
"#;

        assert!(matches!(
            SymbolTable::from_toml(toml),
            Err(TableError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicate_starter() {
        let toml = r#"
[[starter]]
keys = "SKWH"

[[starter]]
keys = "SKWH"
"#;

        assert!(matches!(
            SymbolTable::from_toml(toml),
            Err(TableError::DuplicateStarter(_))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let toml = r#"
[[starter]]
keys = "SKWH"
colour = "blue"
"#;

        assert!(matches!(
            SymbolTable::from_toml(toml),
            Err(TableError::TomlParse(_))
        ));
    }
}
