// Emily Symbols Reverse Index
// Literal output -> (starter, variant, pattern), derived once from the symbol table

use std::fmt;

use indexmap::map::Entry;
use indexmap::IndexMap;
use regex::Regex;

use crate::key::{MAX_REPEAT, VARIANT_SELECTORS};
use crate::symbols::{SymbolTable, TableError};

/// Where a literal output comes from in the symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseEntry {
    pub starter: String,
    /// Variant number 0..=3; always 0 for fixed entries
    pub variant: usize,
    pub pattern: String,
}

impl ReverseEntry {
    /// Variant selector keys (`""`, `E`, `U` or `EU`)
    pub fn variant_keys(&self) -> &'static str {
        VARIANT_SELECTORS[self.variant]
    }
}

impl fmt::Display for ReverseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pattern '{}' variant '{}'",
            self.starter,
            self.pattern,
            self.variant_keys()
        )
    }
}

/// A run of one literal repeated back to back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionMatch<'a> {
    pub count: usize,
    pub entry: &'a ReverseEntry,
}

/// Inverse of a [`SymbolTable`]
#[derive(Debug, Clone)]
pub struct ReverseIndex {
    entries: IndexMap<String, ReverseEntry>,
    /// Accepts 1-4 known non-empty literals back to back
    matcher: Option<Regex>,
}

impl ReverseIndex {
    /// Invert a symbol table
    ///
    /// Fails with [`TableError::DuplicateOutput`] if two table positions
    /// produce the same literal, since reverse lookup could not tell them
    /// apart.
    pub fn build(table: &SymbolTable) -> Result<Self, TableError> {
        let mut entries: IndexMap<String, ReverseEntry> = IndexMap::new();

        for (starter, pattern, symbol) in table.entries() {
            for (variant, output) in symbol.outputs() {
                let entry = ReverseEntry {
                    starter: starter.to_string(),
                    variant,
                    pattern: pattern.to_string(),
                };
                match entries.entry(output.to_string()) {
                    Entry::Occupied(existing) => {
                        return Err(TableError::DuplicateOutput {
                            output: output.to_string(),
                            first: existing.get().to_string(),
                            second: entry.to_string(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
            }
        }

        let alternatives: Vec<String> = entries
            .keys()
            .filter(|literal| !literal.is_empty())
            .map(|literal| regex::escape(literal))
            .collect();
        let matcher = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(
                "^(?:{}){{1,{}}}$",
                alternatives.join("|"),
                MAX_REPEAT
            ))?)
        };

        log::debug!("Built reverse index with {} literals", entries.len());

        Ok(Self { entries, matcher })
    }

    pub fn get(&self, literal: &str) -> Option<&ReverseEntry> {
        self.entries.get(literal)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decompose text into one literal repeated 1-4 times
    ///
    /// Empty text matches the empty literal once, if the table has one.
    /// Text mixing different literals, or repeating one more than four
    /// times, matches nothing. Results are ordered by the declaration order
    /// of their literal.
    pub fn match_repetitions(&self, text: &str) -> Vec<RepetitionMatch<'_>> {
        if text.is_empty() {
            return self
                .entries
                .get("")
                .map(|entry| RepetitionMatch { count: 1, entry })
                .into_iter()
                .collect();
        }

        match &self.matcher {
            Some(matcher) if matcher.is_match(text) => {}
            _ => return Vec::new(),
        }

        let mut matches: Vec<(usize, RepetitionMatch<'_>)> = (1..=MAX_REPEAT)
            .filter(|count| text.len() % count == 0)
            .filter_map(|count| {
                let unit = text.get(..text.len() / count)?;
                if unit.repeat(count) != text {
                    return None;
                }
                let (order, _, entry) = self.entries.get_full(unit)?;
                Some((order, RepetitionMatch { count, entry }))
            })
            .collect();

        matches.sort_by_key(|(order, _)| *order);
        matches.into_iter().map(|(_, m)| m).collect()
    }
}
