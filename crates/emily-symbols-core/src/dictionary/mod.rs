// Emily Symbols Dictionary Generator
// Enumerates every outline of a symbol table and materializes its translations

pub mod numbers;

pub use numbers::embed_numbers;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::codec::SymbolCodec;
use crate::key::{MAX_REPEAT, PATTERN_KEYS, VARIANT_SELECTORS};
use crate::method::AttachmentMethod;
use crate::stroke::Stroke;
use crate::symbols::SymbolTable;

/// Every pattern (subsequence of `FRPBLG`) in binary counting order
///
/// Bit 5 selects `F` and bit 0 selects `G`, so the order runs `""`, `G`,
/// `L`, `LG`, `B`, ... `FRPBLG`.
pub fn patterns() -> Vec<String> {
    let keys: Vec<char> = PATTERN_KEYS.chars().collect();
    (0..1u32 << keys.len())
        .map(|mask| {
            keys.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << (keys.len() - 1 - i)) != 0)
                .map(|(_, &key)| key)
                .collect::<String>()
        })
        .collect()
}

/// Every stroke the grammar can form for the table's starters
///
/// Starters whose bank only holds the placeholder symbol are skipped. Strokes
/// come out in canonical form, one per distinct key combination.
pub fn outlines(table: &SymbolTable) -> Vec<Stroke> {
    let patterns = patterns();
    let mut strokes = Vec::new();

    for starter in table.starters() {
        if table.is_placeholder_bank(starter) {
            log::debug!("Skipping placeholder bank '{}'", starter);
            continue;
        }

        for (left_key, right_key) in [(false, false), (true, false), (false, true), (true, true)] {
            for capitalize in [true, false] {
                for variant in 0..VARIANT_SELECTORS.len() {
                    for pattern in &patterns {
                        for repeat in 1..=MAX_REPEAT {
                            strokes.push(
                                Stroke::new(starter, pattern.as_str())
                                    .with_attachments(left_key, right_key)
                                    .with_capitalize(capitalize)
                                    .with_variant(variant)
                                    .with_repeat(repeat),
                            );
                        }
                    }
                }
            }
        }
    }

    strokes
}

/// Options for [`generate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Also add number-embedded duplicates of `#` outlines (`1KW4` next to `#SKWH`)
    pub embed_numbers: bool,
}

/// Outline -> translation mapping for one attachment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    method: AttachmentMethod,
    entries: IndexMap<String, String>,
}

impl Dictionary {
    pub fn method(&self) -> AttachmentMethod {
        self.method
    }

    pub fn get(&self, outline: &str) -> Option<&str> {
        self.entries.get(outline).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Default file name, e.g. `emily-symbols-space.json`
    pub fn file_name(&self) -> String {
        format!("emily-symbols-{}.json", self.method)
    }

    /// Pretty-printed JSON object in generation order
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }

    /// Write the JSON dictionary into `directory` under [`Dictionary::file_name`]
    pub fn write_to<P: AsRef<Path>>(&self, directory: P) -> io::Result<PathBuf> {
        let path = directory.as_ref().join(self.file_name());
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(&path, json)?;
        log::info!("Wrote {} entries to {}", self.len(), path.display());
        Ok(path)
    }
}

/// Translate every outline of the codec's table
///
/// Outlines the codec rejects (unknown patterns, mostly) are left out.
pub fn generate(codec: &SymbolCodec, options: GenerateOptions) -> Dictionary {
    let mut entries = IndexMap::new();
    let mut skipped = 0usize;

    for stroke in outlines(codec.symbols()) {
        let outline = stroke.to_string();
        let translation = match codec.render(&stroke) {
            Ok(translation) => translation,
            Err(e) => {
                log::trace!("Skipping '{}': {}", outline, e);
                skipped += 1;
                continue;
            }
        };

        if options.embed_numbers {
            if let Some(embedded) = embed_numbers(&stroke) {
                match codec.lookup(&embedded) {
                    Ok(embedded_translation) => {
                        entries.insert(embedded, embedded_translation);
                    }
                    Err(e) => log::warn!("Embedded outline '{}' does not resolve: {}", embedded, e),
                }
            }
        }

        entries.insert(outline, translation);
    }

    log::debug!(
        "Generated {} entries for the {} method ({} outlines skipped)",
        entries.len(),
        codec.method(),
        skipped
    );

    Dictionary {
        method: codec.method(),
        entries,
    }
}
