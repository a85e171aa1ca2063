// Emily Symbols Standard Banks
// Built-in symbol table: the standard SKWH bank and an empty custom bank

use super::{SymbolEntry, SymbolTable};

/// Starter of the built-in symbol bank
pub const STANDARD_STARTER: &str = "SKWH";

/// Starter reserved for user-defined symbols
pub const CUSTOM_STARTER: &str = "#SKWH";

/// Output of the placeholder entry in an unused custom bank
pub const PLACEHOLDER_SYMBOL: &str = "test";

// variant order: none, E, U, EU
const STANDARD_SYMBOLS: &[(&str, [&str; 4])] = &[
    // computer functions
    ("FG", ["{#Tab}", "{#Backspace}", "{#Delete}", "{#Escape}"]),
    ("RPBG", ["{#Up}", "{#Left}", "{#Right}", "{#Down}"]),
    ("FRPBG", ["{#Page_Up}", "{#Home}", "{#End}", "{#Page_Down}"]),
    ("FRBG", ["{#AudioPlay}", "{#AudioPrev}", "{#AudioNext}", "{#AudioStop}"]),
    ("FRB", ["{#AudioMute}", "{#AudioLowerVolume}", "{#AudioRaiseVolume}", "{#Eject}"]),
    ("", ["", "{*!}", "{*?}", "{#Space}"]),
    ("FL", ["{*-|}", "{*<}", "{<}", "{*>}"]),
    // typable symbols
    ("FR", ["!", "¬", "↦", "¡"]),
    ("FP", ["\"", "“", "”", "„"]),
    ("FRLG", ["#", "©", "®", "™"]),
    ("RPBL", ["$", "¥", "€", "£"]),
    ("FRPB", ["%", "‰", "‱", "φ"]),
    ("FBG", ["&", "∩", "∧", "∈"]),
    ("F", ["'", "‘", "’", "‚"]),
    ("FPL", ["(", "[", "<", "\\{"]),
    ("RBG", [")", "]", ">", "\\}"]),
    ("L", ["*", "∏", "§", "×"]),
    ("G", ["+", "∑", "¶", "±"]),
    ("B", [",", "∪", "∨", "∉"]),
    ("PL", ["-", "−", "–", "—"]),
    ("R", [".", "•", "·", "…"]),
    ("RP", ["/", "⇒", "⇔", "÷"]),
    ("LG", [":", "∋", "∵", "∴"]),
    ("RB", [";", "∀", "∃", "∄"]),
    ("PBLG", ["=", "≡", "≈", "≠"]),
    ("FPB", ["?", "¿", "∝", "‽"]),
    ("FRPBLG", ["@", "⊕", "⊗", "∅"]),
    ("FB", ["\\", "Δ", "√", "∞"]),
    ("RPG", ["^", "«", "»", "°"]),
    ("BG", ["_", "≤", "≥", "µ"]),
    ("P", ["`", "⊂", "⊃", "π"]),
    ("PB", ["|", "⊤", "⊥", "¦"]),
    ("FPBG", ["~", "⊆", "⊇", "˜"]),
    ("FPBL", ["↑", "←", "→", "↓"]),
];

impl SymbolTable {
    /// The built-in table
    ///
    /// Holds the standard `SKWH` bank and a `#SKWH` custom bank containing
    /// only the placeholder entry.
    pub fn standard() -> Self {
        let mut builder = SymbolTable::builder();
        let result = builder.starter(STANDARD_STARTER).and_then(|builder| {
            for (pattern, outputs) in STANDARD_SYMBOLS {
                builder.symbol(STANDARD_STARTER, pattern, SymbolEntry::variants(*outputs))?;
            }
            builder.starter(CUSTOM_STARTER)?.symbol(
                CUSTOM_STARTER,
                "",
                SymbolEntry::fixed(PLACEHOLDER_SYMBOL),
            )
        });
        if let Err(e) = result {
            unreachable!("standard symbol table is malformed: {}", e);
        }
        builder.build()
    }

    /// Whether a starter's bank holds nothing but the placeholder entry
    pub fn is_placeholder_bank(&self, starter: &str) -> bool {
        self.bank(starter).is_some_and(|bank| {
            bank.len() == 1
                && bank
                    .get("")
                    .is_some_and(|entry| *entry == SymbolEntry::fixed(PLACEHOLDER_SYMBOL))
        })
    }
}
