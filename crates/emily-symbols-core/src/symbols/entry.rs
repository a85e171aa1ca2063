// Emily Symbols Table Entry
// A pattern's output: one fixed string or four positional variants

/// Output bound to a (starter, pattern) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolEntry {
    /// Same output whatever variant keys are pressed
    Fixed(String),
    /// Outputs for variant none, E, U and EU
    Variant([String; 4]),
}

impl SymbolEntry {
    pub fn fixed(output: impl Into<String>) -> Self {
        SymbolEntry::Fixed(output.into())
    }

    pub fn variants(outputs: [&str; 4]) -> Self {
        SymbolEntry::Variant(outputs.map(str::to_string))
    }

    /// Output for a variant number; fixed entries ignore the variant
    pub fn select(&self, variant: usize) -> &str {
        match self {
            SymbolEntry::Fixed(output) => output,
            SymbolEntry::Variant(outputs) => &outputs[variant.min(outputs.len() - 1)],
        }
    }

    /// Every output with the variant number that selects it
    ///
    /// A fixed entry yields its output once, under variant 0.
    pub fn outputs(&self) -> Vec<(usize, &str)> {
        match self {
            SymbolEntry::Fixed(output) => vec![(0, output.as_str())],
            SymbolEntry::Variant(outputs) => outputs
                .iter()
                .enumerate()
                .map(|(variant, output)| (variant, output.as_str()))
                .collect(),
        }
    }

    pub fn is_variant(&self) -> bool {
        matches!(self, SymbolEntry::Variant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_variant() {
        let entry = SymbolEntry::variants(["!", "¬", "↦", "¡"]);
        assert_eq!(entry.select(0), "!");
        assert_eq!(entry.select(1), "¬");
        assert_eq!(entry.select(2), "↦");
        assert_eq!(entry.select(3), "¡");
    }

    #[test]
    fn test_fixed_ignores_variant() {
        let entry = SymbolEntry::fixed("test");
        for variant in 0..4 {
            assert_eq!(entry.select(variant), "test");
        }
        assert_eq!(entry.outputs(), vec![(0, "test")]);
    }

    #[test]
    fn test_outputs_in_variant_order() {
        let entry = SymbolEntry::variants(["(", "[", "<", "\\{"]);
        let outputs = entry.outputs();
        assert_eq!(outputs.len(), 4);
        assert_eq!(outputs[3], (3, "\\{"));
    }
}
