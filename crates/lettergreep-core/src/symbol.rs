// Symbol and TokenStream public API types

use crate::enums::SymbolCategory;

// ---------------------------------------------------------------------------
// Symbol
// ---------------------------------------------------------------------------

/// A phonetic symbol: literal text plus its category.
///
/// Vowel symbols may span several characters (`øː`, `ʌʊ`); consonants produced
/// by the tokenizer fallback are always exactly one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// The literal text of this symbol.
    pub text: String,

    /// The category of this symbol.
    pub category: SymbolCategory,
}

impl Symbol {
    /// Create a new symbol.
    pub fn new(text: impl Into<String>, category: SymbolCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Create a vowel symbol.
    pub fn vowel(text: impl Into<String>) -> Self {
        Self::new(text, SymbolCategory::Vowel)
    }

    /// Create a consonant symbol.
    pub fn consonant(text: impl Into<String>) -> Self {
        Self::new(text, SymbolCategory::Consonant)
    }

    /// Create a stress marker symbol.
    pub fn stress_marker(text: impl Into<String>) -> Self {
        Self::new(text, SymbolCategory::StressMarker)
    }

    pub fn is_vowel(&self) -> bool {
        self.category == SymbolCategory::Vowel
    }

    pub fn is_consonant(&self) -> bool {
        self.category == SymbolCategory::Consonant
    }

    pub fn is_stress_marker(&self) -> bool {
        self.category == SymbolCategory::StressMarker
    }
}

// ---------------------------------------------------------------------------
// TokenStream
// ---------------------------------------------------------------------------

/// Ordered symbols produced for one input string.
///
/// Concatenating the texts of a freshly tokenized stream reproduces the input
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    symbols: Vec<Symbol>,
}

impl TokenStream {
    /// Create an empty token stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty token stream with room for `capacity` symbols.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    /// Concatenate all symbol texts.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.text.as_str()).collect()
    }

    /// Indices of all vowel symbols.
    pub fn nucleus_positions(&self) -> Vec<usize> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_vowel())
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of vowel symbols.
    pub fn nucleus_count(&self) -> usize {
        self.symbols.iter().filter(|s| s.is_vowel()).count()
    }

    /// A copy of this stream with every stress marker removed.
    pub fn without_stress_markers(&self) -> TokenStream {
        self.symbols
            .iter()
            .filter(|s| !s.is_stress_marker())
            .cloned()
            .collect()
    }
}

impl From<Vec<Symbol>> for TokenStream {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl FromIterator<Symbol> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TokenStream {
    type Item = Symbol;
    type IntoIter = std::vec::IntoIter<Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
