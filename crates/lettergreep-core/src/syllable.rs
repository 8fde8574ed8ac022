// Syllable and SyllabifiedWord public API types

use crate::enums::Stress;
use crate::symbol::Symbol;

// ---------------------------------------------------------------------------
// Syllable
// ---------------------------------------------------------------------------

/// One syllable: onset consonants, a nucleus, and coda consonants.
///
/// Stress markers never appear among the symbols; when the stress policy
/// retains them they are carried in [`Syllable::stress_marks`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    symbols: Vec<Symbol>,
    /// Index of the nucleus in `symbols`; always in bounds.
    nucleus: Option<usize>,
    stress_marks: Vec<Stress>,
}

impl Syllable {
    /// Create a syllable from its three parts.
    pub fn new(onset: Vec<Symbol>, nucleus: Symbol, coda: Vec<Symbol>) -> Self {
        let position = onset.len();
        let mut symbols = onset;
        symbols.reserve(coda.len() + 1);
        symbols.push(nucleus);
        symbols.extend(coda);
        Self {
            symbols,
            nucleus: Some(position),
            stress_marks: Vec::new(),
        }
    }

    /// Create a syllable without a nucleus, used when a word has no vowel.
    pub fn degenerate(symbols: Vec<Symbol>) -> Self {
        Self {
            symbols,
            nucleus: None,
            stress_marks: Vec::new(),
        }
    }

    /// Append one stress mark annotation.
    pub fn with_stress(mut self, stress: Stress) -> Self {
        self.stress_marks.push(stress);
        self
    }

    /// Append stress mark annotations, in input order.
    pub fn with_stress_marks(mut self, marks: impl IntoIterator<Item = Stress>) -> Self {
        self.stress_marks.extend(marks);
        self
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Every stress mark carried by this syllable, in input order.
    pub fn stress_marks(&self) -> &[Stress] {
        &self.stress_marks
    }

    /// The strongest stress carried by this syllable.
    pub fn stress(&self) -> Option<Stress> {
        self.stress_marks.iter().max().copied()
    }

    pub fn is_degenerate(&self) -> bool {
        self.nucleus.is_none()
    }

    /// The nucleus symbol, if any.
    pub fn nucleus(&self) -> Option<&Symbol> {
        self.nucleus.and_then(|i| self.symbols.get(i))
    }

    /// Symbols before the nucleus. A degenerate syllable is all onset.
    pub fn onset(&self) -> &[Symbol] {
        match self.nucleus {
            Some(i) => &self.symbols[..i],
            None => &self.symbols,
        }
    }

    /// Symbols after the nucleus.
    pub fn coda(&self) -> &[Symbol] {
        match self.nucleus {
            Some(i) => &self.symbols[i + 1..],
            None => &[],
        }
    }

    /// Concatenated symbol texts, without any stress annotation.
    pub fn text(&self) -> String {
        self.symbols.iter().map(|s| s.text.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// SyllabifiedWord
// ---------------------------------------------------------------------------

/// Ordered syllables of one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyllabifiedWord {
    syllables: Vec<Syllable>,
}

impl SyllabifiedWord {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    pub fn into_syllables(self) -> Vec<Syllable> {
        self.syllables
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }

    /// Concatenated text of all syllables, without separators or stress marks.
    pub fn text(&self) -> String {
        self.syllables
            .iter()
            .flat_map(|s| s.symbols.iter())
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a SyllabifiedWord {
    type Item = &'a Syllable;
    type IntoIter = std::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.syllables.iter()
    }
}
