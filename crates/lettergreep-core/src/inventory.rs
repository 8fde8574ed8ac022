// Symbol inventory: the multi-character symbols recognized by the tokenizer.
//
// Entries are kept in greedy order (longest text first, ties broken
// lexicographically) so that the first inventory entry matching at a position
// is also the longest one. A per-first-character index narrows each lookup to
// the handful of entries that can possibly match.

use hashbrown::HashMap;

use crate::TableError;
use crate::character::char_len;
use crate::enums::SymbolCategory;
use crate::symbol::Symbol;

/// Immutable, greedy-ordered table of vowel and stress-marker symbols.
#[derive(Debug, Clone)]
pub struct SymbolInventory {
    /// Entries in greedy order.
    entries: Vec<Symbol>,
    /// Maps a first character to the indices of the entries starting with it,
    /// in greedy order.
    by_first_char: HashMap<char, Vec<usize>>,
    /// Maps an entry text to its category.
    categories: HashMap<String, SymbolCategory>,
}

impl SymbolInventory {
    /// Build an inventory from unordered entries.
    ///
    /// Exact duplicates are dropped. Empty texts, consonant entries, and texts
    /// registered under two categories are rejected.
    pub fn new<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut entries = dedup_checked(entries)?;
        entries.sort_by(greedy_order);
        Self::from_ordered(entries)
    }

    /// Build an inventory from entries that are already in matching order.
    ///
    /// Fails with [`TableError::ShadowedEntry`] if an entry's text is a proper
    /// prefix of a later entry's text, since greedy matching would never
    /// reach the longer one.
    pub fn from_ordered<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let entries = dedup_checked(entries)?;
        verify_greedy_order(&entries)?;

        let mut by_first_char: HashMap<char, Vec<usize>> = HashMap::new();
        let mut categories = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if let Some(first) = entry.text.chars().next() {
                by_first_char.entry(first).or_default().push(i);
            }
            categories.insert(entry.text.clone(), entry.category);
        }

        Ok(Self {
            entries,
            by_first_char,
            categories,
        })
    }

    /// All entries in greedy order.
    pub fn entries(&self) -> &[Symbol] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category of an inventory text, or `None` if the text is not listed.
    pub fn category_of(&self, text: &str) -> Option<SymbolCategory> {
        self.categories.get(text).copied()
    }

    /// Whether `text` is listed as a vowel.
    pub fn is_vowel(&self, text: &str) -> bool {
        self.category_of(text) == Some(SymbolCategory::Vowel)
    }

    /// Entries whose text starts with `first`, longest first.
    pub fn candidates(&self, first: char) -> impl Iterator<Item = &Symbol> {
        self.by_first_char
            .get(&first)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }
}

/// Sort key for greedy matching: longer texts first, then lexicographic.
fn greedy_order(a: &Symbol, b: &Symbol) -> std::cmp::Ordering {
    char_len(&b.text)
        .cmp(&char_len(&a.text))
        .then_with(|| a.text.cmp(&b.text))
}

/// Validate entries and drop exact duplicates, keeping first occurrences.
fn dedup_checked<I>(entries: I) -> Result<Vec<Symbol>, TableError>
where
    I: IntoIterator<Item = Symbol>,
{
    let mut seen: HashMap<String, SymbolCategory> = HashMap::new();
    let mut result = Vec::new();

    for entry in entries {
        if entry.text.is_empty() {
            return Err(TableError::EmptySymbol);
        }
        if entry.is_consonant() {
            return Err(TableError::ConsonantInInventory(entry.text));
        }
        match seen.get(&entry.text) {
            Some(&first) if first != entry.category => {
                return Err(TableError::ConflictingCategory {
                    text: entry.text,
                    first,
                    second: entry.category,
                });
            }
            Some(_) => continue,
            None => {
                seen.insert(entry.text.clone(), entry.category);
                result.push(entry);
            }
        }
    }

    Ok(result)
}

/// Check that no entry is shadowed by an earlier entry that is its prefix.
fn verify_greedy_order(entries: &[Symbol]) -> Result<(), TableError> {
    for (i, shorter) in entries.iter().enumerate() {
        for longer in &entries[i + 1..] {
            if longer.text.len() > shorter.text.len() && longer.text.starts_with(&shorter.text) {
                return Err(TableError::ShadowedEntry {
                    shorter: shorter.text.clone(),
                    longer: longer.text.clone(),
                });
            }
        }
    }
    Ok(())
}
