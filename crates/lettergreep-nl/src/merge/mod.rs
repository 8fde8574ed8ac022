// Diphthong merge pass.
//
// When a diphthong is not an inventory entry of its own, the tokenizer
// emits its two halves as separate vowels. This pass fuses such pairs back
// into one nucleus. A token whose text is already a diphthong spelling is
// never fused again, which makes the pass idempotent.

use hashbrown::HashSet;

use lettergreep_core::character::char_len;
use lettergreep_core::symbol::{Symbol, TokenStream};

use crate::config::ConfigError;

/// Set of two-vowel spellings that form a single nucleus.
#[derive(Debug, Clone, Default)]
pub struct DiphthongSet {
    spellings: HashSet<String>,
}

impl DiphthongSet {
    /// Build a set from diphthong spellings.
    ///
    /// Each spelling must be at least two characters long.
    pub fn new<I, S>(spellings: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for spelling in spellings {
            let spelling = spelling.as_ref();
            if char_len(spelling) < 2 {
                return Err(ConfigError::InvalidDiphthong(spelling.to_string()));
            }
            set.insert(spelling.to_string());
        }
        Ok(Self { spellings: set })
    }

    pub fn contains(&self, text: &str) -> bool {
        self.spellings.contains(text)
    }

    pub fn len(&self) -> usize {
        self.spellings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spellings.is_empty()
    }

    /// Fuse two adjacent symbols if they spell a diphthong.
    fn fuse(&self, first: &Symbol, second: &Symbol) -> Option<Symbol> {
        if !first.is_vowel() || !second.is_vowel() {
            return None;
        }
        if self.contains(&first.text) || self.contains(&second.text) {
            return None;
        }
        let joined = format!("{}{}", first.text, second.text);
        self.contains(&joined).then(|| Symbol::vowel(joined))
    }
}

/// Fuse adjacent vowel pairs that spell a diphthong.
///
/// Pairs are matched left to right without overlap. Only directly adjacent
/// vowels are candidates: an intervening consonant or stress mark blocks
/// the merge.
pub fn merge_diphthongs(tokens: TokenStream, diphthongs: &DiphthongSet) -> TokenStream {
    if diphthongs.is_empty() {
        return tokens;
    }

    let mut merged = TokenStream::with_capacity(tokens.len());
    let mut symbols = tokens.into_iter().peekable();

    while let Some(current) = symbols.next() {
        let fused = match symbols.peek() {
            Some(next) => diphthongs.fuse(&current, next),
            None => None,
        };
        match fused {
            Some(symbol) => {
                symbols.next();
                merged.push(symbol);
            }
            None => merged.push(current),
        }
    }

    merged
}
