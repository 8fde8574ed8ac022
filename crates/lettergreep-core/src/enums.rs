// Shared enums: SymbolCategory, Stress

use crate::character::{PRIMARY_STRESS, SECONDARY_STRESS};

/// Phonological category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    /// Vowel, long vowel or diphthong. Every vowel token is a syllable nucleus.
    Vowel,
    /// Any single character that is not in the inventory.
    Consonant,
    /// Primary or secondary stress mark.
    StressMarker,
}

impl SymbolCategory {
    /// Short uppercase label used by the command-line tools.
    pub fn label(self) -> &'static str {
        match self {
            SymbolCategory::Vowel => "VOWEL",
            SymbolCategory::Consonant => "CONSONANT",
            SymbolCategory::StressMarker => "STRESS",
        }
    }
}

/// Stress level carried by a syllable.
///
/// Ordered so that `Primary > Secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stress {
    Secondary,
    Primary,
}

impl Stress {
    /// The IPA mark for this stress level.
    pub fn mark(self) -> char {
        match self {
            Stress::Primary => PRIMARY_STRESS,
            Stress::Secondary => SECONDARY_STRESS,
        }
    }
}
