//! Shared types for IPA syllabification.
//!
//! - [`character`] -- IPA stress marks and scalar-length helpers
//! - [`enums`] -- Symbol categories and stress levels
//! - [`symbol`] -- Symbols and token streams
//! - [`syllable`] -- Syllables and syllabified words
//! - [`inventory`] -- Greedy-ordered symbol inventory
//! - [`onset`] -- Permissible onset cluster table

pub mod character;
pub mod enums;
pub mod inventory;
pub mod onset;
pub mod syllable;
pub mod symbol;

/// Error type for malformed symbol inventories and onset tables.
///
/// Both tables are validated once when they are built; a table that
/// constructs successfully is never re-checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("inventory contains an empty symbol")]
    EmptySymbol,
    #[error("consonant {0:?} cannot be listed in the symbol inventory")]
    ConsonantInInventory(String),
    #[error("symbol {text:?} is registered both as {first:?} and {second:?}")]
    ConflictingCategory {
        text: String,
        first: enums::SymbolCategory,
        second: enums::SymbolCategory,
    },
    #[error("symbol {longer:?} is shadowed by its prefix {shorter:?} under greedy matching")]
    ShadowedEntry { shorter: String, longer: String },
    #[error("onset table contains an empty cluster")]
    EmptyCluster,
    #[error("onset cluster element {0:?} must be exactly one character")]
    InvalidClusterElement(String),
}
