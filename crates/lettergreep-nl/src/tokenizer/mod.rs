// Greedy longest-match tokenizer for IPA transcriptions.
//
// A single forward pass: at each position the inventory entries starting
// with the current character are tried longest first, and the first one that
// matches is taken. When nothing matches, one character is consumed as a
// consonant. The fallback always applies, so tokenization cannot fail.

use lettergreep_core::inventory::SymbolInventory;
use lettergreep_core::symbol::{Symbol, TokenStream};

/// Split an IPA string into symbols.
///
/// The texts of the returned symbols concatenate to `input` exactly.
pub fn tokenize(inventory: &SymbolInventory, input: &str) -> TokenStream {
    let mut tokens = TokenStream::with_capacity(input.len());
    let mut rest = input;

    while let Some(first) = rest.chars().next() {
        let symbol = match inventory
            .candidates(first)
            .find(|entry| rest.starts_with(entry.text.as_str()))
        {
            Some(entry) => entry.clone(),
            None => Symbol::consonant(&rest[..first.len_utf8()]),
        };
        rest = &rest[symbol.text.len()..];
        tokens.push(symbol);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dutch;
    use lettergreep_core::enums::SymbolCategory;

    fn texts(stream: &TokenStream) -> Vec<&str> {
        stream.iter().map(|s| s.text.as_str()).collect()
    }

    fn categories(stream: &TokenStream) -> Vec<SymbolCategory> {
        stream.iter().map(|s| s.category).collect()
    }

    // -- Basic scanning --

    #[test]
    fn empty_input_yields_empty_stream() {
        let inv = dutch::inventory().unwrap();
        assert!(tokenize(&inv, "").is_empty());
    }

    #[test]
    fn splits_consonants_vowels_and_stress() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "mˈɑŋkə");
        assert_eq!(texts(&stream), vec!["m", "ˈ", "ɑ", "ŋ", "k", "ə"]);
        assert_eq!(
            categories(&stream),
            vec![
                SymbolCategory::Consonant,
                SymbolCategory::StressMarker,
                SymbolCategory::Vowel,
                SymbolCategory::Consonant,
                SymbolCategory::Consonant,
                SymbolCategory::Vowel,
            ]
        );
    }

    // -- Longest match --

    #[test]
    fn long_vowel_beats_its_prefix() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "dˈøːrən");
        assert_eq!(texts(&stream), vec!["d", "ˈ", "øː", "r", "ə", "n"]);
    }

    #[test]
    fn inventory_diphthong_is_one_token() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "ʋɛɪn");
        assert_eq!(texts(&stream), vec!["ʋ", "ɛɪ", "n"]);
        assert_eq!(stream.nucleus_count(), 1);
    }

    #[test]
    fn unlisted_diphthong_stays_split() {
        // `ɛi` uses plain `i`; only the merge pass fuses it.
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "tɛidən");
        assert_eq!(texts(&stream), vec!["t", "ɛ", "i", "d", "ə", "n"]);
    }

    #[test]
    fn bare_length_mark_is_a_consonant() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "ːa");
        assert_eq!(texts(&stream), vec!["ː", "a"]);
        assert!(stream.symbols()[0].is_consonant());
    }

    // -- Fallback --

    #[test]
    fn unknown_characters_become_consonants() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "mˈɑ2kə");
        assert_eq!(texts(&stream), vec!["m", "ˈ", "ɑ", "2", "k", "ə"]);
        assert!(stream.symbols()[3].is_consonant());
    }

    #[test]
    fn multibyte_fallback_keeps_whole_scalar() {
        let inv = dutch::inventory().unwrap();
        let stream = tokenize(&inv, "ŋ😀ɣ");
        assert_eq!(texts(&stream), vec!["ŋ", "😀", "ɣ"]);
    }

    #[test]
    fn round_trips_input() {
        let inv = dutch::inventory().unwrap();
        for word in ["klˈɔwns", "ˌeːlɛktrˈoːnis", "ʋˈoːnplaːts", "x y\tz", "ˈˈ"] {
            assert_eq!(tokenize(&inv, word).text(), word);
        }
    }
}
