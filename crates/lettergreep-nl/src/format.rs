// Output formatting for syllabified words.

use lettergreep_core::syllable::{SyllabifiedWord, Syllable};

/// Text of one syllable, prefixed with its stress marks in input order.
pub fn syllable_string(syllable: &Syllable) -> String {
    let marks = syllable.stress_marks();
    if marks.is_empty() {
        return syllable.text();
    }
    let mut out: String = marks.iter().map(|stress| stress.mark()).collect();
    out.push_str(&syllable.text());
    out
}

/// One string per syllable, in order.
pub fn syllable_strings(word: &SyllabifiedWord) -> Vec<String> {
    word.iter().map(syllable_string).collect()
}

/// Join the syllables of `word` with `separator`. An empty word yields `""`.
pub fn join_syllables(word: &SyllabifiedWord, separator: &str) -> String {
    syllable_strings(word).join(separator)
}
