// Dutch reference data for eSpeak NG `-v nl --ipa` transcriptions.

/// Vowel symbols recognized as syllable nuclei.
///
/// Long vowels and the native diphthongs are listed as single entries so the
/// greedy tokenizer picks them up before their one-character prefixes.
pub const VOWELS: &[&str] = &[
    "eː", "oː", "aː", "øː", "yː", "ɪː", "ɛː", "ɔː", "œː", "iː", "uː", // long
    "ɛɪ", "œy", "ʌʊ", // diphthongs
    "ɛ", "œ", "ɪ", "ʏ", "ə", "i", "e", "a", "ɑ", "o", "ɔ", "u", "y", "ø", "ʌ",
];

/// Two-vowel spellings fused into one nucleus by the merge pass.
///
/// `ɛi` and `ʌu` are the variants eSpeak emits with plain `i` and `u` as the
/// second element; the tokenizer sees them as two vowels.
pub const DIPHTHONGS: &[&str] = &["ɛi", "ɛɪ", "œy", "ʌu", "ʌʊ"];

/// Legal onset clusters. Single consonants are legal without being listed.
pub const ONSET_CLUSTERS: &[&[&str]] = &[
    &["p"],
    &["t"],
    &["k"],
    &["b"],
    &["d"],
    &["f"],
    &["v"],
    &["s"],
    &["z"],
    &["ʃ"],
    &["ʒ"],
    &["m"],
    &["n"],
    &["l"],
    &["r"],
    &["j"],
    &["ʋ"],
    &["s", "p"],
    &["s", "t"],
    &["s", "k"],
    &["p", "l"],
    &["p", "r"],
    &["t", "r"],
    &["k", "l"],
    &["k", "r"],
    &["b", "l"],
    &["b", "r"],
    &["d", "r"],
    &["ɣ", "l"],
    &["ɣ", "r"],
    &["f", "l"],
    &["f", "r"],
    &["s", "l"],
    &["s", "m"],
    &["s", "n"],
];

/// Separator placed between syllables by default.
pub const DEFAULT_SEPARATOR: &str = " - ";
