// LettergreepHandle: top-level entry point for syllabification.
//
// The handle builds the symbol inventory, diphthong set and onset table once
// from a SyllabifierConfig and keeps them immutable. Every method takes
// `&self`, so one handle can be shared across threads. The option setters
// are the only mutation and only touch the separator and stress policy.

use std::path::Path;

use lettergreep_core::inventory::SymbolInventory;
use lettergreep_core::onset::OnsetTable;
use lettergreep_core::syllable::SyllabifiedWord;
use lettergreep_core::symbol::TokenStream;
use tracing::debug;

use crate::config::{ConfigError, StressPolicy, SyllabifierConfig};
use crate::format::{join_syllables, syllable_strings};
use crate::merge::{DiphthongSet, merge_diphthongs};
use crate::segmenter::segment;
use crate::tokenizer::tokenize;

/// Error type for LettergreepHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LettergreepError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Error type for syllabifying raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllabifyError {
    /// The input is not valid UTF-8. No partial result is produced.
    #[error("input is not valid UTF-8: {0}")]
    InputEncoding(#[from] std::str::Utf8Error),
}

/// Owns the syllabification tables and options.
#[derive(Debug, Clone)]
pub struct LettergreepHandle {
    config: SyllabifierConfig,
    inventory: SymbolInventory,
    diphthongs: DiphthongSet,
    onsets: OnsetTable,
}

impl LettergreepHandle {
    /// Build a handle, validating every table in `config`.
    pub fn from_config(config: SyllabifierConfig) -> Result<Self, LettergreepError> {
        let inventory = config.build_inventory()?;
        let diphthongs = config.build_diphthongs()?;
        let onsets = config.build_onsets()?;

        debug!(
            symbols = inventory.len(),
            diphthongs = diphthongs.len(),
            onset_clusters = onsets.len(),
            max_onset = onsets.max_cluster_len(),
            policy = config.stress_marker_policy.as_str(),
            "syllabifier tables built"
        );

        Ok(Self {
            config,
            inventory,
            diphthongs,
            onsets,
        })
    }

    /// A handle with the Dutch reference configuration.
    pub fn dutch() -> Result<Self, LettergreepError> {
        Self::from_config(SyllabifierConfig::dutch())
    }

    /// Build a handle from a TOML configuration document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LettergreepError> {
        Self::from_config(SyllabifierConfig::from_toml_str(toml_str)?)
    }

    /// Build a handle from a TOML configuration file.
    pub fn from_toml_file(path: &Path) -> Result<Self, LettergreepError> {
        debug!(path = %path.display(), "loading configuration");
        Self::from_config(SyllabifierConfig::from_toml_file(path)?)
    }

    // =========================================================================
    // Pipeline stages
    // =========================================================================

    /// Tokenize without merging diphthongs.
    pub fn tokenize(&self, ipa: &str) -> TokenStream {
        tokenize(&self.inventory, ipa)
    }

    /// Tokenize and merge diphthongs; this is the stream the segmenter sees.
    pub fn merged_tokens(&self, ipa: &str) -> TokenStream {
        merge_diphthongs(self.tokenize(ipa), &self.diphthongs)
    }

    /// Split an IPA transcription into syllables.
    pub fn syllabify(&self, ipa: &str) -> SyllabifiedWord {
        segment(
            &self.merged_tokens(ipa),
            &self.onsets,
            self.config.stress_marker_policy,
        )
    }

    /// Syllabify raw bytes, failing if they are not UTF-8.
    pub fn syllabify_bytes(&self, bytes: &[u8]) -> Result<SyllabifiedWord, SyllabifyError> {
        let ipa = std::str::from_utf8(bytes)?;
        Ok(self.syllabify(ipa))
    }

    // =========================================================================
    // Formatted output
    // =========================================================================

    /// Syllables as strings, with stress marks per the configured policy.
    pub fn syllables(&self, ipa: &str) -> Vec<String> {
        syllable_strings(&self.syllabify(ipa))
    }

    /// Syllables joined with the configured separator.
    pub fn format(&self, ipa: &str) -> String {
        self.insert_separators(ipa, &self.config.separator)
    }

    /// Syllables joined with `separator`.
    pub fn insert_separators(&self, ipa: &str, separator: &str) -> String {
        join_syllables(&self.syllabify(ipa), separator)
    }

    pub fn syllable_count(&self, ipa: &str) -> usize {
        self.syllabify(ipa).len()
    }

    /// Syllabify many words. The result order follows `words`.
    pub fn syllabify_batch<S>(&self, words: &[S]) -> Vec<SyllabifiedWord>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            words.par_iter().map(|w| self.syllabify(w.as_ref())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            words.iter().map(|w| self.syllabify(w.as_ref())).collect()
        }
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the separator used by [`format`](Self::format). May be empty.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.config.separator = separator.into();
    }

    pub fn set_stress_policy(&mut self, policy: StressPolicy) {
        self.config.stress_marker_policy = policy;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The effective configuration, including option changes.
    pub fn config(&self) -> &SyllabifierConfig {
        &self.config
    }

    pub fn inventory(&self) -> &SymbolInventory {
        &self.inventory
    }

    pub fn onsets(&self) -> &OnsetTable {
        &self.onsets
    }

    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettergreep_core::enums::Stress;

    fn handle() -> LettergreepHandle {
        LettergreepHandle::dutch().unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LettergreepHandle>();
    }

    #[test]
    fn invalid_config_returns_error() {
        let result = LettergreepHandle::from_toml_str("onset_cluster_table = [[]]");
        match result {
            Err(LettergreepError::Config(ConfigError::Table(_))) => {}
            Err(other) => panic!("expected table error, got: {other}"),
            Ok(_) => panic!("expected error"),
        }
    }

    #[test]
    fn unparsable_toml_returns_error() {
        assert!(LettergreepHandle::from_toml_str("separator = ").is_err());
    }

    #[test]
    fn get_version_returns_cargo_version() {
        let version = LettergreepHandle::get_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }

    // =========================================================================
    // Syllabification
    // =========================================================================

    #[test]
    fn format_reference_words() {
        let h = handle();
        assert_eq!(h.format(""), "");
        assert_eq!(h.format("klˈɔwns"), "klɔwns");
        assert_eq!(h.format("mˈɑŋkə"), "mɑŋ - kə");
        assert_eq!(h.format("dˈøːrən"), "døː - rən");
        assert_eq!(h.format("mˈɑ2kə"), "mɑ2 - kə");
        assert_eq!(h.format("tˈɛidən"), "tɛi - dən");
    }

    #[test]
    fn syllable_counts() {
        let h = handle();
        assert_eq!(h.syllable_count(""), 0);
        assert_eq!(h.syllable_count("klˈɔwns"), 1);
        assert_eq!(h.syllable_count("ˌɪɾritˈɑntə"), 4);
        assert_eq!(h.syllable_count("pst"), 1);
    }

    #[test]
    fn raw_and_merged_tokens_differ_on_split_diphthong() {
        let h = handle();
        assert_eq!(h.tokenize("tɛidən").len(), 6);
        assert_eq!(h.merged_tokens("tɛidən").len(), 5);
    }

    #[test]
    fn syllabify_bytes_rejects_invalid_utf8() {
        let h = handle();
        let err = h.syllabify_bytes(&[b'm', 0xFF, b'a']).unwrap_err();
        assert!(matches!(err, SyllabifyError::InputEncoding(_)));
        let word = h.syllabify_bytes("mˈɑŋkə".as_bytes()).unwrap();
        assert_eq!(word.len(), 2);
    }

    #[test]
    fn batch_preserves_order() {
        let h = handle();
        let words = ["mˈɑŋkə", "", "klˈɔwns", "ˌeːlɛktrˈoːnis"];
        let counts: Vec<usize> = h.syllabify_batch(&words).iter().map(|w| w.len()).collect();
        assert_eq!(counts, vec![2, 0, 1, 4]);
    }

    // =========================================================================
    // Options
    // =========================================================================

    #[test]
    fn custom_separator() {
        let mut h = handle();
        h.set_separator(".");
        assert_eq!(h.format("mˈɑŋkə"), "mɑŋ.kə");
        assert_eq!(h.config().separator, ".");
        assert_eq!(h.insert_separators("mˈɑŋkə", "|"), "mɑŋ|kə");
        h.set_separator("");
        assert_eq!(h.format("mˈɑŋkə"), "mɑŋkə");
    }

    #[test]
    fn retain_stress() {
        let mut h = handle();
        h.set_stress_policy(StressPolicy::RetainLeading);
        assert_eq!(h.format("mˈɑŋkə"), "ˈmɑŋ - kə");
        assert_eq!(h.syllables("ˌeːlɛktrˈoːnis"), vec!["ˌeː", "lɛk", "ˈtroː", "nis"]);
        assert_eq!(
            h.syllabify("mˈɑŋkə").syllables()[0].stress(),
            Some(Stress::Primary)
        );
    }

    #[test]
    fn retain_stress_loses_no_marks() {
        let mut h = handle();
        h.set_stress_policy(StressPolicy::RetainLeading);
        assert_eq!(h.syllables("ˈpst"), vec!["ˈpst"]);
        assert_eq!(h.syllables("ˌˈa"), vec!["ˌˈa"]);
        assert_eq!(h.syllables("mɑˈ"), vec!["ˈmɑ"]);
        assert_eq!(h.insert_separators("mˈɑŋkəˌ", ""), "ˈmɑŋˌkə");
    }

    #[test]
    fn policy_from_toml() {
        let h = LettergreepHandle::from_toml_str(
            "stress_marker_policy = \"retain-leading\"\nseparator = \"·\"",
        )
        .unwrap();
        assert_eq!(h.format("ɣˈɪŋən"), "ˈɣɪ·ŋən");
    }

    #[test]
    fn accessors_expose_tables() {
        let h = handle();
        assert!(h.inventory().is_vowel("øː"));
        assert_eq!(h.onsets().max_cluster_len(), 2);
    }
}
