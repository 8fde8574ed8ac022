// Syllabifier configuration: symbol tables, separator and stress policy.
//
// Loaded from TOML. Every key is optional; a missing key falls back to the
// Dutch reference value, so an empty document is the Dutch configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lettergreep_core::TableError;
use lettergreep_core::inventory::SymbolInventory;
use lettergreep_core::onset::OnsetTable;

use crate::dutch;
use crate::dutch::constants::{DEFAULT_SEPARATOR, DIPHTHONGS, ONSET_CLUSTERS, VOWELS};
use crate::merge::DiphthongSet;

/// Error type for configuration loading and table construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("TOML parse error: {0}")]
    Parse(String),

    /// The configuration could not be rendered as TOML.
    #[error("TOML serialize error: {0}")]
    Serialize(String),

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The vowel inventory or onset table is malformed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A diphthong spelling is shorter than two characters.
    #[error("diphthong spelling {0:?} must be at least two characters")]
    InvalidDiphthong(String),
}

// ---------------------------------------------------------------------------
// Stress policy
// ---------------------------------------------------------------------------

/// What happens to stress marks during syllabification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressPolicy {
    /// Drop every stress mark.
    #[default]
    Strip,
    /// Keep every mark in front of the syllable whose nucleus follows it.
    /// Marks after the last nucleus go to the last syllable.
    RetainLeading,
}

impl StressPolicy {
    /// The configuration spelling of this policy.
    pub fn as_str(self) -> &'static str {
        match self {
            StressPolicy::Strip => "strip",
            StressPolicy::RetainLeading => "retain-leading",
        }
    }
}

// ---------------------------------------------------------------------------
// SyllabifierConfig
// ---------------------------------------------------------------------------

/// Complete syllabifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyllabifierConfig {
    /// Vowel symbols. Multi-character entries are matched before their prefixes.
    pub vowel_inventory: Vec<String>,

    /// Two-vowel spellings fused into one nucleus after tokenization.
    pub diphthong_list: Vec<String>,

    /// Legal onset clusters, one consonant per element.
    pub onset_cluster_table: Vec<Vec<String>>,

    /// Text placed between syllables when formatting.
    pub separator: String,

    pub stress_marker_policy: StressPolicy,
}

impl Default for SyllabifierConfig {
    fn default() -> Self {
        Self::dutch()
    }
}

impl SyllabifierConfig {
    /// The Dutch reference configuration.
    pub fn dutch() -> Self {
        Self {
            vowel_inventory: VOWELS.iter().map(|v| v.to_string()).collect(),
            diphthong_list: DIPHTHONGS.iter().map(|d| d.to_string()).collect(),
            onset_cluster_table: ONSET_CLUSTERS
                .iter()
                .map(|cluster| cluster.iter().map(|c| c.to_string()).collect())
                .collect(),
            separator: DEFAULT_SEPARATOR.to_string(),
            stress_marker_policy: StressPolicy::default(),
        }
    }

    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML configuration file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render this configuration as a TOML document.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Build the symbol inventory (vowels plus stress marks).
    pub fn build_inventory(&self) -> Result<SymbolInventory, ConfigError> {
        Ok(dutch::inventory_with(&self.vowel_inventory)?)
    }

    pub fn build_onsets(&self) -> Result<OnsetTable, ConfigError> {
        Ok(OnsetTable::new(&self.onset_cluster_table)?)
    }

    pub fn build_diphthongs(&self) -> Result<DiphthongSet, ConfigError> {
        DiphthongSet::new(&self.diphthong_list)
    }
}
