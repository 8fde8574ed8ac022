// Onset permissibility table: consonant clusters that may begin a syllable.

use hashbrown::HashSet;

use crate::TableError;
use crate::character::is_single_char;
use crate::symbol::Symbol;

/// Immutable set of legal onset clusters.
///
/// Every consonant token is a single character, so a cluster is stored as the
/// concatenation of its elements. A single consonant is always a legal onset,
/// whether or not it is listed.
#[derive(Debug, Clone)]
pub struct OnsetTable {
    clusters: HashSet<String>,
    /// Length (in consonants) of the longest listed cluster, at least 1.
    max_len: usize,
}

impl Default for OnsetTable {
    fn default() -> Self {
        Self {
            clusters: HashSet::new(),
            max_len: 1,
        }
    }
}

impl OnsetTable {
    /// Build a table from clusters given as sequences of consonant texts.
    pub fn new<I, C, S>(clusters: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        let mut max_len = 1;

        for cluster in clusters {
            let mut key = String::new();
            let mut len = 0;
            for element in cluster {
                let element = element.as_ref();
                if !is_single_char(element) {
                    return Err(TableError::InvalidClusterElement(element.to_string()));
                }
                key.push_str(element);
                len += 1;
            }
            if len == 0 {
                return Err(TableError::EmptyCluster);
            }
            max_len = max_len.max(len);
            set.insert(key);
        }

        Ok(Self {
            clusters: set,
            max_len,
        })
    }

    /// Length of the longest cluster that can be a member.
    pub fn max_cluster_len(&self) -> usize {
        self.max_len
    }

    /// Number of listed clusters.
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Whether a run of consonant symbols is a legal onset.
    ///
    /// Single consonants are always legal; the empty run is not a cluster.
    pub fn permits(&self, run: &[Symbol]) -> bool {
        match run.len() {
            0 => false,
            1 => true,
            n if n > self.max_len => false,
            _ => {
                let key: String = run.iter().map(|s| s.text.as_str()).collect();
                self.clusters.contains(&key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> OnsetTable {
        OnsetTable::new([
            vec!["s", "t"],
            vec!["t", "r"],
            vec!["p", "l"],
            vec!["s", "t", "r"],
            vec!["k"],
        ])
        .unwrap()
    }

    fn cons(texts: &[&str]) -> Vec<Symbol> {
        texts.iter().map(|t| Symbol::consonant(*t)).collect()
    }

    #[test]
    fn listed_clusters_are_permitted() {
        let t = table();
        assert!(t.permits(&cons(&["s", "t"])));
        assert!(t.permits(&cons(&["s", "t", "r"])));
        assert!(!t.permits(&cons(&["ŋ", "k"])));
        assert!(!t.permits(&cons(&["r", "t"])));
    }

    #[test]
    fn single_consonants_are_implicitly_legal() {
        let t = table();
        assert!(t.permits(&cons(&["ŋ"])));
        assert!(t.permits(&cons(&["2"])));
        assert!(OnsetTable::default().permits(&cons(&["x"])));
    }

    #[test]
    fn empty_run_is_not_an_onset() {
        assert!(!table().permits(&[]));
    }

    #[test]
    fn longer_than_any_cluster_is_rejected() {
        let t = table();
        assert_eq!(t.max_cluster_len(), 3);
        assert!(!t.permits(&cons(&["s", "t", "r", "r"])));
    }

    #[test]
    fn rejects_multi_char_elements() {
        let err = OnsetTable::new([vec!["st"]]).unwrap_err();
        assert_eq!(err, TableError::InvalidClusterElement("st".to_string()));
    }

    #[test]
    fn rejects_empty_cluster() {
        let err = OnsetTable::new([Vec::<&str>::new()]).unwrap_err();
        assert_eq!(err, TableError::EmptyCluster);
    }
}
