//! Collaborator traits.
//!
//! The pipeline is pure except for two injected capabilities: a uniqueness
//! store consulted by the duplicate check, and a readability statistics
//! provider consulted by the best-effort statistical check. Both are traits
//! so the engine stays unit-testable without live backends.

use thiserror::Error;

/// Existence lookup against whatever holds previously accepted submissions.
///
/// Implementations must be safe under concurrent reads. A benign race that
/// lets two near-simultaneous submissions with the same text through is
/// acceptable; read-committed consistency is enough.
pub trait UniquenessStore: Send + Sync {
    /// Whether an entry with this normalized text already exists.
    fn contains(&self, normalized: &str) -> bool;
}

/// Errors from a readability provider.
///
/// These are always absorbed by the readability check: a statistic that
/// cannot be computed is "no opinion", never a rejection.
#[derive(Error, Debug)]
pub enum ReadabilityError {
    #[error("statistic could not be computed: {0}")]
    NotComputable(String),
}

/// Readability statistics over a piece of text.
pub trait ReadabilityProvider: Send + Sync {
    /// Reading-ease score. Very low or negative values signal
    /// non-linguistic input.
    fn reading_ease(&self, text: &str) -> Result<f64, ReadabilityError>;

    /// Estimated total syllables in the text.
    fn syllable_count(&self, text: &str) -> Result<u32, ReadabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct SetStore(HashSet<String>);

    impl UniquenessStore for SetStore {
        fn contains(&self, normalized: &str) -> bool {
            self.0.contains(normalized)
        }
    }

    #[test]
    fn test_store_trait_is_object_safe() {
        let mut names = HashSet::new();
        names.insert("project alpha".to_string());
        let store = SetStore(names);
        let dyn_store: &dyn UniquenessStore = &store;

        assert!(dyn_store.contains("project alpha"));
        assert!(!dyn_store.contains("project beta"));
    }
}
