//! In-memory uniqueness store.

use std::collections::HashSet;

use fieldvet_core::{normalize_for_lookup, UniquenessStore};
use parking_lot::RwLock;

/// A set of normalized submission texts behind an RwLock.
///
/// Reads never block each other; inserts take the write lock briefly.
/// Suitable for tests, the CLI, and single-process services; anything
/// multi-process needs a shared backend behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    names: RwLock<HashSet<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission. The text is normalized before storage, so any
    /// case/spacing variant of it will collide from now on.
    pub fn insert(&self, text: &str) {
        self.names.write().insert(normalize_for_lookup(text));
    }

    /// Forget a submission. Returns whether it was present.
    pub fn remove(&self, text: &str) -> bool {
        self.names.write().remove(&normalize_for_lookup(text))
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }
}

impl<'a> FromIterator<&'a str> for InMemoryStore {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(normalize_for_lookup)
            .collect::<HashSet<_>>();
        Self {
            names: RwLock::new(names),
        }
    }
}

impl UniquenessStore for InMemoryStore {
    fn contains(&self, normalized: &str) -> bool {
        self.names.read().contains(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_contains() {
        let store = InMemoryStore::new();
        store.insert("Project Alpha");
        assert!(store.contains("project alpha"));
        assert!(!store.contains("project beta"));
    }

    #[test]
    fn test_insert_normalizes_spacing_and_case() {
        let store = InMemoryStore::new();
        store.insert("  Project   ALPHA ");
        assert!(store.contains("project alpha"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::new();
        store.insert("Project Alpha");
        assert!(store.remove("PROJECT ALPHA"));
        assert!(!store.remove("Project Alpha"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_iterator_seeds_the_set() {
        let store: InMemoryStore = ["Project Alpha", "Project Beta"].into_iter().collect();
        assert_eq!(store.len(), 2);
        assert!(store.contains("project beta"));
    }

    #[test]
    fn test_concurrent_reads() {
        use std::sync::Arc;

        let store = Arc::new(InMemoryStore::new());
        store.insert("Project Alpha");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.contains("project alpha"))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
