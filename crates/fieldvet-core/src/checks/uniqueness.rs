//! Duplicate detection against an injected store.
//!
//! The only check whose outcome can legitimately change between calls with
//! the same input: the backing store mutates as submissions are accepted.
//! Lookup uses a normalized form (trim, lowercase, collapsed whitespace) so
//! "Project  Alpha " and "project alpha" collide.

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::providers::UniquenessStore;
use crate::types::{CheckFinding, CheckKind, Rejection};

/// The normalized form used for store lookups.
pub fn normalize_for_lookup(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub struct UniquenessCheck<'a> {
    store: Option<&'a dyn UniquenessStore>,
}

impl<'a> UniquenessCheck<'a> {
    pub fn new(store: Option<&'a dyn UniquenessStore>) -> Self {
        Self { store }
    }
}

impl Check for UniquenessCheck<'_> {
    fn kind(&self) -> CheckKind {
        CheckKind::Uniqueness
    }

    fn question(&self) -> &'static str {
        "Has this been submitted before?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if !policy.require_unique {
            return CheckFinding::skip(self.kind(), "uniqueness not required by policy");
        }

        let Some(store) = self.store else {
            return CheckFinding::skip(self.kind(), "no uniqueness store injected");
        };

        if store.contains(&normalize_for_lookup(analysis.trimmed)) {
            CheckFinding::reject(
                self.kind(),
                Rejection::DuplicateName,
                vec![Evidence::from_store("an entry with this text exists")],
            )
        } else {
            CheckFinding::pass(self.kind())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct SetStore(HashSet<String>);

    impl SetStore {
        fn with(names: &[&str]) -> Self {
            Self(names.iter().map(|n| normalize_for_lookup(n)).collect())
        }
    }

    impl UniquenessStore for SetStore {
        fn contains(&self, normalized: &str) -> bool {
            self.0.contains(normalized)
        }
    }

    #[test]
    fn test_normalize_for_lookup() {
        assert_eq!(normalize_for_lookup("  Project   Alpha "), "project alpha");
        assert_eq!(normalize_for_lookup("project alpha"), "project alpha");
    }

    #[test]
    fn test_existing_entry_rejected() {
        let store = SetStore::with(&["Project Alpha"]);
        let check = UniquenessCheck::new(Some(&store));
        let finding = check.evaluate(&Analysis::of("Project Alpha"), &FieldPolicy::title());
        assert!(matches!(
            finding.state,
            crate::types::CheckState::Rejected {
                reason: Rejection::DuplicateName
            }
        ));
    }

    #[test]
    fn test_case_and_spacing_variants_collide() {
        let store = SetStore::with(&["Project Alpha"]);
        let check = UniquenessCheck::new(Some(&store));
        let finding = check.evaluate(&Analysis::of("  PROJECT   alpha "), &FieldPolicy::title());
        assert!(finding.state.is_rejected());
    }

    #[test]
    fn test_new_entry_passes() {
        let store = SetStore::with(&["Project Alpha"]);
        let check = UniquenessCheck::new(Some(&store));
        let finding = check.evaluate(&Analysis::of("Project Beta"), &FieldPolicy::title());
        assert!(finding.state.is_pass());
    }

    #[test]
    fn test_skipped_when_not_required() {
        let store = SetStore::with(&["whatever entry"]);
        let check = UniquenessCheck::new(Some(&store));
        let finding =
            check.evaluate(&Analysis::of("whatever entry"), &FieldPolicy::description());
        assert!(finding.state.is_skipped());
    }

    #[test]
    fn test_skipped_without_store() {
        let check = UniquenessCheck::new(None);
        let finding = check.evaluate(&Analysis::of("Project Alpha"), &FieldPolicy::title());
        assert!(finding.state.is_skipped());
    }
}
