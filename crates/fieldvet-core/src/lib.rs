//! # fieldvet-core
//!
//! Deterministic quality evaluation for free-text form submissions.
//!
//! Given a submission (a project title, a ticket subject) and a
//! [`FieldPolicy`], the engine answers: does this look like something a
//! person meant to type? It runs a fixed pipeline of structural heuristics
//! (length, keyboard walks, repetition, vowel/consonant word shape,
//! optional readability statistics, optional uniqueness) and returns the
//! trimmed text or a typed [`Rejection`].
//!
//! ## Key guarantees
//!
//! 1. **Deterministic**: same text and policy always produce the same
//!    verdict, except for the uniqueness check, whose backing store may
//!    mutate between calls.
//! 2. **Total**: evaluation never fails; malformed input fails a check.
//! 3. **Best-effort statistics**: a readability provider that errors is
//!    absorbed as "no opinion", never surfaced.
//! 4. **Traceable**: every rejection carries evidence pointing at the
//!    offending span or policy field.
//!
//! ## Example
//!
//! ```rust
//! use fieldvet_core::{Evaluator, FieldPolicy, Rejection};
//!
//! let policy = FieldPolicy::title();
//! let evaluator = Evaluator::new(&policy);
//!
//! let accepted = evaluator.evaluate("  Quarterly Budget Review ");
//! assert_eq!(accepted.into_result().unwrap(), "Quarterly Budget Review");
//!
//! let rejected = evaluator.evaluate("asdf1234");
//! assert!(matches!(
//!     rejected.into_result().unwrap_err(),
//!     Rejection::KeyboardPattern { .. }
//! ));
//! ```

pub mod analysis;
pub mod checks;
pub mod evidence;
pub mod pipeline;
pub mod policy;
pub mod providers;
pub mod textstats;
pub mod types;

// Re-export main types at crate root
pub use analysis::{Analysis, Token};
pub use checks::uniqueness::normalize_for_lookup;
pub use evidence::{Evidence, EvidenceSource};
pub use pipeline::Evaluator;
pub use policy::{FieldPolicy, PolicyError, ReadabilityPolicy};
pub use providers::{ReadabilityError, ReadabilityProvider, UniquenessStore};
pub use textstats::FleschReadability;
pub use types::{CheckFinding, CheckKind, CheckState, Evaluation, Rejection, Verdict};

/// Evaluate one submission against a policy, with no collaborators.
///
/// Uniqueness and readability checks report skipped; use [`Evaluator`]
/// directly to inject them.
pub fn evaluate(text: &str, policy: &FieldPolicy) -> Evaluation {
    Evaluator::new(policy).evaluate(text)
}

/// The bare contract: evaluate with just the two limits, returning the
/// trimmed text or the rejection reason.
///
/// Every shape heuristic is on; uniqueness and readability are not (no
/// collaborators are injected here).
pub fn evaluate_text(text: &str, min_length: usize, min_words: usize) -> Result<String, Rejection> {
    let policy = FieldPolicy::with_limits(min_length, min_words);
    Evaluator::new(&policy).evaluate(text).into_result()
}
