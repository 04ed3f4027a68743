//! The quality checks.
//!
//! Each check is one struct implementing [`Check`]: it looks at the shared
//! [`Analysis`] through the lens of one heuristic and reports pass,
//! reject-with-evidence, or skipped. Checks are independent of each other;
//! ordering and short-circuiting live in the pipeline.

pub mod keyboard;
pub mod randomness;
pub mod readability;
pub mod repetition;
pub mod structure;
pub mod uniqueness;
pub mod words;

pub use keyboard::KeyboardPatternCheck;
pub use randomness::WordShapeCheck;
pub use readability::ReadabilityCheck;
pub use repetition::RepetitionCheck;
pub use structure::{AlphabeticContentCheck, EmptinessCheck, MinLengthCheck};
pub use uniqueness::UniquenessCheck;
pub use words::{MeaningfulWordsCheck, WordCountCheck};

use crate::analysis::Analysis;
use crate::policy::FieldPolicy;
use crate::types::{CheckFinding, CheckKind};

/// One heuristic in the pipeline.
pub trait Check {
    /// Which pipeline slot this check fills.
    fn kind(&self) -> CheckKind;

    /// The question this check asks of the submission.
    fn question(&self) -> &'static str;

    /// Evaluate the submission. Must not panic; a check with nothing to
    /// say reports `Skipped`.
    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding;
}
