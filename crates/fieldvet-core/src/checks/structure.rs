//! Structural checks: emptiness, minimum length, alphabetic content.
//!
//! These run first. They are the cheapest and most certain rejections, and
//! every other heuristic assumes they have passed.

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::types::{CheckFinding, CheckKind, Rejection};

/// Rejects text that trims to nothing.
pub struct EmptinessCheck;

impl Check for EmptinessCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Emptiness
    }

    fn question(&self) -> &'static str {
        "Is there anything here at all?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, _policy: &FieldPolicy) -> CheckFinding {
        if analysis.trimmed.is_empty() {
            CheckFinding::reject(
                self.kind(),
                Rejection::EmptyInput,
                vec![Evidence::from_span("text trims to nothing", 0, 0)],
            )
        } else {
            CheckFinding::pass(self.kind())
        }
    }
}

/// Rejects text shorter than the policy minimum.
pub struct MinLengthCheck;

impl Check for MinLengthCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::MinLength
    }

    fn question(&self) -> &'static str {
        "Is it long enough to mean anything?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        let actual = analysis.trimmed_len();
        if actual < policy.min_length {
            CheckFinding::reject(
                self.kind(),
                Rejection::TooShort {
                    min: policy.min_length,
                    actual,
                },
                vec![Evidence::from_policy(
                    format!("minimum length is {}", policy.min_length),
                    "min_length",
                )],
            )
        } else {
            CheckFinding::pass(self.kind())
        }
    }
}

/// Rejects text with no alphabetic characters (digits and punctuation
/// only).
pub struct AlphabeticContentCheck;

impl Check for AlphabeticContentCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::AlphabeticContent
    }

    fn question(&self) -> &'static str {
        "Does it contain any letters?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, _policy: &FieldPolicy) -> CheckFinding {
        if analysis.has_alphabetic() {
            CheckFinding::pass(self.kind())
        } else {
            CheckFinding::reject(
                self.kind(),
                Rejection::NoAlphabeticContent,
                vec![Evidence::from_span(
                    "no alphabetic characters anywhere",
                    0,
                    analysis.trimmed.len(),
                )],
            )
        }
    }
}
