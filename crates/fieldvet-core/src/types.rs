//! Core types for submission evaluation.
//!
//! The vocabulary: an [`Evaluator`](crate::Evaluator) runs a fixed sequence
//! of checks over one submission and produces an [`Evaluation`] whose
//! [`Verdict`] is either the trimmed text (accepted) or a [`Rejection`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::evidence::Evidence;

/// Why a submission was rejected.
///
/// One variant per check in the pipeline. The messages here are developer
/// phrasing; user-facing wording is the caller's concern.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The trimmed text is empty.
    #[error("text is empty or whitespace only")]
    EmptyInput,

    /// The trimmed text is shorter than the policy minimum.
    #[error("text is {actual} characters, minimum is {min}")]
    TooShort { min: usize, actual: usize },

    /// No character in the text is an alphabetic letter.
    #[error("text contains no alphabetic characters")]
    NoAlphabeticContent,

    /// The text contains a denylisted adjacent-key sequence.
    #[error("text contains the keyboard pattern {pattern:?}")]
    KeyboardPattern { pattern: String },

    /// A single character repeats or dominates excessively.
    #[error("text repeats a single character excessively")]
    ExcessiveRepetition,

    /// Fewer words than the policy minimum.
    #[error("text has {actual} words, minimum is {min}")]
    InsufficientWords { min: usize, actual: usize },

    /// A word has the vowel/consonant shape of random typing.
    #[error("{word:?} looks like a random character sequence")]
    RandomSequence { word: String },

    /// No word of length >= 3 contains a vowel.
    #[error("text contains no meaningful words")]
    NoMeaningfulWords,

    /// Readability statistics fall outside plausible language.
    #[error("text statistics suggest random input")]
    LooksRandom,

    /// The uniqueness store already holds an entry with this text.
    #[error("an entry with this text already exists")]
    DuplicateName,
}

/// Identifies a check in the pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Emptiness,
    MinLength,
    AlphabeticContent,
    KeyboardPattern,
    Repetition,
    WordCount,
    WordShape,
    MeaningfulWords,
    Readability,
    Uniqueness,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CheckState {
    /// The check ran and found nothing wrong.
    Pass,

    /// The check ran and rejected the submission.
    Rejected { reason: Rejection },

    /// The check did not apply (disabled by policy, or no collaborator
    /// injected, or a best-effort statistic could not be computed).
    Skipped { why: String },
}

impl CheckState {
    pub fn is_pass(&self) -> bool {
        matches!(self, CheckState::Pass)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, CheckState::Rejected { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckState::Skipped { .. })
    }
}

/// What one check observed, with supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckFinding {
    /// Which check produced this finding.
    pub check: CheckKind,

    /// The check's outcome.
    pub state: CheckState,

    /// Evidence supporting the outcome (empty for passes and skips).
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl CheckFinding {
    /// A passing finding with no evidence.
    pub fn pass(check: CheckKind) -> Self {
        Self {
            check,
            state: CheckState::Pass,
            evidence: vec![],
        }
    }

    /// A rejecting finding.
    pub fn reject(check: CheckKind, reason: Rejection, evidence: Vec<Evidence>) -> Self {
        Self {
            check,
            state: CheckState::Rejected { reason },
            evidence,
        }
    }

    /// A skipped finding.
    pub fn skip(check: CheckKind, why: impl Into<String>) -> Self {
        Self {
            check,
            state: CheckState::Skipped { why: why.into() },
            evidence: vec![],
        }
    }
}

/// Final decision on a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The submission passed every applicable check. `normalized` is the
    /// trimmed input, otherwise unchanged.
    Accepted { normalized: String },

    /// The submission failed a check.
    Rejected {
        reason: Rejection,
        evidence: Vec<Evidence>,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// The full result of evaluating one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Evaluation {
    /// Name of the policy that was applied.
    pub policy: String,

    /// The final decision.
    pub verdict: Verdict,

    /// Per-check findings, in pipeline order. Checks after a rejection do
    /// not run and do not appear.
    pub findings: Vec<CheckFinding>,

    /// When the evaluation happened.
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match &self.verdict {
            Verdict::Rejected { reason, .. } => Some(reason),
            Verdict::Accepted { .. } => None,
        }
    }

    /// Collapse into the plain accept/reject contract: the trimmed text on
    /// acceptance, the rejection reason otherwise.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self.verdict {
            Verdict::Accepted { normalized } => Ok(normalized),
            Verdict::Rejected { reason, .. } => Err(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let reason = Rejection::TooShort { min: 3, actual: 1 };
        assert_eq!(reason.to_string(), "text is 1 characters, minimum is 3");
    }

    #[test]
    fn test_rejection_serializes_with_tag() {
        let reason = Rejection::KeyboardPattern {
            pattern: "asdf".to_string(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["reason"], "keyboard_pattern");
        assert_eq!(json["pattern"], "asdf");
    }

    #[test]
    fn test_check_state_predicates() {
        assert!(CheckState::Pass.is_pass());
        assert!(CheckState::Rejected {
            reason: Rejection::EmptyInput
        }
        .is_rejected());
        assert!(CheckState::Skipped {
            why: "disabled".to_string()
        }
        .is_skipped());
    }

    #[test]
    fn test_evaluation_into_result() {
        let accepted = Evaluation {
            policy: "test".to_string(),
            verdict: Verdict::Accepted {
                normalized: "Quarterly Review".to_string(),
            },
            findings: vec![],
            evaluated_at: Utc::now(),
        };
        assert_eq!(accepted.into_result().unwrap(), "Quarterly Review");

        let rejected = Evaluation {
            policy: "test".to_string(),
            verdict: Verdict::Rejected {
                reason: Rejection::EmptyInput,
                evidence: vec![],
            },
            findings: vec![],
            evaluated_at: Utc::now(),
        };
        assert_eq!(rejected.into_result().unwrap_err(), Rejection::EmptyInput);
    }
}
