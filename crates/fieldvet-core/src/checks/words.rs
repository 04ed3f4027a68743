//! Word-level checks: word count and the meaningful-word tally.
//!
//! Both work on the alphabetic tokens of the analysis. The meaningful-word
//! tally only applies when the word-count check applied (a policy with
//! `min_words` of zero gets neither).

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::textstats;
use crate::types::{CheckFinding, CheckKind, Rejection};

/// Rejects submissions with fewer tokens than `min_words`.
pub struct WordCountCheck;

impl Check for WordCountCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::WordCount
    }

    fn question(&self) -> &'static str {
        "Are there enough words?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if policy.min_words == 0 {
            return CheckFinding::skip(self.kind(), "no word minimum in policy");
        }

        let actual = analysis.tokens.len();
        if actual < policy.min_words {
            CheckFinding::reject(
                self.kind(),
                Rejection::InsufficientWords {
                    min: policy.min_words,
                    actual,
                },
                vec![Evidence::from_policy(
                    format!("minimum word count is {}", policy.min_words),
                    "min_words",
                )],
            )
        } else {
            CheckFinding::pass(self.kind())
        }
    }
}

/// Rejects submissions where no token of length >= 3 contains a vowel.
pub struct MeaningfulWordsCheck;

impl Check for MeaningfulWordsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::MeaningfulWords
    }

    fn question(&self) -> &'static str {
        "Is at least one word a plausible word?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if policy.min_words == 0 {
            // Tied to the word-count check: fields without a word minimum
            // do not get the tally either.
            return CheckFinding::skip(self.kind(), "no word minimum in policy");
        }

        let meaningful = analysis
            .tokens
            .iter()
            .filter(|t| t.char_len() >= 3 && textstats::vowel_count(&t.lower) > 0)
            .count();

        if meaningful == 0 {
            CheckFinding::reject(
                self.kind(),
                Rejection::NoMeaningfulWords,
                vec![Evidence::from_span(
                    "no word of three or more letters contains a vowel",
                    0,
                    analysis.trimmed.len(),
                )],
            )
        } else {
            CheckFinding::pass(self.kind())
        }
    }
}
