//! Per-word randomness detection.
//!
//! Random typing produces words with almost no vowels and long consonant
//! runs. For every token of four or more letters, reject when any of:
//! - at most one vowel in a word of five or more letters;
//! - a run of five or more consecutive consonants;
//! - a run of four or more consecutive consonants in a word of six or more
//!   letters.
//!
//! This is the looser of the two rule-sets the production system carried
//! over time, and the one in force when it shipped. Lossy by nature:
//! vowel-poor English words ("strengths") fail it too.

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::textstats::{max_consonant_run, vowel_count};
use crate::types::{CheckFinding, CheckKind, Rejection};

pub struct WordShapeCheck;

impl Check for WordShapeCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::WordShape
    }

    fn question(&self) -> &'static str {
        "Do the words have the shape of language?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if !policy.reject_random_words {
            return CheckFinding::skip(self.kind(), "disabled by policy");
        }

        for token in &analysis.tokens {
            let len = token.char_len();
            if len < 4 {
                continue;
            }

            let vowels = vowel_count(&token.lower);
            let run = max_consonant_run(&token.lower);

            let vowel_starved = len >= 5 && vowels <= 1;
            let long_run = run >= 5 || (run >= 4 && len >= 6);

            if vowel_starved || long_run {
                return CheckFinding::reject(
                    self.kind(),
                    Rejection::RandomSequence {
                        word: token.text.clone(),
                    },
                    vec![Evidence::from_span(
                        format!(
                            "{:?} has {vowels} vowel(s) and a consonant run of {run}",
                            token.text
                        ),
                        token.start,
                        token.end,
                    )],
                );
            }
        }

        CheckFinding::pass(self.kind())
    }
}
