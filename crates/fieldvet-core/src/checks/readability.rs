//! Best-effort statistical check.
//!
//! Consults an injected [`ReadabilityProvider`] and rejects when the
//! reading-ease score or the syllables-per-word ratio falls outside
//! plausible language. The provider is an opportunistic capability: any
//! failure is logged and treated as "no opinion", never as a rejection.

use tracing::debug;

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::providers::ReadabilityProvider;
use crate::types::{CheckFinding, CheckKind, Rejection};

pub struct ReadabilityCheck<'a> {
    provider: Option<&'a dyn ReadabilityProvider>,
}

impl<'a> ReadabilityCheck<'a> {
    pub fn new(provider: Option<&'a dyn ReadabilityProvider>) -> Self {
        Self { provider }
    }
}

impl Check for ReadabilityCheck<'_> {
    fn kind(&self) -> CheckKind {
        CheckKind::Readability
    }

    fn question(&self) -> &'static str {
        "Do the statistics look like language?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if !policy.readability.enabled {
            return CheckFinding::skip(self.kind(), "disabled by policy");
        }

        let Some(provider) = self.provider else {
            return CheckFinding::skip(self.kind(), "no readability provider injected");
        };

        let ease = match provider.reading_ease(analysis.trimmed) {
            Ok(score) => score,
            Err(e) => {
                debug!(error = %e, "reading ease unavailable, passing through");
                return CheckFinding::skip(self.kind(), "reading ease could not be computed");
            }
        };

        if ease < policy.readability.min_reading_ease {
            return CheckFinding::reject(
                self.kind(),
                Rejection::LooksRandom,
                vec![Evidence::from_span(
                    format!(
                        "reading ease {ease:.1} is below {}",
                        policy.readability.min_reading_ease
                    ),
                    0,
                    analysis.trimmed.len(),
                )],
            );
        }

        let words = analysis.tokens.len();
        if words > 0 {
            match provider.syllable_count(analysis.trimmed) {
                Ok(syllables) => {
                    let per_word = f64::from(syllables) / words as f64;
                    if per_word > policy.readability.max_syllables_per_word {
                        return CheckFinding::reject(
                            self.kind(),
                            Rejection::LooksRandom,
                            vec![Evidence::from_span(
                                format!(
                                    "{per_word:.1} syllables per word exceeds {}",
                                    policy.readability.max_syllables_per_word
                                ),
                                0,
                                analysis.trimmed.len(),
                            )],
                        );
                    }
                }
                Err(e) => {
                    debug!(error = %e, "syllable count unavailable, passing through");
                    return CheckFinding::skip(self.kind(), "syllable count could not be computed");
                }
            }
        }

        CheckFinding::pass(self.kind())
    }
}
