//! Repetition checks.
//!
//! Two rules, either of which rejects:
//! - a run of `max_repeat_run` identical characters (case-insensitive);
//! - one character (case-insensitive) above `dominance_ratio` of the total
//!   character count of the trimmed text, whitespace included.

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::types::{CheckFinding, CheckKind, Rejection};

pub struct RepetitionCheck;

impl Check for RepetitionCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Repetition
    }

    fn question(&self) -> &'static str {
        "Is one key being held down?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if !policy.reject_repetition {
            return CheckFinding::skip(self.kind(), "disabled by policy");
        }

        if let Some(run) = analysis.longest_identical_run() {
            if run.len >= policy.max_repeat_run {
                return CheckFinding::reject(
                    self.kind(),
                    Rejection::ExcessiveRepetition,
                    vec![Evidence::from_span(
                        format!("{:?} repeated {} times", run.ch, run.len),
                        run.start,
                        run.end,
                    )],
                );
            }
        }

        if let Some((ch, count)) = analysis.dominant_char() {
            if analysis.char_count > 0 {
                let share = count as f64 / analysis.char_count as f64;
                if share > policy.dominance_ratio {
                    return CheckFinding::reject(
                        self.kind(),
                        Rejection::ExcessiveRepetition,
                        vec![Evidence::from_span(
                            format!(
                                "{:?} accounts for {count} of {} characters",
                                ch, analysis.char_count
                            ),
                            0,
                            analysis.trimmed.len(),
                        )],
                    );
                }
            }
        }

        CheckFinding::pass(self.kind())
    }
}
