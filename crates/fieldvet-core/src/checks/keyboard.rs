//! Keyboard-walk detection.
//!
//! Randomly mashed input tends to contain adjacent-key runs ("asdf",
//! "qwer"). The check scans the lower-cased text for every denylisted
//! substring and rejects on the first hit, pointing at where it occurred.

use super::Check;
use crate::analysis::Analysis;
use crate::evidence::Evidence;
use crate::policy::FieldPolicy;
use crate::types::{CheckFinding, CheckKind, Rejection};

pub struct KeyboardPatternCheck;

impl Check for KeyboardPatternCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::KeyboardPattern
    }

    fn question(&self) -> &'static str {
        "Was this typed by walking the keyboard?"
    }

    fn evaluate(&self, analysis: &Analysis<'_>, policy: &FieldPolicy) -> CheckFinding {
        if !policy.reject_keyboard_patterns {
            return CheckFinding::skip(self.kind(), "disabled by policy");
        }

        let lower = analysis.trimmed.to_lowercase();

        for pattern in policy.denylist() {
            if let Some(start) = lower.find(pattern) {
                // The span indexes the lower-cased text; for ASCII denylist
                // entries this coincides with the trimmed text.
                return CheckFinding::reject(
                    self.kind(),
                    Rejection::KeyboardPattern {
                        pattern: pattern.to_string(),
                    },
                    vec![Evidence::from_span(
                        format!("contains {:?}", pattern),
                        start,
                        start + pattern.len(),
                    )],
                );
            }
        }

        CheckFinding::pass(self.kind())
    }
}
