//! The evaluation pipeline.
//!
//! Checks run in a fixed order, cheapest and most certain first, and the
//! pipeline stops at the first rejection. Aside from the two injected
//! collaborators the run is pure: same text, same policy, same verdict.

use chrono::Utc;
use tracing::debug;

use crate::analysis::Analysis;
use crate::checks::{
    AlphabeticContentCheck, Check, EmptinessCheck, KeyboardPatternCheck, MeaningfulWordsCheck,
    MinLengthCheck, ReadabilityCheck, RepetitionCheck, UniquenessCheck, WordCountCheck,
    WordShapeCheck,
};
use crate::policy::FieldPolicy;
use crate::providers::{ReadabilityProvider, UniquenessStore};
use crate::types::{CheckFinding, CheckState, Evaluation, Verdict};

/// Evaluates submissions against one policy.
///
/// Borrows its policy and collaborators; construct one per field and reuse
/// it across requests. Safe to share between threads.
pub struct Evaluator<'a> {
    policy: &'a FieldPolicy,
    store: Option<&'a dyn UniquenessStore>,
    readability: Option<&'a dyn ReadabilityProvider>,
}

impl<'a> Evaluator<'a> {
    pub fn new(policy: &'a FieldPolicy) -> Self {
        Self {
            policy,
            store: None,
            readability: None,
        }
    }

    /// Inject the uniqueness store consulted by the duplicate check.
    pub fn with_store(mut self, store: &'a dyn UniquenessStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Inject the readability provider consulted by the statistical check.
    pub fn with_readability(mut self, provider: &'a dyn ReadabilityProvider) -> Self {
        self.readability = Some(provider);
        self
    }

    /// Run the pipeline over one submission.
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let analysis = Analysis::of(text);

        let readability = ReadabilityCheck::new(self.readability);
        let uniqueness = UniquenessCheck::new(self.store);

        let checks: [&dyn Check; 10] = [
            &EmptinessCheck,
            &MinLengthCheck,
            &AlphabeticContentCheck,
            &KeyboardPatternCheck,
            &RepetitionCheck,
            &WordCountCheck,
            &WordShapeCheck,
            &MeaningfulWordsCheck,
            &readability,
            &uniqueness,
        ];

        let mut findings: Vec<CheckFinding> = Vec::with_capacity(checks.len());

        for check in checks {
            let finding = check.evaluate(&analysis, self.policy);

            if let CheckState::Rejected { reason } = &finding.state {
                debug!(
                    policy = %self.policy.name,
                    check = ?finding.check,
                    %reason,
                    "submission rejected"
                );

                let verdict = Verdict::Rejected {
                    reason: reason.clone(),
                    evidence: finding.evidence.clone(),
                };
                findings.push(finding);

                return Evaluation {
                    policy: self.policy.name.clone(),
                    verdict,
                    findings,
                    evaluated_at: Utc::now(),
                };
            }

            findings.push(finding);
        }

        Evaluation {
            policy: self.policy.name.clone(),
            verdict: Verdict::Accepted {
                normalized: analysis.trimmed.to_string(),
            },
            findings,
            evaluated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::uniqueness::normalize_for_lookup;
    use crate::types::{CheckKind, Rejection};
    use std::collections::HashSet;

    struct SetStore(HashSet<String>);

    impl UniquenessStore for SetStore {
        fn contains(&self, normalized: &str) -> bool {
            self.0.contains(normalized)
        }
    }

    fn reject_reason(policy: &FieldPolicy, text: &str) -> Option<Rejection> {
        Evaluator::new(policy).evaluate(text).rejection().cloned()
    }

    #[test]
    fn test_keyboard_mash_rejected() {
        let policy = FieldPolicy::with_limits(3, 1);
        assert!(matches!(
            reject_reason(&policy, "asdf1234"),
            Some(Rejection::KeyboardPattern { .. })
        ));
    }

    #[test]
    fn test_held_key_rejected() {
        let policy = FieldPolicy::with_limits(3, 1);
        assert_eq!(
            reject_reason(&policy, "aaaa"),
            Some(Rejection::ExcessiveRepetition)
        );
    }

    #[test]
    fn test_real_title_accepted_unchanged() {
        let policy = FieldPolicy::with_limits(3, 2);
        let evaluation = Evaluator::new(&policy).evaluate("Quarterly Budget Review");
        assert_eq!(
            evaluation.into_result().unwrap(),
            "Quarterly Budget Review"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let policy = FieldPolicy::with_limits(3, 2);
        let evaluation = Evaluator::new(&policy).evaluate("  Quarterly Budget Review \n");
        assert_eq!(
            evaluation.into_result().unwrap(),
            "Quarterly Budget Review"
        );
    }

    #[test]
    fn test_consonant_wall_rejected() {
        let policy = FieldPolicy::with_limits(3, 2);
        assert!(matches!(
            reject_reason(&policy, "Xqzv Bcdfgh"),
            Some(Rejection::RandomSequence { .. })
        ));
    }

    #[test]
    fn test_findings_stop_at_first_rejection() {
        let policy = FieldPolicy::title();
        let evaluation = Evaluator::new(&policy).evaluate("");
        assert_eq!(evaluation.findings.len(), 1);
        assert_eq!(evaluation.findings[0].check, CheckKind::Emptiness);
    }

    #[test]
    fn test_check_order_is_stable() {
        let policy = FieldPolicy::title();
        let evaluation = Evaluator::new(&policy).evaluate("Quarterly Budget Review");
        let order: Vec<CheckKind> = evaluation.findings.iter().map(|f| f.check).collect();
        assert_eq!(
            order,
            vec![
                CheckKind::Emptiness,
                CheckKind::MinLength,
                CheckKind::AlphabeticContent,
                CheckKind::KeyboardPattern,
                CheckKind::Repetition,
                CheckKind::WordCount,
                CheckKind::WordShape,
                CheckKind::MeaningfulWords,
                CheckKind::Readability,
                CheckKind::Uniqueness,
            ]
        );
    }

    #[test]
    fn test_description_policy_skips_shape_checks() {
        let policy = FieldPolicy::description();
        let evaluation = Evaluator::new(&policy).evaluate("aaaa bbbb asdf qqqq");
        // Everything the description policy disables is skipped, not run,
        // so even keyboard mash passes the structural bar.
        assert!(evaluation.is_accepted());
        assert!(evaluation
            .findings
            .iter()
            .any(|f| f.check == CheckKind::KeyboardPattern && f.state.is_skipped()));
    }

    #[test]
    fn test_duplicate_rejected_new_entry_accepted() {
        let mut names = HashSet::new();
        names.insert(normalize_for_lookup("Project Alpha"));
        let store = SetStore(names);

        let policy = FieldPolicy::title();
        let evaluator = Evaluator::new(&policy).with_store(&store);

        assert_eq!(
            evaluator.evaluate("Project Alpha").rejection().cloned(),
            Some(Rejection::DuplicateName)
        );
        assert!(evaluator.evaluate("Project Beta").is_accepted());
    }

    #[test]
    fn test_uniqueness_skipped_without_store() {
        let policy = FieldPolicy::title();
        let evaluation = Evaluator::new(&policy).evaluate("Project Alpha");
        assert!(evaluation.is_accepted());
        assert!(evaluation
            .findings
            .iter()
            .any(|f| f.check == CheckKind::Uniqueness && f.state.is_skipped()));
    }

    #[test]
    fn test_verdict_evidence_matches_finding_evidence() {
        let policy = FieldPolicy::with_limits(3, 1);
        let evaluation = Evaluator::new(&policy).evaluate("my asdf title");
        match &evaluation.verdict {
            Verdict::Rejected { evidence, .. } => {
                assert_eq!(evidence, &evaluation.findings.last().unwrap().evidence);
            }
            Verdict::Accepted { .. } => panic!("expected rejection"),
        }
    }
}
