//! Evidence linking for evaluation findings.
//!
//! Every rejection points at the thing that caused it: a span of the
//! submitted text, the policy field that set the threshold, or the
//! uniqueness store that reported a duplicate.

use serde::{Deserialize, Serialize};

/// Where a piece of evidence comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    /// The submitted text itself.
    Text,
    /// The field policy in force.
    Policy,
    /// The injected uniqueness store.
    Store,
}

/// A piece of evidence supporting a check finding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evidence {
    /// What this evidence shows.
    pub claim: String,

    /// Where the evidence comes from.
    pub source: EvidenceSource,

    /// Pointer to the location (e.g., "text[4:12]").
    pub pointer: String,
}

impl Evidence {
    /// Evidence pointing at a byte span of the trimmed text.
    pub fn from_span(claim: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            claim: claim.into(),
            source: EvidenceSource::Text,
            pointer: format!("text[{}:{}]", start, end),
        }
    }

    /// Evidence pointing at a policy field.
    pub fn from_policy(claim: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            source: EvidenceSource::Policy,
            pointer: format!("policy.{}", field.into()),
        }
    }

    /// Evidence pointing at the uniqueness store.
    pub fn from_store(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            source: EvidenceSource::Store,
            pointer: "store".to_string(),
        }
    }
}
