//! Policy parsing from YAML/JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Adjacent-key sequences rejected by default.
///
/// The list the production system accumulated: left-hand home-row walks,
/// top-row walks, and the bottom-row remainder.
pub const DEFAULT_KEYBOARD_PATTERNS: &[&str] = &[
    "asdf",
    "qwer",
    "zxcv",
    "ghjk",
    "bnm",
    "qwerty",
    "asdfgh",
    "qwertyuiop",
];

/// Errors that can occur when loading a policy.
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("policy validation failed: {0}")]
    Validation(String),
}

/// Settings for the best-effort readability check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ReadabilityPolicy {
    /// Whether the check runs at all. Off by default: reading-ease formulas
    /// are calibrated for prose and punish short polysyllabic titles.
    #[serde(default)]
    pub enabled: bool,

    /// Reading-ease scores below this reject as random input.
    #[serde(default = "default_min_reading_ease")]
    pub min_reading_ease: f64,

    /// Syllables-per-word ratios above this reject as random input.
    #[serde(default = "default_max_syllables_per_word")]
    pub max_syllables_per_word: f64,
}

impl Default for ReadabilityPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            min_reading_ease: default_min_reading_ease(),
            max_syllables_per_word: default_max_syllables_per_word(),
        }
    }
}

fn default_min_reading_ease() -> f64 {
    -20.0
}

fn default_max_syllables_per_word() -> f64 {
    10.0
}

fn default_true() -> bool {
    true
}

fn default_max_repeat_run() -> usize {
    4
}

fn default_dominance_ratio() -> f64 {
    0.5
}

/// The quality policy for one free-text field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FieldPolicy {
    /// Policy name, reported in evaluations.
    pub name: String,

    /// What this policy is for.
    #[serde(default)]
    pub description: Option<String>,

    /// Minimum character count after trimming.
    pub min_length: usize,

    /// Minimum word (token) count. Zero disables the word-count and
    /// meaningful-word checks.
    #[serde(default)]
    pub min_words: usize,

    /// Whether to reject denylisted keyboard walks.
    #[serde(default = "default_true")]
    pub reject_keyboard_patterns: bool,

    /// Denylist override. Empty means [`DEFAULT_KEYBOARD_PATTERNS`].
    /// Entries must be lowercase.
    #[serde(default)]
    pub keyboard_patterns: Vec<String>,

    /// Whether to reject repeated/dominant characters.
    #[serde(default = "default_true")]
    pub reject_repetition: bool,

    /// Runs of this many identical characters reject.
    #[serde(default = "default_max_repeat_run")]
    pub max_repeat_run: usize,

    /// A single character above this share of all characters rejects.
    #[serde(default = "default_dominance_ratio")]
    pub dominance_ratio: f64,

    /// Whether to reject words shaped like random typing.
    #[serde(default = "default_true")]
    pub reject_random_words: bool,

    /// Best-effort readability settings.
    #[serde(default)]
    pub readability: ReadabilityPolicy,

    /// Whether the text must be absent from the uniqueness store.
    #[serde(default)]
    pub require_unique: bool,
}

impl FieldPolicy {
    /// The observed policy for project titles: at least 3 characters and
    /// 2 words, every shape heuristic on, uniqueness required.
    pub fn title() -> Self {
        Self {
            name: "project-title".to_string(),
            description: Some("Short free-text titles that must read as real words".to_string()),
            min_length: 3,
            min_words: 2,
            reject_keyboard_patterns: true,
            keyboard_patterns: vec![],
            reject_repetition: true,
            max_repeat_run: default_max_repeat_run(),
            dominance_ratio: default_dominance_ratio(),
            reject_random_words: true,
            readability: ReadabilityPolicy::default(),
            require_unique: true,
        }
    }

    /// The observed policy for project descriptions: at least 10
    /// characters, structural checks only.
    pub fn description() -> Self {
        Self {
            name: "project-description".to_string(),
            description: Some("Longer free text; only structural checks apply".to_string()),
            min_length: 10,
            min_words: 0,
            reject_keyboard_patterns: false,
            keyboard_patterns: vec![],
            reject_repetition: false,
            max_repeat_run: default_max_repeat_run(),
            dominance_ratio: default_dominance_ratio(),
            reject_random_words: false,
            readability: ReadabilityPolicy::default(),
            require_unique: false,
        }
    }

    /// An ad-hoc policy with just the two limits set and every shape
    /// heuristic on. Uniqueness is off; inject a store and set
    /// `require_unique` to opt in.
    pub fn with_limits(min_length: usize, min_words: usize) -> Self {
        Self {
            name: "ad-hoc".to_string(),
            description: None,
            min_length,
            min_words,
            ..Self::title()
        }
    }

    /// Parse a policy from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, PolicyError> {
        let policy: FieldPolicy = serde_yaml::from_str(yaml)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse a policy from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: FieldPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Parse a policy from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a policy from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// The effective keyboard denylist.
    pub fn denylist(&self) -> Vec<&str> {
        if self.keyboard_patterns.is_empty() {
            DEFAULT_KEYBOARD_PATTERNS.to_vec()
        } else {
            self.keyboard_patterns.iter().map(String::as_str).collect()
        }
    }

    /// Validate the policy's structure.
    fn validate(&self) -> Result<(), PolicyError> {
        if self.name.is_empty() {
            return Err(PolicyError::Validation("name must not be empty".to_string()));
        }

        if self.min_length == 0 {
            return Err(PolicyError::Validation(
                "min_length must be at least 1".to_string(),
            ));
        }

        if self.max_repeat_run < 2 {
            return Err(PolicyError::Validation(
                "max_repeat_run must be at least 2".to_string(),
            ));
        }

        if !(self.dominance_ratio > 0.0 && self.dominance_ratio <= 1.0) {
            return Err(PolicyError::Validation(format!(
                "dominance_ratio must be in (0, 1], got {}",
                self.dominance_ratio
            )));
        }

        if self.readability.max_syllables_per_word <= 0.0 {
            return Err(PolicyError::Validation(
                "readability.max_syllables_per_word must be positive".to_string(),
            ));
        }

        for pattern in &self.keyboard_patterns {
            if pattern.is_empty() {
                return Err(PolicyError::Validation(
                    "keyboard_patterns entries must not be empty".to_string(),
                ));
            }
            if pattern.chars().any(|c| c.is_uppercase()) {
                return Err(PolicyError::Validation(format!(
                    "keyboard pattern {:?} must be lowercase",
                    pattern
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_POLICY: &str = r#"
name: "ticket-subject"
min_length: 5
min_words: 2
require_unique: true
"#;

    #[test]
    fn test_parse_valid_policy() {
        let policy = FieldPolicy::from_yaml(VALID_POLICY).unwrap();
        assert_eq!(policy.name, "ticket-subject");
        assert_eq!(policy.min_length, 5);
        assert_eq!(policy.min_words, 2);
        assert!(policy.require_unique);
        // Defaults kick in for everything unspecified.
        assert!(policy.reject_keyboard_patterns);
        assert_eq!(policy.max_repeat_run, 4);
        assert!(!policy.readability.enabled);
    }

    #[test]
    fn test_parse_json_policy() {
        let policy =
            FieldPolicy::from_json(r#"{"name": "award-title", "min_length": 3}"#).unwrap();
        assert_eq!(policy.name, "award-title");
        assert_eq!(policy.min_words, 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = FieldPolicy::from_yaml("name: x\nmin_length: 3\nbogus: 1\n");
        assert!(matches!(result, Err(PolicyError::Yaml(_))));
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let result = FieldPolicy::from_yaml("name: x\nmin_length: 0\n");
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_uppercase_denylist_entry_rejected() {
        let result = FieldPolicy::from_yaml(
            "name: x\nmin_length: 3\nkeyboard_patterns: [\"QWER\"]\n",
        );
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_bad_dominance_ratio_rejected() {
        let result = FieldPolicy::from_yaml("name: x\nmin_length: 3\ndominance_ratio: 1.5\n");
        assert!(matches!(result, Err(PolicyError::Validation(_))));
    }

    #[test]
    fn test_denylist_defaults_and_override() {
        let policy = FieldPolicy::title();
        assert!(policy.denylist().contains(&"asdf"));

        let policy = FieldPolicy::from_yaml(
            "name: x\nmin_length: 3\nkeyboard_patterns: [\"uiop\"]\n",
        )
        .unwrap();
        assert_eq!(policy.denylist(), vec!["uiop"]);
    }

    #[test]
    fn test_title_preset_matches_observed_policy() {
        let policy = FieldPolicy::title();
        assert_eq!(policy.min_length, 3);
        assert_eq!(policy.min_words, 2);
        assert!(policy.require_unique);
    }

    #[test]
    fn test_description_preset_is_structural_only() {
        let policy = FieldPolicy::description();
        assert_eq!(policy.min_length, 10);
        assert_eq!(policy.min_words, 0);
        assert!(!policy.reject_keyboard_patterns);
        assert!(!policy.reject_random_words);
        assert!(!policy.require_unique);
    }
}
