//! JSON Schema validation for policy documents.
//!
//! Policy files shipped alongside deployments are validated against
//! `schemas/policy.schema.json` before use, giving editors and CI a
//! machine-checkable contract beyond what serde enforces.

use std::sync::OnceLock;
use thiserror::Error;

/// Embedded policy schema (loaded at compile time).
const POLICY_SCHEMA_JSON: &str = include_str!("../../../../schemas/policy.schema.json");

/// Compiled JSON Schema validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

/// Errors from schema validation itself.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("failed to load schema: {0}")]
    LoadError(String),
}

fn get_validator() -> Result<&'static jsonschema::Validator, SchemaError> {
    let result = COMPILED_SCHEMA.get_or_init(|| {
        let schema_value: serde_json::Value = match serde_json::from_str(POLICY_SCHEMA_JSON) {
            Ok(v) => v,
            Err(e) => return Err(format!("invalid schema JSON: {}", e)),
        };

        match jsonschema::options().build(&schema_value) {
            Ok(v) => Ok(v),
            Err(e) => Err(format!("failed to compile schema: {}", e)),
        }
    });

    match result {
        Ok(v) => Ok(v),
        Err(e) => Err(SchemaError::LoadError(e.clone())),
    }
}

/// Validate a policy JSON value against the embedded schema.
///
/// Returns `Ok(())` when valid, or the list of validation error messages.
pub fn validate_policy_schema(policy_json: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e.to_string()])?;

    let errors: Vec<String> = validator
        .iter_errors(policy_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_policy_passes_schema() {
        let value = serde_json::json!({
            "name": "project-title",
            "min_length": 3,
            "min_words": 2,
            "require_unique": true
        });
        assert!(validate_policy_schema(&value).is_ok());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let value = serde_json::json!({
            "name": "project-title"
            // Missing: min_length
        });
        let errors = validate_policy_schema(&value).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_additional_properties_fail() {
        let value = serde_json::json!({
            "name": "x",
            "min_length": 3,
            "unknown_field": true
        });
        assert!(validate_policy_schema(&value).is_err());
    }

    #[test]
    fn test_uppercase_pattern_fails() {
        let value = serde_json::json!({
            "name": "x",
            "min_length": 3,
            "keyboard_patterns": ["QWER"]
        });
        assert!(validate_policy_schema(&value).is_err());
    }

    #[test]
    fn test_full_policy_with_all_sections() {
        let value = serde_json::json!({
            "name": "ticket-subject",
            "description": "Subjects typed by employees",
            "min_length": 5,
            "min_words": 2,
            "reject_keyboard_patterns": true,
            "keyboard_patterns": ["asdf", "uiop"],
            "reject_repetition": true,
            "max_repeat_run": 4,
            "dominance_ratio": 0.5,
            "reject_random_words": true,
            "readability": {
                "enabled": true,
                "min_reading_ease": -20.0,
                "max_syllables_per_word": 10.0
            },
            "require_unique": true
        });
        assert!(validate_policy_schema(&value).is_ok());
    }
}
