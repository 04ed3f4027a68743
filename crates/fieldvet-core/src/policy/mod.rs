//! Field policy parsing and validation.
//!
//! A policy captures the thresholds and toggles for one free-text field
//! (which checks apply, minimum length, minimum words, uniqueness). Policies
//! are structured data parsed from YAML/JSON and validated against an
//! embedded JSON Schema.

mod parser;
mod schema;

pub use parser::{FieldPolicy, PolicyError, ReadabilityPolicy, DEFAULT_KEYBOARD_PATTERNS};
pub use schema::validate_policy_schema;
