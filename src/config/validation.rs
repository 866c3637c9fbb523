//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject severity names outside the canonical six
//! - Reject empty identity fields and duplicate severity names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::LoggerConfig;
use crate::logger::Severity;

/// A single semantic problem found in a [`LoggerConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("app_name must not be empty")]
    EmptyAppName,

    #[error("version must not be empty")]
    EmptyVersion,

    /// Entry in `enabled_types` that is not a canonical severity name.
    #[error("unknown severity in enabled_types: {0}")]
    UnknownSeverity(String),

    #[error("severity listed more than once in enabled_types: {0}")]
    DuplicateSeverity(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.app_name.is_empty() {
        errors.push(ValidationError::EmptyAppName);
    }
    if config.version.is_empty() {
        errors.push(ValidationError::EmptyVersion);
    }

    let mut seen = HashSet::new();
    for name in &config.enabled_types {
        if name.parse::<Severity>().is_err() {
            errors.push(ValidationError::UnknownSeverity(name.clone()));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateSeverity(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
