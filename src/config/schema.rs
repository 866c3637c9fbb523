//! Configuration schema definitions.
//!
//! Severity names stay as strings here so that a typo in configuration text is
//! reported by validation instead of failing deserialization outright.

use serde::{Deserialize, Serialize};

use crate::logger::Severity;

/// Initial state for a [`Logger`](crate::logger::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Application name printed on every line.
    pub app_name: String,

    /// Application version, printed with a `v` prefix.
    pub version: String,

    /// Global on/off switch.
    pub enabled: bool,

    /// Severity names allowed to produce output.
    pub enabled_types: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            app_name: "app".to_string(),
            version: "0.1.0".to_string(),
            enabled: true,
            enabled_types: Severity::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }
}

impl LoggerConfig {
    /// Config for the given identity with every other field at its default.
    pub fn new(app_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Resolve `enabled_types` to severities, skipping names that do not parse.
    ///
    /// Run [`validate_config`](crate::config::validate_config) first to have
    /// unknown names reported rather than dropped.
    pub fn severities(&self) -> Vec<Severity> {
        self.enabled_types
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect()
    }
}
