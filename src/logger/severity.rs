//! Severity levels and their display attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;

/// ANSI sequence that ends every colored line.
pub const COLOR_RESET: &str = "\x1b[0m";

/// One of the six fixed log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Debug,
    Warning,
    Success,
    Error,
    Critical,
}

impl Severity {
    /// Every severity, in canonical order.
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Debug,
        Severity::Warning,
        Severity::Success,
        Severity::Error,
        Severity::Critical,
    ];

    /// Lowercase canonical name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// ANSI escape prefix for lines of this severity.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::Info => "\x1b[34m",
            Severity::Debug => "\x1b[33m",
            Severity::Warning => "\x1b[35m",
            Severity::Success => "\x1b[32m",
            Severity::Error => "\x1b[31m",
            // Red background rather than red text.
            Severity::Critical => "\x1b[41m",
        }
    }

    /// Bracketed label printed at the start of each line.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Info => "[INFO]",
            Severity::Debug => "[DEBUG]",
            Severity::Warning => "[WARNING]",
            Severity::Success => "[SUCCESS]",
            Severity::Error => "[ERROR]",
            Severity::Critical => "[CRITICAL]",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    /// Matching is exact: `"Info"` or `" info"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| LoggerError::UnknownSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for severity in Severity::ALL {
            assert_eq!(severity.as_str().parse::<Severity>().unwrap(), severity);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "unknownLogType".parse::<Severity>().unwrap_err();
        assert!(matches!(err, LoggerError::UnknownSeverity(ref v) if v == "unknownLogType"));

        assert!("INFO".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn test_color_and_label_table() {
        assert_eq!(Severity::Info.color(), "\x1b[34m");
        assert_eq!(Severity::Debug.color(), "\x1b[33m");
        assert_eq!(Severity::Warning.color(), "\x1b[35m");
        assert_eq!(Severity::Success.color(), "\x1b[32m");
        assert_eq!(Severity::Error.color(), "\x1b[31m");
        assert_eq!(Severity::Critical.color(), "\x1b[41m");

        assert_eq!(Severity::Warning.label(), "[WARNING]");
        assert_eq!(Severity::Critical.label(), "[CRITICAL]");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let parsed: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(parsed, Severity::Critical);
    }
}
