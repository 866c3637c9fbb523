//! Line rendering.
//!
//! Kept free of I/O and of the system clock so the exact output shape can be
//! checked against fixed instants.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::logger::severity::{Severity, COLOR_RESET};

/// Format an instant as ISO-8601 UTC with millisecond precision.
pub fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render one log line, without the trailing newline.
///
/// Shape: `<color><label> [<timestamp>] <app> v<version> (<code>) <action>: <message><reset>`
pub fn render_line(
    severity: Severity,
    at: DateTime<Utc>,
    app_name: &str,
    version: &str,
    code: impl Display,
    action: impl Display,
    message: impl Display,
) -> String {
    format!(
        "{}{} [{}] {} v{} ({}) {}: {}{}",
        severity.color(),
        severity.label(),
        timestamp(at),
        app_name,
        version,
        code,
        action,
        message,
        COLOR_RESET,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_timestamp_format() {
        assert_eq!(timestamp(noon()), "2024-01-01T12:00:00.000Z");

        let at = noon() + chrono::Duration::milliseconds(42);
        assert_eq!(timestamp(at), "2024-01-01T12:00:00.042Z");
    }

    #[test]
    fn test_render_exact_line() {
        let line = render_line(
            Severity::Info,
            noon(),
            "TestApp",
            "1.0",
            200,
            "Testing",
            "This is an info log",
        );
        assert_eq!(
            line,
            "\x1b[34m[INFO] [2024-01-01T12:00:00.000Z] TestApp v1.0 (200) Testing: This is an info log\x1b[0m"
        );
    }

    #[test]
    fn test_render_accepts_string_codes_and_empty_fields() {
        let line = render_line(Severity::Critical, noon(), "", "", "E42", "", "");
        assert_eq!(
            line,
            "\x1b[41m[CRITICAL] [2024-01-01T12:00:00.000Z]  v (E42) : \x1b[0m"
        );
    }
}
