//! Building loggers from configuration text.

use console_logger::config::{parse_config, ConfigError, ValidationError};
use console_logger::{Logger, Severity};

mod common;

use common::output_lines;

#[test]
fn test_configured_logger_filters_output() {
    let config = parse_config(
        r#"
        app_name = "ConfApp"
        version = "4.2"
        enabled_types = ["error", "critical"]
        "#,
    )
    .unwrap();

    let mut logger = Logger::from_config_with_writer(&config, Vec::new());
    logger.info(1, "Boot", "hidden").unwrap();
    logger.error(2, "Boot", "shown").unwrap();

    let lines = output_lines(&logger);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[ERROR]"));
    assert!(lines[0].contains("ConfApp v4.2 (2) Boot: shown"));
}

#[test]
fn test_disabled_config_then_enable() {
    let config = parse_config("enabled = false\n").unwrap();
    let mut logger = Logger::from_config_with_writer(&config, Vec::new());

    logger.success(1, "a", "m").unwrap();
    assert!(output_lines(&logger).is_empty());

    logger.enable();
    logger.success(1, "a", "m").unwrap();
    assert_eq!(output_lines(&logger).len(), 1);
    assert_eq!(logger.enabled_types(), Severity::ALL.to_vec());
}

#[test]
fn test_unknown_severity_in_config_is_rejected() {
    let err = parse_config("enabled_types = [\"info\", \"UnknownType\"]\n").unwrap_err();
    match err {
        ConfigError::Validation(errors) => {
            assert_eq!(
                errors,
                vec![ValidationError::UnknownSeverity("UnknownType".into())]
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
