//! The `Logger` type: identity, enable state and emission.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

use chrono::Utc;

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::logger::format;
use crate::logger::severity::Severity;

const INIT_ACTION: &str = "Logger initialized";
const INIT_MESSAGE: &str = "Logger initialized successfully.";

/// Console logger tagging every line with an application name and version.
///
/// A line is written only while the logger is enabled and the line's severity
/// is in the enabled set. Anything else is a silent no-op.
///
/// Writes go to standard output unless a writer is supplied through
/// [`Logger::with_writer`].
#[derive(Debug)]
pub struct Logger<W = Stdout> {
    enabled: bool,
    enabled_types: BTreeSet<Severity>,
    app_name: String,
    version: String,
    writer: W,
}

impl Logger {
    /// Create a logger writing to standard output, with every severity enabled.
    pub fn new(app_name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::with_writer(app_name, version, io::stdout())
    }

    /// Create a stdout logger from configuration.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::from_config_with_writer(config, io::stdout())
    }
}

impl<W: Write> Logger<W> {
    /// Create a logger writing to `writer`, with every severity enabled.
    pub fn with_writer(
        app_name: impl Into<String>,
        version: impl Into<String>,
        writer: W,
    ) -> Self {
        let logger = Self {
            enabled: true,
            enabled_types: Severity::ALL.into_iter().collect(),
            app_name: app_name.into(),
            version: version.into(),
            writer,
        };
        tracing::debug!(app_name = %logger.app_name, version = %logger.version, "Logger created");
        logger
    }

    /// Create a logger from configuration, writing to `writer`.
    ///
    /// Unknown names in `enabled_types` are ignored, as with
    /// [`enable_type_name`](Self::enable_type_name).
    pub fn from_config_with_writer(config: &LoggerConfig, writer: W) -> Self {
        let mut logger =
            Self::with_writer(config.app_name.clone(), config.version.clone(), writer);
        logger.enabled = config.enabled;
        logger.enabled_types = config.severities().into_iter().collect();
        logger
    }

    /// Write one line at `severity` if the current state allows it.
    ///
    /// Returns `Ok(())` without writing when the logger or the severity is
    /// disabled. The only failure is the writer itself failing.
    pub fn log(
        &mut self,
        severity: Severity,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        if !self.should_log(severity) {
            tracing::trace!(%severity, enabled = self.enabled, "Log line suppressed");
            return Ok(());
        }

        let mut line = format::render_line(
            severity,
            Utc::now(),
            &self.app_name,
            &self.version,
            code,
            action,
            message,
        );
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Like [`log`](Self::log), for a severity given by name.
    ///
    /// The name is checked before anything is rendered, so an unknown name
    /// produces [`LoggerError::UnknownSeverity`] and no output, whatever the
    /// enabled state.
    pub fn custom_log(
        &mut self,
        severity: &str,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        let severity: Severity = severity.parse()?;
        self.log(severity, code, action, message)
    }

    /// Replace the identity and announce it with a `success` line.
    ///
    /// The enabled flag and set are left untouched, so the announcement is
    /// itself subject to them.
    pub fn initialize(
        &mut self,
        app_name: impl Into<String>,
        version: impl Into<String>,
    ) -> LoggerResult<()> {
        self.app_name = app_name.into();
        self.version = version.into();
        self.success(0, INIT_ACTION, INIT_MESSAGE)
    }

    pub fn info(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Info, code, action, message)
    }

    pub fn debug(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Debug, code, action, message)
    }

    pub fn warning(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Warning, code, action, message)
    }

    pub fn success(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Success, code, action, message)
    }

    pub fn error(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Error, code, action, message)
    }

    pub fn critical(
        &mut self,
        code: impl Display,
        action: impl Display,
        message: impl Display,
    ) -> LoggerResult<()> {
        self.log(Severity::Critical, code, action, message)
    }
}

impl<W> Logger<W> {
    /// Turn all output on.
    pub fn enable(&mut self) {
        self.enabled = true;
        tracing::debug!("Logger enabled");
    }

    /// Turn all output off. Per-severity settings are kept.
    pub fn disable(&mut self) {
        self.enabled = false;
        tracing::debug!("Logger disabled");
    }

    pub fn enable_type(&mut self, severity: Severity) {
        if self.enabled_types.insert(severity) {
            tracing::debug!(%severity, "Severity enabled");
        }
    }

    pub fn disable_type(&mut self, severity: Severity) {
        if self.enabled_types.remove(&severity) {
            tracing::debug!(%severity, "Severity disabled");
        }
    }

    /// Enable a severity given by name.
    ///
    /// Never fails. A name outside the canonical six is accepted and ignored:
    /// it could not produce output anyway, since [`custom_log`](Self::custom_log)
    /// rejects it first.
    pub fn enable_type_name(&mut self, name: &str) {
        match name.parse() {
            Ok(severity) => self.enable_type(severity),
            Err(_) => {
                tracing::debug!(severity_name = name, "Ignoring enable of unknown severity");
            }
        }
    }

    /// Disable a severity given by name. Unknown names are ignored.
    pub fn disable_type_name(&mut self, name: &str) {
        match name.parse() {
            Ok(severity) => self.disable_type(severity),
            Err(_) => {
                tracing::debug!(severity_name = name, "Ignoring disable of unknown severity");
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_type_enabled(&self, severity: Severity) -> bool {
        self.enabled_types.contains(&severity)
    }

    /// Whether a line at `severity` would be written right now.
    pub fn should_log(&self, severity: Severity) -> bool {
        self.enabled && self.is_type_enabled(severity)
    }

    /// Enabled severities in canonical order.
    pub fn enabled_types(&self) -> Vec<Severity> {
        self.enabled_types.iter().copied().collect()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Snapshot of the current state as configuration.
    pub fn config(&self) -> LoggerConfig {
        LoggerConfig {
            app_name: self.app_name.clone(),
            version: self.version.clone(),
            enabled: self.enabled,
            enabled_types: self
                .enabled_types
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }

    /// Borrow the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrow the underlying writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the logger and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
