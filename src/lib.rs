//! Leveled, color-coded console logging for small applications.
//!
//! Every line carries a severity label, a UTC timestamp, the application name
//! and version, a caller-defined code, an action and a message:
//!
//! ```text
//! [INFO] [2024-01-01T12:00:00.000Z] TestApp v1.0 (200) Testing: This is an info log
//! ```
//!
//! ```
//! use console_logger::{Logger, Severity};
//!
//! let mut logger = Logger::with_writer("TestApp", "1.0", Vec::new());
//! logger.info(200, "Testing", "This is an info log")?;
//! logger.disable_type(Severity::Debug);
//! logger.debug(200, "Testing", "dropped")?;
//!
//! let output = String::from_utf8(logger.into_inner()).unwrap();
//! assert_eq!(output.lines().count(), 1);
//! # Ok::<(), console_logger::LoggerError>(())
//! ```

pub mod config;
pub mod error;
pub mod logger;
pub mod observability;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use logger::{Logger, Severity};
