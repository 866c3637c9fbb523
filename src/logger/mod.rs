//! Leveled console logger.
//!
//! # Data Flow
//! ```text
//! caller
//!     → console.rs (enabled flag + enabled set gate)
//!     → format.rs (color, label, timestamp, identity)
//!     → writer (stdout by default), one line per call
//! ```
//!
//! # Design Decisions
//! - Severity is a closed enum; string input is validated against it
//! - Disabled output is a silent no-op, never an error
//! - State lives in the Logger value; there is no global instance

pub mod console;
pub mod format;
pub mod severity;

pub use console::Logger;
pub use severity::Severity;
