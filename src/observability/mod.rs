//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger state changes, suppressed lines, config parsing
//!     → tracing events (debug/trace)
//!     → logging.rs subscriber
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - Diagnostics about the logger never share its output stream
//! - Filter comes from RUST_LOG so embedding applications stay in control

pub mod logging;
