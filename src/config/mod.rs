//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! TOML text (or a LoggerConfig built in code)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → LoggerConfig (validated)
//!     → Logger::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Reading files is left to the caller; only text is parsed here

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{parse_config, ConfigError};
pub use schema::LoggerConfig;
pub use validation::{validate_config, ValidationError};
