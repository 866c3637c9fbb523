//! Diagnostic logging setup.
//!
//! # Responsibilities
//! - Install a tracing subscriber for the crate's own events
//! - Configure log level at runtime via `RUST_LOG`
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Events go to stderr; stdout belongs to the console logger

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `default_filter` applies when `RUST_LOG` is unset or invalid. Returns
/// `false` if a subscriber was already installed, which is not an error.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("console_logger=debug");
        assert!(!init("console_logger=debug"));
    }
}
