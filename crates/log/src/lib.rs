//! # Cadence Log
//!
//! Logging bootstrap for applications and tests built on `cadence-value`.
//! The codec only emits `tracing` events; this crate installs the
//! subscriber that prints them.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence_log::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Picks a preset from the environment and build profile
//!     let _guard = cadence_log::auto_init()?;
//!
//!     info!(tags = 32, "registry ready");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;

use std::sync::OnceLock;

// Public API
pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, WriterConfig};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Result, auto_init, debug, error, info, init, init_with, trace, warn};

    pub use tracing::{Span, field};
}

// Re-export tracing macros
pub use tracing::{debug, error, info, instrument, span, trace, warn};

/// Result type for logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter parsing error
    #[error("Invalid filter '{filter}': {reason}")]
    Filter {
        /// The rejected directives
        filter: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed
    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

static TEST_INIT: OnceLock<()> = OnceLock::new();

// ============================================================================
// Initialization Functions
// ============================================================================

/// Auto-detect and initialize the best logging configuration
///
/// Returns a no-op guard when some other subscriber is already installed.
pub fn auto_init() -> Result<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if std::env::var("CADENCE_LOG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> Result<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests: trace level into libtest's captured output.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test() {
    TEST_INIT.get_or_init(|| {
        if !tracing::dispatcher::has_been_set() {
            drop(init_with(Config::test()));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        assert!(tracing::dispatcher::has_been_set());

        debug!(tags = 1, "still logging after repeated init");
        assert!(matches!(init(), Err(Error::AlreadyInitialized)));
        assert!(auto_init().is_ok());
    }
}
