//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, WriterConfig};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // CADENCE_LOG wins over RUST_LOG
        if let Some(level) = lookup("CADENCE_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // Unknown formats keep the default
        if let Some(format) = lookup("CADENCE_LOG_FORMAT") {
            config.format = format.parse().unwrap_or_default();
        }

        config.display.apply_env(&lookup);
        config.service = lookup("CADENCE_SERVICE");

        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Test configuration: everything, into libtest's captured output
    #[must_use]
    pub fn test() -> Self {
        Self {
            level: "trace".to_owned(),
            format: Format::Compact,
            writer: WriterConfig::Test,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
