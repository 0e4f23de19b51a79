//! Logger builder implementation
//!
//! - `format`: format layer creation macros

#[macro_use]
mod format;

use tracing_subscriber::fmt::TestWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::{Config, Format, WriterConfig};
use crate::{Error, Result};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span entered
///
/// The subscriber itself stays installed for the life of the process.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Override the filter directives
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Override the output format
    #[must_use]
    pub fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Build and install the logger as the global default
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> Result<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| Error::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let fmt_layer = self.fmt_layer();
        Registry::default()
            .with(fmt_layer)
            .with(filter)
            .try_init()
            .map_err(|_| Error::AlreadyInitialized)?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }

    fn fmt_layer(&self) -> BoxedLayer {
        let display = &self.config.display;
        let writer = make_writer(self.config.writer);
        match self.config.format {
            Format::Pretty => create_fmt_layer!(pretty, display, writer),
            Format::Compact => create_fmt_layer!(compact, display, writer),
            Format::Json => create_json_layer!(display, writer),
        }
    }
}

fn make_writer(writer: WriterConfig) -> BoxMakeWriter {
    match writer {
        WriterConfig::Stderr => BoxMakeWriter::new(std::io::stderr),
        WriterConfig::Stdout => BoxMakeWriter::new(std::io::stdout),
        WriterConfig::Test => BoxMakeWriter::new(TestWriter::new()),
    }
}

impl LoggerGuard {
    pub(crate) fn noop() -> Self {
        Self { _root_span: None }
    }
}
