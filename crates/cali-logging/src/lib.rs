//! Structured logging for the Bigger Than Cali server
//!
//! Console output is JSON lines by default so logs can be shipped as-is;
//! [`LogConfig::development`] switches to human-readable output. An optional
//! file sink writes JSONL through `tracing-appender` with rotation.
//!
//! # Quick Start
//!
//! ```ignore
//! use cali_logging::{CaliSubscriberBuilder, LogConfig};
//!
//! // JSONL to console
//! let _guard = CaliSubscriberBuilder::new().init();
//!
//! // Pretty output while developing
//! let _guard = CaliSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```
//!
//! `RUST_LOG` always takes precedence over the configured default level.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::fs::{self, File};
use std::sync::Once;

use thiserror::Error;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LogError {
    /// Log directory or file could not be created
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rolling appender rejected its configuration
    #[error("Log appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// A global subscriber is already installed
    #[error("Subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type alias for logging setup
pub type LogResult<T> = Result<T, LogError>;

/// Builder for configuring and initializing the logging subscriber
pub struct CaliSubscriberBuilder {
    config: LogConfig,
}

impl CaliSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    ///
    /// Default: JSONL output to console
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Switch console output between pretty and JSONL
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self.config.console.ansi = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Try to initialize the subscriber globally
    ///
    /// The returned guard flushes the file writer on drop and must be kept
    /// alive for the life of the program.
    pub fn try_init(self) -> LogResult<Option<WorkerGuard>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let console = &self.config.console;
        let jsonl = &self.config.jsonl;

        let pretty_layer = (console.enabled && console.pretty).then(|| {
            fmt::layer()
                .with_ansi(console.ansi)
                .with_target(true)
        });

        let json_layer = (console.enabled && !console.pretty).then(|| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(jsonl.include_spans)
                .flatten_event(jsonl.flatten_events)
                .with_file(jsonl.include_location)
                .with_line_number(jsonl.include_location)
        });

        let (file_layer, guard) = match &self.config.file {
            Some(file_config) => {
                let (writer, guard) = file_writer(file_config)?;
                let layer = fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(jsonl.include_spans)
                    .flatten_event(jsonl.flatten_events)
                    .with_file(jsonl.include_location)
                    .with_line_number(jsonl.include_location)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        Registry::default()
            .with(env_filter)
            .with(pretty_layer)
            .with(json_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))?;

        Ok(guard)
    }

    /// Initialize the subscriber globally
    ///
    /// Setup failures are reported on stderr rather than aborting; the
    /// server is still useful without logs.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }
}

impl Default for CaliSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the non-blocking writer for file output
///
/// `Never` truncates a single `{prefix}.log`; the other strategies append to
/// rolling `{prefix}.{date}.log` files.
fn file_writer(config: &FileConfig) -> LogResult<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&config.directory)?;

    let rotation = match config.rotation {
        RotationStrategy::Never => {
            let path = config.directory.join(format!("{}.log", config.prefix));
            let file = File::create(path)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(&config.prefix)
        .filename_suffix("log");
    if let Some(max) = config.max_files {
        builder = builder.max_log_files(max);
    }
    let appender = builder.build(&config.directory)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize logging for tests
///
/// Safe to call from every test: only the first call installs a subscriber.
pub fn init_testing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if let Err(e) = CaliSubscriberBuilder::new()
            .with_config(LogConfig::testing())
            .try_init()
        {
            eprintln!("Warning: test logging not installed: {}", e);
        }
    });
}
