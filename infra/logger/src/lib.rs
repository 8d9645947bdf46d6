//! # Logger
//!
//! Installs the process-wide `tracing` subscriber: a compact console layer and an
//! optional non-blocking rolling file layer (plain or JSON), filtered by `RUST_LOG`
//! on top of a configured default.
//!
//! The `level` setting accepts either a bare level (`debug`) or a full filter
//! directive (`cadastro=debug,tower_http=info`).
//!
//! ## Example
//!
//! ```rust
//! use cadastro_domain::config::LoggingConfig;
//! use cadastro_logger::Logger;
//!
//! let _logger = Logger::from_config("cadastro", &LoggingConfig::default()).unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use cadastro_domain::config::LoggingConfig;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FILE_SUFFIX: &str = "log";

/// Configures and installs the global subscriber.
#[derive(Debug)]
#[must_use = "The builder must be initialized to install the logger."]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    filter: String,
    directory: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl LoggerBuilder {
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Default filter: a level (`info`) or directives (`cadastro=debug,hyper=warn`).
    /// `RUST_LOG` still takes precedence.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Also writes to rolling files under `directory`, prefixed with the logger name.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// JSON lines in the log files. The console stays human readable.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Installs the subscriber.
    ///
    /// Keep the returned [`Logger`] alive: it owns the file writer's worker guard.
    ///
    /// # Errors
    /// - [`LoggerError::InvalidConfiguration`] for a blank name, a zero `max_files`,
    ///   an unparsable filter, or when neither console nor file output is enabled.
    /// - [`LoggerError::Appender`] when the log directory cannot be used.
    /// - [`LoggerError::Subscriber`] when a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let env_filter = self.env_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match &self.directory {
            Some(directory) => {
                fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Creating {}", directory.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(self.rotation.clone())
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(self.max_files)
                    .build(directory)
                    .context("Building rolling file appender")?;

                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file = layer().with_writer(writer).with_ansi(false);
                layers.push(if self.json { file.json().boxed() } else { file.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "no output enabled: turn on the console or set a directory".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .context("Installing global subscriber")?;

        tracing::debug!(logger = %self.name, file = self.directory.is_some(), "Logger initialized");

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let filter = self.filter.trim();
        if let Ok(level) = LevelFilter::from_str(filter) {
            return Ok(EnvFilter::builder().with_default_directive(level.into()).from_env_lossy());
        }

        let invalid = |e: &dyn std::fmt::Display| LoggerError::InvalidConfiguration {
            message: format!("invalid filter '{filter}': {e}").into(),
            context: None,
        };
        // Validate the configured directives before letting RUST_LOG override them.
        EnvFilter::builder().parse(filter).map_err(|e| invalid(&e))?;
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(env) if !env.trim().is_empty() => Ok(EnvFilter::builder().parse_lossy(env)),
            _ => EnvFilter::builder().parse(filter).map_err(|e| invalid(&e)),
        }
    }
}

/// Handle to the installed logging system.
///
/// Holds the background writer guard; drop it only at shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// The `name` prefixes rolling files (`cadastro.2026-10-19.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            filter: "info".to_owned(),
            directory: None,
            rotation: Rotation::DAILY,
            max_files: 10,
            json: false,
        }
    }

    /// Builder preset from the `[logging]` config section.
    pub fn config_builder(name: impl Into<String>, config: &LoggingConfig) -> LoggerBuilder {
        let builder = Self::builder(name)
            .filter(config.level.clone())
            .max_files(config.max_files)
            .json(config.json);
        match &config.directory {
            Some(directory) => builder.directory(directory.clone()),
            None => builder,
        }
    }

    /// Installs the subscriber described by the `[logging]` config section.
    ///
    /// # Errors
    /// See [`LoggerBuilder::init`].
    pub fn from_config(name: impl Into<String>, config: &LoggingConfig) -> Result<Self, LoggerError> {
        Self::config_builder(name, config).init()
    }

    /// `true` when file output is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
