//! # Logger
//!
//! Installs the global `tracing` subscriber for a host embedding the challenge modes.
//!
//! Output goes to the console, to a daily log file, or to both. The file can be
//! written as JSON lines for log shippers; the console always stays readable.
//!
//! The challenge rules log under the `challenge_modes` target, so a filter of
//! `challenge_modes=debug` (builder or `RUST_LOG`) shows every veto and reward grant.
//!
//! ## Example
//!
//! ```rust
//! # use cmodes_logger::Logger;
//!
//! let _logger = Logger::builder()
//!     .name("realm")
//!     .level_str("debug")
//!     .unwrap()
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Daily files older than a week are removed by the appender.
const KEPT_LOG_FILES: usize = 7;
const LOG_FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

#[derive(Debug)]
struct Output {
    console: bool,
    directory: Option<PathBuf>,
    json: bool,
    level: LevelFilter,
    filter: Option<String>,
}

impl Default for Output {
    fn default() -> Self {
        Self { console: true, directory: None, json: false, level: LevelFilter::INFO, filter: None }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Collects the output settings. [`LoggerBuilder::init`] needs a name first; it
/// prefixes the log files.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    output: Output,
    name: N,
}

impl LoggerBuilder<NoName> {
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { output: self.output, name: WithName(name.into()) }
    }
}

impl LoggerBuilder<WithName> {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.output.level = level;
        self
    }

    /// Level as written in a config file: `"info"`, `" Debug "`, `"off"`.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an unknown level name.
    pub fn level_str(self, level: &str) -> Result<Self, LoggerError> {
        let parsed = LevelFilter::from_str(level.trim()).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Unknown log level '{level}': {e}").into(),
            context: Some("Logging.Level".into()),
        })?;
        Ok(self.level(parsed))
    }

    /// `EnvFilter` directives applied on top of the level, e.g. `challenge_modes=debug`.
    /// They are parsed in [`LoggerBuilder::init`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.output.filter = Some(filter.into());
        self
    }

    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.output.console = enabled;
        self
    }

    /// Directory of the daily log files. Created on init when missing.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, directory: impl Into<PathBuf>) -> Self {
        self.output.directory = Some(directory.into());
        self
    }

    /// JSON lines in the log file. Has no effect without [`LoggerBuilder::path`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.output.json = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// Keep the returned [`Logger`] until shutdown; dropping it stops the file writer.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`]: blank name, bad filter, or neither
    ///   console nor file output.
    /// * [`LoggerError::Internal`] / [`LoggerError::Appender`]: the log directory
    ///   cannot be prepared.
    /// * [`LoggerError::Subscriber`]: a global subscriber is already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let Self { output, name: WithName(name) } = self;
        if name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if !output.console && output.directory.is_none() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Neither console nor file output is enabled".into(),
                context: None,
            });
        }

        let filter = env_filter(output.level, output.filter.as_deref())?;

        let mut layers = Vec::with_capacity(2);
        if output.console {
            layers.push(fmt::layer().compact().boxed());
        }
        let guard = match &output.directory {
            Some(directory) => {
                let (layer, guard) = file_layer(directory, &name, output.json)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// Keeps the background file writer running.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { output: Output::default(), name: NoName }
    }

    /// Present when file output is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!(target: "challenge_modes", "flushing log file");
        }
    }
}

fn env_filter(level: LevelFilter, directives: Option<&str>) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    match directives {
        None => Ok(builder.from_env_lossy()),
        Some(directives) => builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
            message: format!("Invalid env filter '{directives}': {e}").into(),
            context: Some("Logging.Filter".into()),
        }),
    }
}

fn file_layer<S>(directory: &Path, name: &str, json: bool) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fs::create_dir_all(directory).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("Failed to create log directory {}", directory.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(KEPT_LOG_FILES)
        .build(directory)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}
