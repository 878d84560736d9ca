//! Structured logging setup for the pipeline
//!
//! Thin configuration layer over `tracing`. Defaults to JSON output on
//! STDOUT at INFO level; `RUST_LOG` overrides the configured level.
//!
//! # Examples
//!
//! ```no_run
//! use guardrail_core::logging::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let _guard = LogConfig::default().init();
//!
//!     info!("pipeline ready");
//! }
//! ```

use std::io;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};

/// Log level for filtering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Output format for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (default), structured and machine-readable
    Json,
    /// Plain text format
    Plain,
    /// Colored, formatted output for development
    Pretty,
    /// Minimal output
    Compact,
}

/// Output destination for logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
    File(String),
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    /// Include target (module path)
    pub targets: bool,
    /// Include thread IDs
    pub thread_ids: bool,
    /// Enable ANSI colors (for terminal output)
    pub colors: bool,
    /// Custom environment filter (overrides level if set)
    pub env_filter: Option<String>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_targets(mut self, enable: bool) -> Self {
        self.targets = enable;
        self
    }

    pub fn with_thread_ids(mut self, enable: bool) -> Self {
        self.thread_ids = enable;
        self
    }

    pub fn with_colors(mut self, enable: bool) -> Self {
        self.colors = enable;
        self
    }

    /// Set a custom environment filter, e.g. "guardrail=debug"
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Initialize the logging system.
    ///
    /// Returns a guard that must be kept alive for the duration of the
    /// program; dropping it flushes remaining logs.
    pub fn init(self) -> Option<WorkerGuard> {
        let env_filter = if let Some(filter_str) = &self.env_filter {
            EnvFilter::try_new(filter_str)
                .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
        } else {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
        };

        match &self.output {
            LogOutput::Stdout => {
                let (non_blocking, guard) = tracing_appender::non_blocking(io::stdout());
                self.init_with_writer(non_blocking, env_filter);
                Some(guard)
            }
            LogOutput::Stderr => {
                let (non_blocking, guard) = tracing_appender::non_blocking(io::stderr());
                self.init_with_writer(non_blocking, env_filter);
                Some(guard)
            }
            LogOutput::File(path) => {
                let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
                    Ok(file) => file,
                    Err(err) => {
                        eprintln!("failed to open log file {}: {}", path, err);
                        return None;
                    }
                };
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                self.init_with_writer(non_blocking, env_filter);
                Some(guard)
            }
        }
    }

    fn init_with_writer<W>(&self, writer: W, env_filter: EnvFilter)
    where
        W: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Send + Sync + 'static,
    {
        match self.format {
            LogFormat::Json => {
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(self.targets)
                    .with_thread_ids(self.thread_ids);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .init();
            }
            LogFormat::Plain => {
                let layer = fmt::layer()
                    .with_writer(writer)
                    .with_target(self.targets)
                    .with_thread_ids(self.thread_ids)
                    .with_ansi(self.colors);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .init();
            }
            LogFormat::Pretty => {
                let layer = fmt::layer()
                    .pretty()
                    .with_writer(writer)
                    .with_target(self.targets)
                    .with_thread_ids(self.thread_ids)
                    .with_ansi(self.colors);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .init();
            }
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_target(self.targets)
                    .with_thread_ids(self.thread_ids)
                    .with_ansi(self.colors);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(layer)
                    .init();
            }
        }
    }
}

impl Default for LogConfig {
    /// Default configuration: JSON format to STDOUT at INFO level
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            output: LogOutput::Stdout,
            targets: true,
            thread_ids: false,
            colors: false,
            env_filter: None,
        }
    }
}
