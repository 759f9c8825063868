//! Logging configuration and utilities.
//!
//! Structured logging through the `tracing` crate with selectable output
//! formats. `RUST_LOG` takes precedence over the configured level.

use crate::errors::{GatewayError, GatewayResult};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Process-wide log output settings, read once at startup.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Lowest level written when `RUST_LOG` is unset
    pub level: LogLevel,
    /// Line format
    pub format: LogFormat,
    /// Prefix pretty lines with a timestamp
    pub include_timestamps: bool,
    /// Print the emitting module
    pub include_target: bool,
    /// Print source file and line
    pub include_file_line: bool,
}

/// Minimum severity, parsed from `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including outbound request traces
    Trace,
    /// Pipeline content samples
    Debug,
    /// Stage progress
    Info,
    /// Low-confidence extraction, skipped pages
    Warn,
    /// Failures only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(GatewayError::Configuration {
                message: format!("Unknown log level: {}", other),
            }),
        }
    }
}

/// Line format, parsed from `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Colored multi-field lines
    Pretty,
    /// One JSON object per event
    Json,
    /// Single-line text
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(GatewayError::Configuration {
                message: format!("Unknown log format: {}", other),
            }),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            include_timestamps: true,
            include_target: true,
            include_file_line: false,
        }
    }
}

impl LoggingConfig {
    /// Info level, pretty output with timestamps and targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `LOG_LEVEL` and `LOG_FORMAT`, keeping defaults for unset values.
    pub fn from_env() -> GatewayResult<Self> {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.level = level.parse()?;
        }
        if let Ok(format) = std::env::var("LOG_FORMAT") {
            config.format = format.parse()?;
        }
        Ok(config)
    }

    /// Level used when `RUST_LOG` is unset
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle timestamps (pretty format only)
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    /// Toggle the module target
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Toggle file and line
    pub fn with_file_line(mut self, include: bool) -> Self {
        self.include_file_line = include;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(Level::from(self.level).as_str().to_ascii_lowercase())
        })
    }

    /// Install the global subscriber.
    ///
    /// Fails with [`GatewayError::Configuration`] when one is already set.
    pub fn init(self) -> GatewayResult<()> {
        let filter = self.env_filter();
        let registry = tracing_subscriber::registry().with(filter);

        let result = match (self.format, self.include_timestamps) {
            (LogFormat::Pretty, true) => registry
                .with(
                    fmt::layer()
                        .with_ansi(true)
                        .with_target(self.include_target)
                        .with_file(self.include_file_line)
                        .with_line_number(self.include_file_line),
                )
                .try_init(),
            (LogFormat::Pretty, false) => registry
                .with(
                    fmt::layer()
                        .without_time()
                        .with_ansi(true)
                        .with_target(self.include_target)
                        .with_file(self.include_file_line)
                        .with_line_number(self.include_file_line),
                )
                .try_init(),
            (LogFormat::Json, _) => registry
                .with(fmt::layer().json().with_target(self.include_target))
                .try_init(),
            (LogFormat::Compact, _) => registry
                .with(fmt::layer().compact().with_target(self.include_target))
                .try_init(),
        };

        result.map_err(|e| GatewayError::Configuration {
            message: format!("Failed to initialize logging: {}", e),
        })
    }
}

/// Shortens `text` to at most `max_chars` characters for log output.
pub fn truncate_for_log(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
