//! Observability module providing logging setup and pipeline observers.
//!
//! - **Logging**: process-wide `tracing` subscriber configured by [`LoggingConfig`]
//! - **Pipeline observers**: the quiz pipeline reports its progress through an
//!   injected [`PipelineObserver`] instead of calling a global logger, so tests
//!   can capture every event.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use tutor_gateway::observability::{LoggingConfig, LogLevel, LogFormat};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! LoggingConfig::new()
//!     .with_level(LogLevel::Info)
//!     .with_format(LogFormat::Pretty)
//!     .init()?;
//! # Ok(())
//! # }
//! ```

mod logging;
mod observer;

pub use logging::*;
pub use observer::*;
