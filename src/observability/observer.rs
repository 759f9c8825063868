//! Pipeline observers.

use std::fmt;

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Receiving the uploaded document
    Upload,
    /// Turning the document into text
    Extraction,
    /// Calling the generative model
    ModelCall,
    /// Parsing and validating the model output
    Validation,
}

impl Stage {
    /// Returns the stage name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Upload => "upload",
            Stage::Extraction => "extraction",
            Stage::ModelCall => "model_call",
            Stage::Validation => "validation",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a pipeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    /// Debug detail (content samples)
    Debug,
    /// Normal progress
    Info,
    /// Recoverable problem
    Warn,
    /// Failure
    Error,
}

/// A single event reported by the quiz pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineEvent {
    /// Stage the event belongs to
    pub stage: Stage,
    /// Severity
    pub level: EventLevel,
    /// Human readable message
    pub message: String,
}

/// Sink for pipeline events.
///
/// Implementations must not block; the pipeline's result never depends on
/// what an observer does with an event.
pub trait PipelineObserver: Send + Sync {
    /// Record an event
    fn record(&self, event: PipelineEvent);

    /// Record a debug event
    fn debug(&self, stage: Stage, message: String) {
        self.record(PipelineEvent {
            stage,
            level: EventLevel::Debug,
            message,
        });
    }

    /// Record an informational event
    fn info(&self, stage: Stage, message: String) {
        self.record(PipelineEvent {
            stage,
            level: EventLevel::Info,
            message,
        });
    }

    /// Record a warning
    fn warn(&self, stage: Stage, message: String) {
        self.record(PipelineEvent {
            stage,
            level: EventLevel::Warn,
            message,
        });
    }

    /// Record an error
    fn error(&self, stage: Stage, message: String) {
        self.record(PipelineEvent {
            stage,
            level: EventLevel::Error,
            message,
        });
    }
}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn record(&self, event: PipelineEvent) {
        let stage = event.stage.as_str();
        match event.level {
            EventLevel::Debug => tracing::debug!(stage, "{}", event.message),
            EventLevel::Info => tracing::info!(stage, "{}", event.message),
            EventLevel::Warn => tracing::warn!(stage, "{}", event.message),
            EventLevel::Error => tracing::error!(stage, "{}", event.message),
        }
    }
}
