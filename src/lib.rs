//! # Tutor Gateway
//!
//! HTTP gateway that sits between a tutoring web client and hosted AI
//! services.
//!
//! ## Features
//!
//! - Quiz generation from uploaded text or PDF documents, validated against a
//!   fixed five-question schema
//! - Tutor chat pass-through to the Anthropic Messages API
//! - Speech-to-text and text-to-speech pass-through to the OpenAI audio APIs
//! - Secure credential handling with `SecretString`
//! - Structured logging with `tracing`, injectable pipeline observers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tutor_gateway::{build_router, AppState, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GatewayConfig::from_env()?;
//!     let state = AppState::from_config(&config)?;
//!     let app = build_router(state, &config);
//!
//!     let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `config` - Configuration types and builder
//! - `auth` - Outbound authentication headers
//! - `transport` - HTTP transport layer and multipart encoding
//! - `errors` - Error types and HTTP status classification
//! - `observability` - Logging setup and pipeline observers
//! - `services` - Messages, audio and quiz services
//! - `server` - Inbound HTTP routing
//! - `mocks` - Mock implementations for testing
//! - `fixtures` - Test fixtures and helper data

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod errors;
pub mod observability;
pub mod server;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

pub use auth::{AnthropicAuth, AuthManager, BearerAuth};
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use errors::{GatewayError, GatewayResult};
pub use observability::{
    LogFormat, LogLevel, LoggingConfig, PipelineEvent, PipelineObserver, Stage, TracingObserver,
};
pub use server::{build_router, AppState};
pub use services::audio::{AudioService, AudioServiceImpl, SpeechRequest, TranscriptionRequest};
pub use services::messages::{
    ContentBlock, CreateMessageRequest, Message, MessageParam, MessagesService,
    MessagesServiceImpl, Role,
};
pub use services::quiz::{
    ClaudeTextModel, ExtractedText, LopdfPageSource, ModelPrompt, PdfPageSource, Quiz,
    QuizPipeline, QuizQuestion, TextModel, UploadedDocument,
};
pub use transport::{HttpResponse, HttpTransport, MultipartForm, ReqwestTransport};

/// The default Anthropic API base URL
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// The default OpenAI API base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// The default Anthropic API version
pub const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";

/// The default model used for quiz generation
pub const DEFAULT_QUIZ_MODEL: &str = "claude-3-5-sonnet-20240620";

/// The default model used for tutor chat
pub const DEFAULT_CHAT_MODEL: &str = "claude-3-7-sonnet-20250219";

/// The default outbound request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The default listen address
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8001";

/// Origins allowed by CORS when none are configured
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];
