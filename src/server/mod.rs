//! Inbound HTTP surface
//!
//! An `axum` router exposing the quiz endpoint plus the tutor chat and audio
//! pass-through endpoints. Errors are rendered as `{"detail": message}` with
//! the status from [`GatewayError::status_code`].

mod handlers;
mod types;


pub use handlers::{CHAT_MAX_TOKENS, TUTOR_SYSTEM_PROMPT};
pub use types::{
    ChatRequest, ChatResponse, ChatTurn, ErrorBody, KeyStatus, RootResponse, RouteInfo,
};

use crate::auth::{AnthropicAuth, BearerAuth};
use crate::config::GatewayConfig;
use crate::errors::{GatewayError, GatewayResult};
use crate::observability::{PipelineObserver, TracingObserver};
use crate::services::audio::{AudioService, AudioServiceImpl};
use crate::services::messages::{MessagesService, MessagesServiceImpl};
use crate::services::quiz::{ClaudeTextModel, QuizPipeline};
use crate::transport::{HttpTransport, ReqwestTransport};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use url::Url;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Routes served by [`build_router`], as listed by `GET /`
pub const ROUTE_TABLE: &[(&str, &[&str])] = &[
    ("/", &["GET"]),
    ("/api/test-config", &["GET"]),
    ("/api/quiz", &["POST"]),
    ("/api/quiz/", &["POST"]),
    ("/api/chat", &["POST"]),
    ("/api/transcribe", &["POST"]),
    ("/api/text-to-speech", &["POST"]),
];

/// Shared state of the HTTP handlers
pub struct AppState {
    quiz: QuizPipeline,
    messages: Arc<dyn MessagesService>,
    audio: Option<Arc<dyn AudioService>>,
    observer: Arc<dyn PipelineObserver>,
    chat_model: String,
    key_status: KeyStatus,
}

impl AppState {
    /// Create state from already built services
    pub fn new(
        quiz: QuizPipeline,
        messages: Arc<dyn MessagesService>,
        chat_model: impl Into<String>,
    ) -> Self {
        Self {
            quiz,
            messages,
            audio: None,
            observer: Arc::new(TracingObserver),
            chat_model: chat_model.into(),
            key_status: KeyStatus {
                openai_key_set: false,
                anthropic_key_set: true,
            },
        }
    }

    /// Enable the audio endpoints
    pub fn with_audio(mut self, audio: Arc<dyn AudioService>) -> Self {
        self.audio = Some(audio);
        self.key_status.openai_key_set = true;
        self
    }

    /// Report quiz pipeline events to `observer` instead of `tracing`
    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Build every outbound client from `config`
    pub fn from_config(config: &GatewayConfig) -> GatewayResult<Self> {
        let transport: Arc<dyn HttpTransport> =
            Arc::new(ReqwestTransport::new(config.request_timeout)?);

        let anthropic_auth = Arc::new(AnthropicAuth::new(
            config.anthropic_api_key.clone(),
            config.anthropic_version.clone(),
        ));
        let messages: Arc<dyn MessagesService> = Arc::new(MessagesServiceImpl::new(
            transport.clone(),
            anthropic_auth,
            Url::parse(&config.anthropic_base_url)?,
        ));

        let model = Arc::new(ClaudeTextModel::new(messages.clone(), config.quiz_model.clone()));
        let quiz = QuizPipeline::new(model).with_model_timeout(config.request_timeout);

        let mut state = Self::new(quiz, messages, config.chat_model.clone());
        state.key_status.anthropic_key_set = !config.anthropic_api_key.expose_secret().is_empty();

        match &config.openai_api_key {
            Some(key) if config.has_openai_key() => {
                let audio = AudioServiceImpl::new(
                    transport,
                    Arc::new(BearerAuth::new(key.clone())),
                    Url::parse(&config.openai_base_url)?,
                );
                state = state.with_audio(Arc::new(audio));
            }
            _ => tracing::warn!("OPENAI_API_KEY is not set; audio endpoints are disabled"),
        }

        Ok(state)
    }

    fn audio(&self) -> GatewayResult<Arc<dyn AudioService>> {
        self.audio.clone().ok_or_else(|| GatewayError::Configuration {
            message: "OpenAI API key is not configured".to_string(),
        })
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
}

/// Build the application router
pub fn build_router(state: AppState, config: &GatewayConfig) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/test-config", get(handlers::test_config))
        .route("/api/quiz", post(handlers::generate_quiz))
        .route("/api/quiz/", post(handlers::generate_quiz))
        .route("/api/chat", post(handlers::chat))
        .route("/api/transcribe", post(handlers::transcribe))
        .route("/api/text-to-speech", post(handlers::text_to_speech))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
