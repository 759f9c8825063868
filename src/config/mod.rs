//! Configuration types for the gateway.

use crate::errors::{GatewayError, GatewayResult};
use crate::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_ANTHROPIC_BASE_URL, DEFAULT_ANTHROPIC_VERSION,
    DEFAULT_BIND_ADDRESS, DEFAULT_CHAT_MODEL, DEFAULT_OPENAI_BASE_URL, DEFAULT_QUIZ_MODEL,
    DEFAULT_TIMEOUT_SECS,
};
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;

/// Configuration for the gateway.
#[derive(Clone)]
pub struct GatewayConfig {
    /// API key for the Anthropic Messages API
    pub anthropic_api_key: SecretString,
    /// API key for the OpenAI audio APIs; audio endpoints fail without it
    pub openai_api_key: Option<SecretString>,
    /// Base URL for the Anthropic API
    pub anthropic_base_url: String,
    /// Base URL for the OpenAI API
    pub openai_base_url: String,
    /// Anthropic API version header value
    pub anthropic_version: String,
    /// Model used for quiz generation
    pub quiz_model: String,
    /// Model used for tutor chat
    pub chat_model: String,
    /// Outbound request timeout
    pub request_timeout: Duration,
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Origins allowed by CORS
    pub allowed_origins: Vec<String>,
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("anthropic_api_key", &"[REDACTED]")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("anthropic_base_url", &self.anthropic_base_url)
            .field("openai_base_url", &self.openai_base_url)
            .field("anthropic_version", &self.anthropic_version)
            .field("quiz_model", &self.quiz_model)
            .field("chat_model", &self.chat_model)
            .field("request_timeout", &self.request_timeout)
            .field("bind_address", &self.bind_address)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl GatewayConfig {
    /// Creates a new configuration builder
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Creates a configuration from environment variables.
    ///
    /// `ANTHROPIC_API_KEY` is required; everything else falls back to defaults.
    pub fn from_env() -> GatewayResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates a configuration from an arbitrary variable lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> GatewayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("ANTHROPIC_API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GatewayError::Configuration {
                message: "ANTHROPIC_API_KEY environment variable not set".to_string(),
            })?;

        let mut builder = GatewayConfig::builder().anthropic_api_key(SecretString::new(api_key));

        if let Some(key) = lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()) {
            builder = builder.openai_api_key(SecretString::new(key));
        }
        if let Some(url) = lookup("ANTHROPIC_BASE_URL") {
            builder = builder.anthropic_base_url(url);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL") {
            builder = builder.openai_base_url(url);
        }
        if let Some(version) = lookup("ANTHROPIC_VERSION") {
            builder = builder.anthropic_version(version);
        }
        if let Some(model) = lookup("QUIZ_MODEL") {
            builder = builder.quiz_model(model);
        }
        if let Some(model) = lookup("CHAT_MODEL") {
            builder = builder.chat_model(model);
        }
        if let Some(raw) = lookup("REQUEST_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| GatewayError::Configuration {
                message: format!("REQUEST_TIMEOUT_SECS is not a number: {}", raw),
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            builder = builder.bind_address(addr);
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            builder = builder.allowed_origins(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }

        builder.build()
    }

    /// Returns true if a non-empty OpenAI key is configured
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().is_empty())
    }
}

/// Loads `.env` from the working directory or one of its parents.
///
/// A missing file is fine; any other failure is handed back so it can be
/// reported once logging is up.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    unless_missing(dotenvy::dotenv().map(|_| ()))
}

fn unless_missing(result: dotenvy::Result<()>) -> Option<dotenvy::Error> {
    match result {
        Ok(()) => None,
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => Some(e),
    }
}

/// Builder for GatewayConfig
#[derive(Default)]
pub struct GatewayConfigBuilder {
    anthropic_api_key: Option<SecretString>,
    openai_api_key: Option<SecretString>,
    anthropic_base_url: Option<String>,
    openai_base_url: Option<String>,
    anthropic_version: Option<String>,
    quiz_model: Option<String>,
    chat_model: Option<String>,
    request_timeout: Option<Duration>,
    bind_address: Option<String>,
    allowed_origins: Option<Vec<String>>,
}

impl GatewayConfigBuilder {
    /// Sets the Anthropic API key
    pub fn anthropic_api_key(mut self, api_key: SecretString) -> Self {
        self.anthropic_api_key = Some(api_key);
        self
    }

    /// Sets the OpenAI API key
    pub fn openai_api_key(mut self, api_key: SecretString) -> Self {
        self.openai_api_key = Some(api_key);
        self
    }

    /// Sets the Anthropic base URL
    pub fn anthropic_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.anthropic_base_url = Some(base_url.into());
        self
    }

    /// Sets the OpenAI base URL
    pub fn openai_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_base_url = Some(base_url.into());
        self
    }

    /// Sets the Anthropic API version
    pub fn anthropic_version(mut self, version: impl Into<String>) -> Self {
        self.anthropic_version = Some(version.into());
        self
    }

    /// Sets the quiz model
    pub fn quiz_model(mut self, model: impl Into<String>) -> Self {
        self.quiz_model = Some(model.into());
        self
    }

    /// Sets the chat model
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = Some(model.into());
        self
    }

    /// Sets the outbound request timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sets the listen address
    pub fn bind_address(mut self, addr: impl Into<String>) -> Self {
        self.bind_address = Some(addr.into());
        self
    }

    /// Sets the CORS origins
    pub fn allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = Some(origins);
        self
    }

    /// Builds the configuration
    pub fn build(self) -> GatewayResult<GatewayConfig> {
        let anthropic_api_key = self
            .anthropic_api_key
            .ok_or_else(|| GatewayError::Configuration {
                message: "Anthropic API key is required".to_string(),
            })?;

        let request_timeout = self
            .request_timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if request_timeout.is_zero() {
            return Err(GatewayError::Configuration {
                message: "Request timeout must be greater than zero".to_string(),
            });
        }

        let anthropic_base_url = self
            .anthropic_base_url
            .unwrap_or_else(|| DEFAULT_ANTHROPIC_BASE_URL.to_string());
        let openai_base_url = self
            .openai_base_url
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());
        url::Url::parse(&anthropic_base_url)?;
        url::Url::parse(&openai_base_url)?;

        Ok(GatewayConfig {
            anthropic_api_key,
            openai_api_key: self.openai_api_key,
            anthropic_base_url,
            openai_base_url,
            anthropic_version: self
                .anthropic_version
                .unwrap_or_else(|| DEFAULT_ANTHROPIC_VERSION.to_string()),
            quiz_model: self
                .quiz_model
                .unwrap_or_else(|| DEFAULT_QUIZ_MODEL.to_string()),
            chat_model: self
                .chat_model
                .unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            request_timeout,
            bind_address: self
                .bind_address
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            allowed_origins: self.allowed_origins.unwrap_or_else(|| {
                DEFAULT_ALLOWED_ORIGINS
                    .iter()
                    .map(|origin| origin.to_string())
                    .collect()
            }),
        })
    }
}
