//! Authentication headers for outbound requests.

use crate::errors::{GatewayError, GatewayResult};
use http::{HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Authentication manager trait
pub trait AuthManager: Send + Sync {
    /// Add authentication headers to the request
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> GatewayResult<()>;
}

fn header_value(value: &str, what: &str) -> GatewayResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| GatewayError::Configuration {
        message: format!("{} contains characters not allowed in a header", what),
    })
}

/// Anthropic key-and-version authentication
pub struct AnthropicAuth {
    api_key: SecretString,
    api_version: String,
}

impl AnthropicAuth {
    /// Create a new Anthropic authentication manager
    pub fn new(api_key: SecretString, api_version: impl Into<String>) -> Self {
        Self {
            api_key,
            api_version: api_version.into(),
        }
    }
}

impl AuthManager for AnthropicAuth {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> GatewayResult<()> {
        let mut key = header_value(self.api_key.expose_secret(), "API key")?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static("x-api-key"), key);

        headers.insert(
            HeaderName::from_static("anthropic-version"),
            header_value(&self.api_version, "API version")?,
        );

        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        Ok(())
    }
}

/// Bearer token authentication (OpenAI)
pub struct BearerAuth {
    token: SecretString,
}

impl BearerAuth {
    /// Create a new bearer authentication manager
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}

impl AuthManager for BearerAuth {
    fn add_auth_headers(&self, headers: &mut HeaderMap) -> GatewayResult<()> {
        let mut value = header_value(
            &format!("Bearer {}", self.token.expose_secret()),
            "API key",
        )?;
        value.set_sensitive(true);
        headers.insert(http::header::AUTHORIZATION, value);
        Ok(())
    }
}
