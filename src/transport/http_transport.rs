//! HTTP transport implementations.

use crate::errors::{GatewayError, GatewayResult};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP transport abstraction for testability.
///
/// Implementations return the response for every status code; interpreting
/// non-success statuses is up to the calling service. A single call is made
/// per request, without retries.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute an HTTP request
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> GatewayResult<HttpResponse>;
}

/// HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Reqwest-based HTTP transport.
///
/// The underlying client pools connections and is shared by all in-flight
/// requests.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new reqwest transport
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(20)
            .user_agent(concat!("tutor-gateway/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> GatewayResult<HttpResponse> {
        tracing::debug!(method = %method, url = %url, "Outgoing request");

        let mut request = self.client.request(method, url).headers(headers);
        if let Some(body_data) = body {
            request = request.body(body_data);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?;

        tracing::debug!(status = status, bytes = body.len(), "Incoming response");

        Ok(HttpResponse {
            status,
            headers: response_headers,
            body: body.to_vec(),
        })
    }
}
