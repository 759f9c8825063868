//! Audio service implementation

use super::types::{SpeechRequest, TranscriptionRequest};
use crate::auth::AuthManager;
use crate::errors::{GatewayError, GatewayResult};
use crate::transport::{HttpResponse, HttpTransport, MultipartForm};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, HeaderValue, Method};
use std::sync::Arc;
use url::Url;

/// Audio service trait for testability
#[async_trait]
pub trait AudioService: Send + Sync {
    /// Transcribe an audio file, returning the upstream JSON unchanged
    async fn transcribe(&self, request: TranscriptionRequest) -> GatewayResult<serde_json::Value>;

    /// Synthesize speech, returning MPEG audio
    async fn speech(&self, request: SpeechRequest) -> GatewayResult<Bytes>;
}

/// Implementation of the audio service
pub struct AudioServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
}

impl AudioServiceImpl {
    /// Create a new audio service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
        }
    }

    fn check_status(&self, response: &HttpResponse) -> GatewayResult<()> {
        if response.is_success() {
            return Ok(());
        }
        let message = String::from_utf8_lossy(&response.body).to_string();
        tracing::error!(status = response.status, body = %message, "Audio API error");
        Err(GatewayError::Upstream {
            status: response.status,
            message,
        })
    }
}

#[async_trait]
impl AudioService for AudioServiceImpl {
    async fn transcribe(&self, request: TranscriptionRequest) -> GatewayResult<serde_json::Value> {
        let url = self.base_url.join("/v1/audio/transcriptions")?;

        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers)?;

        let (content_type, body) = MultipartForm::new()
            .file("file", &request.filename, &request.content_type, request.file)
            .text("model", &request.model)
            .build();
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_str(&content_type).map_err(|e| GatewayError::Internal {
                message: format!("Invalid multipart content type: {}", e),
            })?,
        );

        let response = self
            .transport
            .execute(Method::POST, url, headers, Some(body))
            .await?;
        self.check_status(&response)?;

        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn speech(&self, request: SpeechRequest) -> GatewayResult<Bytes> {
        let url = self.base_url.join("/v1/audio/speech")?;

        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers)?;
        headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let body = serde_json::to_vec(&request)?;

        let response = self
            .transport
            .execute(Method::POST, url, headers, Some(body))
            .await?;
        self.check_status(&response)?;

        Ok(Bytes::from(response.body))
    }
}
