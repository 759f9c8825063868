//! Messages service implementation

use super::types::{ApiErrorResponse, CreateMessageRequest, Message};
use super::validation::validate_create_message_request;
use crate::auth::AuthManager;
use crate::errors::{GatewayError, GatewayResult};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Messages service trait for testability
#[async_trait]
pub trait MessagesService: Send + Sync {
    /// Create a message
    async fn create(&self, request: CreateMessageRequest) -> GatewayResult<Message>;
}

/// Implementation of the Messages service
pub struct MessagesServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
}

impl MessagesServiceImpl {
    /// Create a new Messages service
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

    /// Parse API error from response
    fn parse_api_error(&self, status: u16, body: &[u8]) -> GatewayError {
        let message = match serde_json::from_slice::<ApiErrorResponse>(body) {
            Ok(error_response) => format!(
                "{}: {}",
                error_response.error.error_type, error_response.error.message
            ),
            Err(_) => String::from_utf8_lossy(body).to_string(),
        };
        GatewayError::Upstream { status, message }
    }
}

#[async_trait]
impl MessagesService for MessagesServiceImpl {
    async fn create(&self, request: CreateMessageRequest) -> GatewayResult<Message> {
        validate_create_message_request(&request)?;

        let url = self.base_url.join("/v1/messages")?;

        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers)?;

        let body = serde_json::to_vec(&request)?;

        let response = self
            .transport
            .execute(Method::POST, url, headers, Some(body))
            .await?;

        if response.status == 200 {
            Ok(serde_json::from_slice::<Message>(&response.body)?)
        } else {
            let error = self.parse_api_error(response.status, &response.body);
            tracing::error!(status = response.status, error = %error, "Messages API error");
            Err(error)
        }
    }
}
