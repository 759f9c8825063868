//! Generative text model seam

use super::prompt::ModelPrompt;
use crate::errors::{GatewayError, GatewayResult};
use crate::services::messages::{CreateMessageRequest, MessageParam, MessagesService};
use async_trait::async_trait;
use std::sync::Arc;

/// A model that turns a prompt into raw text.
///
/// Implementations report every failure, including a timeout or an empty
/// reply, as [`GatewayError::ModelRequest`].
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Run one completion
    async fn invoke(&self, prompt: &ModelPrompt) -> GatewayResult<String>;
}

/// [`TextModel`] backed by the Anthropic Messages API.
pub struct ClaudeTextModel {
    messages: Arc<dyn MessagesService>,
    model: String,
}

impl ClaudeTextModel {
    /// Create a model adapter for `model`
    pub fn new(messages: Arc<dyn MessagesService>, model: impl Into<String>) -> Self {
        Self {
            messages,
            model: model.into(),
        }
    }
}

#[async_trait]
impl TextModel for ClaudeTextModel {
    async fn invoke(&self, prompt: &ModelPrompt) -> GatewayResult<String> {
        let request = CreateMessageRequest::new(
            self.model.clone(),
            prompt.max_tokens,
            vec![MessageParam::user(prompt.user.clone())],
        )
        .with_system(prompt.system.clone())
        .with_temperature(prompt.temperature);

        let message = tokio::time::timeout(prompt.timeout, self.messages.create(request))
            .await
            .map_err(|_| GatewayError::ModelRequest {
                message: format!("model call timed out after {:?}", prompt.timeout),
            })?
            .map_err(|e| GatewayError::ModelRequest {
                message: e.to_string(),
            })?;

        match message.first_text() {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(GatewayError::ModelRequest {
                message: "no content in model response".to_string(),
            }),
        }
    }
}
