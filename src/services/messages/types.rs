//! Type definitions for the Messages API

use serde::{Deserialize, Serialize};

/// A complete message response from the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identifier
    pub id: String,
    /// Object type, always `message`
    #[serde(rename = "type")]
    pub message_type: String,
    /// Author of the message
    pub role: Role,
    /// Content blocks in order
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Model that produced the message
    pub model: String,
    /// Why generation stopped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    /// Token counts
    #[serde(default)]
    pub usage: Usage,
}

impl Message {
    /// Returns the text of the first text block, if any
    pub fn first_text(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Other => None,
        })
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The student
    User,
    /// The model
    Assistant,
}

/// Stop reason for message completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of the turn
    EndTurn,
    /// Hit `max_tokens`
    MaxTokens,
    /// Hit a stop sequence
    StopSequence,
    /// Stopped to call a tool
    ToolUse,
    /// Any reason not listed above
    #[serde(other)]
    Unknown,
}

/// Token usage information
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub input_tokens: u32,
    /// Tokens generated
    #[serde(default)]
    pub output_tokens: u32,
}

/// Content block in a message.
///
/// Only text is consumed here; any other block type is kept as `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text
    Text {
        /// The text
        text: String,
    },
    /// Any non-text block
    #[serde(other)]
    Other,
}

/// A message in the request conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageParam {
    /// Author of the turn
    pub role: Role,
    /// Text of the turn
    pub content: String,
}

impl MessageParam {
    /// Creates a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request body for `POST /v1/messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateMessageRequest {
    /// Model identifier
    pub model: String,
    /// Token ceiling for the reply
    pub max_tokens: u32,
    /// Conversation so far, oldest first
    pub messages: Vec<MessageParam>,
    /// System prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl CreateMessageRequest {
    /// Creates a request with the required fields
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<MessageParam>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages,
            system: None,
            temperature: None,
        }
    }

    /// Sets the system prompt
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Sets the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// API error response from Anthropic
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Envelope type, always `error`
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error details
    pub error: ApiErrorDetail,
}

/// Error details inside [`ApiErrorResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Error kind, such as `rate_limit_error`
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human-readable message
    pub message: String,
}
