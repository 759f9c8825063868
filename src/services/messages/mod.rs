//! Messages API service
//!
//! Creates single, non-streaming messages with Claude. Used by the tutor chat
//! endpoint and, through [`crate::services::quiz::ClaudeTextModel`], by the quiz
//! pipeline.

mod service;
mod types;
mod validation;


pub use service::{MessagesService, MessagesServiceImpl};
pub use types::{
    ApiErrorDetail, ApiErrorResponse, ContentBlock, CreateMessageRequest, Message, MessageParam,
    Role, StopReason, Usage,
};
pub use validation::validate_create_message_request;
