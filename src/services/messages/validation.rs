//! Request validation for the Messages API

use super::types::{CreateMessageRequest, Role};
use crate::errors::{GatewayError, GatewayResult};

fn invalid(message: impl Into<String>) -> GatewayError {
    GatewayError::BadRequest {
        message: message.into(),
    }
}

/// Validate a create message request
pub fn validate_create_message_request(request: &CreateMessageRequest) -> GatewayResult<()> {
    if request.model.is_empty() {
        return Err(invalid("model is required"));
    }

    if request.max_tokens == 0 {
        return Err(invalid("max_tokens must be greater than 0"));
    }

    if request.messages.is_empty() {
        return Err(invalid("messages must not be empty"));
    }

    if let Some(first) = request.messages.first() {
        if first.role != Role::User {
            return Err(invalid("first message must be from user"));
        }
    }

    for (i, message) in request.messages.iter().enumerate() {
        if message.content.trim().is_empty() {
            return Err(invalid(format!("message at index {} has empty content", i)));
        }
    }

    if let Some(temperature) = request.temperature {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(invalid("temperature must be between 0.0 and 1.0"));
        }
    }

    Ok(())
}
