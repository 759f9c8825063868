//! Test fixtures and helper data.

use crate::services::messages::{ContentBlock, Message, Role, StopReason, Usage};
use serde_json::{json, Value};

/// Sample model ID
pub const TEST_MODEL: &str = "claude-3-5-sonnet-20240620";

/// A model reply containing a valid five-question quiz
pub fn valid_quiz_json() -> Value {
    json!({
        "questions": [
            {
                "id": 1,
                "question": "What is the capital of France?",
                "options": ["London", "Paris", "Madrid", "Rome"],
                "correctAnswer": "Paris"
            },
            {
                "id": 2,
                "question": "Which planet is known as the Red Planet?",
                "options": ["Venus", "Mars", "Jupiter", "Saturn"],
                "correctAnswer": "Mars"
            },
            {
                "id": 3,
                "question": "What is 2 + 2?",
                "options": ["3", "4", "5", "22"],
                "correctAnswer": "4"
            },
            {
                "id": 4,
                "question": "Which gas do plants absorb?",
                "options": ["Oxygen", "Nitrogen", "Carbon dioxide", "Helium"],
                "correctAnswer": "Carbon dioxide"
            },
            {
                "id": 5,
                "question": "Who wrote Hamlet?",
                "options": ["Dickens", "Austen", "Shakespeare", "Tolstoy"],
                "correctAnswer": "Shakespeare"
            }
        ]
    })
}

/// [`valid_quiz_json`] serialized to a string
pub fn valid_quiz_text() -> String {
    valid_quiz_json().to_string()
}

/// A Messages API response whose only block is `text`
pub fn message_with_text(text: &str) -> Message {
    Message {
        id: "msg_01XFDUDYJgAACzvnptvVoYEL".to_string(),
        message_type: "message".to_string(),
        role: Role::Assistant,
        content: vec![ContentBlock::Text {
            text: text.to_string(),
        }],
        model: TEST_MODEL.to_string(),
        stop_reason: Some(StopReason::EndTurn),
        usage: Usage {
            input_tokens: 10,
            output_tokens: 20,
        },
    }
}

/// A Messages API response without content blocks
pub fn empty_message() -> Message {
    Message {
        content: Vec::new(),
        ..message_with_text("")
    }
}

/// Create a sample error response JSON
pub fn sample_error_response(error_type: &str, message: &str) -> Value {
    json!({
        "type": "error",
        "error": {
            "type": error_type,
            "message": message
        }
    })
}
