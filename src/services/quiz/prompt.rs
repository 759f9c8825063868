//! Prompt construction for quiz generation

use super::types::{ExtractedText, OPTION_COUNT, QUESTION_COUNT};
use std::time::Duration;

/// Token ceiling for a quiz reply
pub const QUIZ_MAX_TOKENS: u32 = 2000;

/// Sampling temperature for quiz generation
pub const QUIZ_TEMPERATURE: f32 = 0.2;

/// System instruction fixing the model's role
pub const SYSTEM_PROMPT: &str = "You are a quiz generator that creates multiple choice questions \
based on provided content. You must respond with a valid JSON object containing exactly 5 questions.";

const EXAMPLE_SHAPE: &str = r#"{
    "questions": [
        {
            "id": 1,
            "question": "Question text",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correctAnswer": "The correct option (must be exactly one of the options)"
        }
    ]
}"#;

/// Everything a [`super::TextModel`] needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPrompt {
    /// System instruction
    pub system: String,
    /// User message
    pub user: String,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Hard limit for the whole call
    pub timeout: Duration,
}

impl ModelPrompt {
    /// Builds the quiz prompt for `text`
    pub fn for_quiz(text: &ExtractedText, timeout: Duration) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: build_user_prompt(text.as_str()),
            max_tokens: QUIZ_MAX_TOKENS,
            temperature: QUIZ_TEMPERATURE,
            timeout,
        }
    }
}

fn build_user_prompt(content: &str) -> String {
    format!(
        "Create {count} multiple choice questions based on this content:\n\n\
         {content}\n\n\
         Your response must be a JSON object with exactly this structure:\n\
         {shape}\n\n\
         Requirements:\n\
         1. Generate exactly {count} questions\n\
         2. Each question MUST have:\n   \
         - A unique numeric id (1 through {count})\n   \
         - A clear question based on the content\n   \
         - Exactly {options} options in the options array\n   \
         - A correctAnswer that matches EXACTLY one of the options\n\
         3. Questions should test understanding of the content\n\
         4. All questions and answers must be based on the provided content\n\
         5. Respond ONLY with the JSON object, no other text",
        count = QUESTION_COUNT,
        options = OPTION_COUNT,
        content = content,
        shape = EXAMPLE_SHAPE,
    )
}
