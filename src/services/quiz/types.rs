//! Quiz pipeline data model

use crate::errors::{GatewayError, GatewayResult};
use serde::Serialize;

/// Number of questions in every quiz
pub const QUESTION_COUNT: usize = 5;

/// Number of answer options per question
pub const OPTION_COUNT: usize = 4;

/// A document uploaded for quiz generation.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    bytes: Vec<u8>,
    filename: String,
    content_type: Option<String>,
}

impl UploadedDocument {
    /// Creates a document from its raw parts
    pub fn new(bytes: Vec<u8>, filename: impl Into<String>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            content_type,
        }
    }

    /// Raw bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Declared filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Declared content type
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True for a zero-byte upload
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when the filename ends in `.pdf`, ignoring case
    pub fn is_pdf(&self) -> bool {
        self.filename.to_ascii_lowercase().ends_with(".pdf")
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Text extracted from an [`UploadedDocument`], never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Wraps `text`, rejecting empty or whitespace-only input
    pub fn new(text: String) -> GatewayResult<Self> {
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyContent);
        }
        Ok(Self(text))
    }

    /// The text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// One validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    id: u32,
    question: String,
    options: [String; OPTION_COUNT],
    #[serde(rename = "correctAnswer")]
    correct_answer: String,
}

impl QuizQuestion {
    pub(super) fn new(
        id: u32,
        question: String,
        options: [String; OPTION_COUNT],
        correct_answer: String,
    ) -> Self {
        Self {
            id,
            question,
            options,
            correct_answer,
        }
    }

    /// Question number, 1 through 5
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Question text
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The four answer options
    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    /// The correct option, equal to one entry of [`Self::options`]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }
}

/// A validated quiz of exactly five questions.
///
/// Only produced by [`super::parse_quiz`]; there is no way to build a
/// partially valid quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub(super) fn new(questions: Vec<QuizQuestion>) -> Self {
        debug_assert_eq!(questions.len(), QUESTION_COUNT);
        Self { questions }
    }

    /// Questions in order
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }
}
