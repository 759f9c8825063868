//! Quiz generation
//!
//! Extracts text from an uploaded document, asks a [`TextModel`] for five
//! multiple-choice questions and validates the reply into a [`Quiz`].

mod extraction;
mod model;
mod pipeline;
mod prompt;
mod types;
mod validation;


pub use extraction::{
    decode_plain_text, extract_text, join_pages, normalize_page_text, LopdfPageSource, PageText,
    PdfPageSource, LOW_TEXT_THRESHOLD, PAGE_SEPARATOR,
};
pub use model::{ClaudeTextModel, TextModel};
pub use pipeline::QuizPipeline;
pub use prompt::{ModelPrompt, QUIZ_MAX_TOKENS, QUIZ_TEMPERATURE, SYSTEM_PROMPT};
pub use types::{
    ExtractedText, Quiz, QuizQuestion, UploadedDocument, OPTION_COUNT, QUESTION_COUNT,
};
pub use validation::{locate_json_candidate, parse_quiz};

#[cfg(test)]
pub(crate) use extraction::MockPdfPageSource;
