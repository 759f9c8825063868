//! Quiz generation pipeline

use super::extraction::{extract_text, LopdfPageSource, PdfPageSource};
use super::model::TextModel;
use super::prompt::ModelPrompt;
use super::types::{Quiz, UploadedDocument};
use super::validation::parse_quiz;
use crate::errors::GatewayResult;
use crate::observability::{truncate_for_log, PipelineObserver, Stage};
use crate::DEFAULT_TIMEOUT_SECS;
use std::sync::Arc;
use std::time::Duration;

/// Turns an uploaded document into a validated quiz.
///
/// Stages run in order (extraction, model call, validation) and the first
/// failure ends the run. The pipeline holds no per-request state and can be
/// shared across concurrent requests.
#[derive(Clone)]
pub struct QuizPipeline {
    model: Arc<dyn TextModel>,
    pdf_source: Arc<dyn PdfPageSource>,
    model_timeout: Duration,
}

impl QuizPipeline {
    /// Create a pipeline around `model`, reading PDFs with `lopdf`
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self {
            model,
            pdf_source: Arc::new(LopdfPageSource),
            model_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Use a different PDF page source
    pub fn with_pdf_source(mut self, pdf_source: Arc<dyn PdfPageSource>) -> Self {
        self.pdf_source = pdf_source;
        self
    }

    /// Set the hard limit for the model call
    pub fn with_model_timeout(mut self, timeout: Duration) -> Self {
        self.model_timeout = timeout;
        self
    }

    /// Generate a quiz from `document`, reporting progress to `observer`
    pub async fn generate(
        &self,
        document: UploadedDocument,
        observer: &dyn PipelineObserver,
    ) -> GatewayResult<Quiz> {
        observer.info(
            Stage::Upload,
            format!(
                "Received file: {}, content type: {}",
                document.filename(),
                document.content_type().unwrap_or("unknown")
            ),
        );

        let text = extract_text(document, self.pdf_source.clone(), observer).await?;

        let prompt = ModelPrompt::for_quiz(&text, self.model_timeout);
        observer.info(
            Stage::ModelCall,
            format!("Sending request to model, content length: {}", text.char_count()),
        );
        let raw = self.model.invoke(&prompt).await.map_err(|e| {
            observer.error(Stage::ModelCall, format!("Error generating quiz: {}", e));
            e
        })?;
        observer.info(Stage::ModelCall, "Received response from model".to_string());
        observer.debug(
            Stage::ModelCall,
            format!("Raw response text: {}", truncate_for_log(&raw, 200)),
        );

        let quiz = parse_quiz(&raw).map_err(|e| {
            observer.error(
                Stage::Validation,
                format!("{}; response sample: {}", e, truncate_for_log(&raw, 200)),
            );
            e
        })?;
        observer.info(Stage::Validation, "Successfully validated quiz data".to_string());

        Ok(quiz)
    }
}
