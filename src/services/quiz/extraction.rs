//! Text extraction from uploaded documents.

use super::types::{ExtractedText, UploadedDocument};
use crate::errors::{GatewayError, GatewayResult};
use crate::observability::{truncate_for_log, PipelineObserver, Stage};
use lopdf::Document;
use std::sync::Arc;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Below this many extracted characters a PDF is flagged as low confidence.
pub const LOW_TEXT_THRESHOLD: usize = 50;

/// Separator placed between the text of consecutive pages.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Text of one page, or the reason it could not be read.
pub type PageText = Result<String, String>;

/// Splits a PDF into per-page text.
///
/// Only a document that cannot be opened at all is an error; a page that
/// fails is reported in its slot so the caller can skip it.
#[cfg_attr(test, mockall::automock)]
pub trait PdfPageSource: Send + Sync {
    /// Extract the text of every page, in page order
    fn pages(&self, bytes: &[u8]) -> GatewayResult<Vec<PageText>>;
}

/// [`PdfPageSource`] backed by `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfPageSource;

impl PdfPageSource for LopdfPageSource {
    fn pages(&self, bytes: &[u8]) -> GatewayResult<Vec<PageText>> {
        let document = Document::load_mem(bytes).map_err(|e| GatewayError::UnreadablePdf {
            message: e.to_string(),
        })?;

        Ok(document
            .get_pages()
            .keys()
            .map(|&page_number| {
                document
                    .extract_text(&[page_number])
                    .map_err(|e| e.to_string())
            })
            .collect())
    }
}

/// Trims, collapses whitespace runs to one space and drops non-printable
/// characters.
pub fn normalize_page_text(raw: &str) -> String {
    // Filtering first keeps a dropped character from leaving a double space.
    let printable: String = raw
        .chars()
        .filter(|&c| c.is_whitespace() || is_printable(c))
        .collect();
    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Everything outside the "other" and separator categories, plus ASCII space.
fn is_printable(c: char) -> bool {
    c == ' '
        || !matches!(
            get_general_category(c),
            GeneralCategory::Control
                | GeneralCategory::Format
                | GeneralCategory::Surrogate
                | GeneralCategory::PrivateUse
                | GeneralCategory::Unassigned
                | GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        )
}

/// Decodes plain text as UTF-8, falling back to Latin-1.
pub fn decode_plain_text(bytes: &[u8]) -> GatewayResult<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }
    // Latin-1 assigns a character to every byte value.
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Joins per-page results into one text, skipping failed and blank pages.
pub fn join_pages(pages: Vec<PageText>, observer: &dyn PipelineObserver) -> GatewayResult<String> {
    observer.info(
        Stage::Extraction,
        format!("Opened PDF with {} pages", pages.len()),
    );

    let mut extracted = Vec::with_capacity(pages.len());
    let mut total_chars = 0;

    for (index, page) in pages.into_iter().enumerate() {
        let page_number = index + 1;
        let raw = match page {
            Ok(raw) => raw,
            Err(e) => {
                observer.error(
                    Stage::Extraction,
                    format!("Error processing page {}: {}", page_number, e),
                );
                continue;
            }
        };

        let text = normalize_page_text(&raw);
        let chars = text.chars().count();
        observer.info(
            Stage::Extraction,
            format!("Page {}: extracted {} characters", page_number, chars),
        );

        if chars == 0 {
            observer.warn(
                Stage::Extraction,
                format!("No text extracted from page {}", page_number),
            );
            continue;
        }

        observer.debug(
            Stage::Extraction,
            format!(
                "Sample from page {}: {}",
                page_number,
                truncate_for_log(&text, 100)
            ),
        );
        total_chars += chars;
        extracted.push(text);
    }

    observer.info(
        Stage::Extraction,
        format!("Total extracted text length: {} characters", total_chars),
    );

    if total_chars == 0 {
        observer.error(Stage::Extraction, "No text extracted from PDF".to_string());
        return Err(GatewayError::NoExtractableText);
    }

    if total_chars < LOW_TEXT_THRESHOLD {
        observer.warn(
            Stage::Extraction,
            format!(
                "Very little text extracted from PDF: {} characters",
                total_chars
            ),
        );
    }

    let full_text = extracted.join(PAGE_SEPARATOR);
    observer.debug(
        Stage::Extraction,
        format!(
            "Sample of final extracted text: {}",
            truncate_for_log(&full_text, 200)
        ),
    );

    Ok(full_text)
}

/// Extracts the text of `document`.
///
/// PDF parsing runs on the blocking pool; a panic inside the parser is
/// reported as an unreadable PDF.
pub async fn extract_text(
    document: UploadedDocument,
    pdf_source: Arc<dyn PdfPageSource>,
    observer: &dyn PipelineObserver,
) -> GatewayResult<ExtractedText> {
    if document.is_empty() {
        observer.error(
            Stage::Extraction,
            format!("Received empty file: {}", document.filename()),
        );
        return Err(GatewayError::EmptyFile);
    }

    let text = if document.is_pdf() {
        observer.info(
            Stage::Extraction,
            format!(
                "Read PDF file: {}, size: {} bytes",
                document.filename(),
                document.len()
            ),
        );

        let bytes = document.into_bytes();
        let pages = tokio::task::spawn_blocking(move || pdf_source.pages(&bytes))
            .await
            .map_err(|e| GatewayError::UnreadablePdf {
                message: format!("PDF parser aborted: {}", e),
            })?
            .map_err(|e| {
                observer.error(Stage::Extraction, format!("Error processing PDF: {}", e));
                e
            })?;

        join_pages(pages, observer)?
    } else {
        decode_plain_text(document.bytes()).map_err(|e| {
            observer.error(
                Stage::Extraction,
                format!("Could not decode {}", document.filename()),
            );
            e
        })?
    };

    let extracted = ExtractedText::new(text).map_err(|e| {
        observer.error(Stage::Extraction, "The file contains no text content".to_string());
        e
    })?;

    observer.info(
        Stage::Extraction,
        format!("File content length: {}", extracted.char_count()),
    );

    Ok(extracted)
}
