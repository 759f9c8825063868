//! Request handlers

use super::types::{ChatRequest, ChatResponse, ErrorBody, KeyStatus, RootResponse, RouteInfo};
use super::{AppState, ROUTE_TABLE};
use crate::errors::{GatewayError, GatewayResult};
use crate::services::audio::{SpeechRequest, TranscriptionRequest};
use crate::services::messages::{CreateMessageRequest, MessageParam, Role};
use crate::services::quiz::{Quiz, UploadedDocument};
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection,
        Multipart, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// System prompt for the tutor chat
pub const TUTOR_SYSTEM_PROMPT: &str = "You are a helpful AI tutor. Ask guiding questions to help \
students understand how to solve problems step by step. Be encouraging but don't give away answers \
immediately. Keep responses concise and clear, as they will be read aloud to the student.";

/// Token ceiling for a tutor reply
pub const CHAT_MAX_TOKENS: u32 = 1024;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            detail: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<MultipartRejection> for GatewayError {
    fn from(rejection: MultipartRejection) -> Self {
        GatewayError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

/// A file part read from a multipart body
struct FilePart {
    bytes: Vec<u8>,
    filename: String,
    content_type: Option<String>,
}

/// Reads the multipart field named `file`, failing with `missing` when absent.
async fn read_file_part(mut multipart: Multipart, missing: &str) -> GatewayResult<FilePart> {
    while let Some(field) = multipart.next_field().await.map_err(|e| GatewayError::BadRequest {
        message: e.body_text(),
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(String::from);
        let bytes = field.bytes().await.map_err(|e| GatewayError::BadRequest {
            message: e.body_text(),
        })?;
        return Ok(FilePart {
            bytes: bytes.to_vec(),
            filename,
            content_type,
        });
    }

    Err(GatewayError::BadRequest {
        message: missing.to_string(),
    })
}

/// GET / - service status and route listing
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "ok",
        routes: ROUTE_TABLE
            .iter()
            .map(|&(path, methods)| RouteInfo { path, methods })
            .collect(),
    })
}

/// GET /api/test-config - which API keys are configured
pub async fn test_config(State(state): State<Arc<AppState>>) -> Json<KeyStatus> {
    Json(state.key_status)
}

/// POST /api/quiz - generate a quiz from an uploaded document
pub async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> GatewayResult<Json<Quiz>> {
    let part = read_file_part(multipart?, "No file provided").await?;
    let document = UploadedDocument::new(part.bytes, part.filename, part.content_type);

    match state.quiz.generate(document, state.observer.as_ref()).await {
        Ok(quiz) => Ok(Json(quiz)),
        Err(e) if e.is_extraction_error() => {
            tracing::warn!(
                error = %e,
                status = e.status_code(),
                "Rejected quiz upload"
            );
            Err(e)
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                status = e.status_code(),
                "Error in quiz generation endpoint"
            );
            Err(e)
        }
    }
}

/// POST /api/chat - one tutor reply
pub async fn chat(
    State(state): State<Arc<AppState>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> GatewayResult<Json<ChatResponse>> {
    let Json(request) = request?;
    if !request.current_question.is_empty() {
        tracing::debug!(current_question = %request.current_question, "Chat request");
    }

    let messages = request
        .messages
        .into_iter()
        .map(|turn| match turn.role {
            Role::User => MessageParam::user(turn.content),
            Role::Assistant => MessageParam::assistant(turn.content),
        })
        .collect();
    let message_request = CreateMessageRequest::new(&state.chat_model, CHAT_MAX_TOKENS, messages)
        .with_system(TUTOR_SYSTEM_PROMPT);

    let message = state
        .messages
        .create(message_request)
        .await
        .map_err(|e| e.with_upstream_message("Error getting AI response"))?;

    let text = message.first_text().ok_or_else(|| GatewayError::Upstream {
        status: 502,
        message: "Error getting AI response".to_string(),
    })?;

    Ok(Json(ChatResponse {
        response: text.to_string(),
    }))
}

/// POST /api/transcribe - speech to text
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> GatewayResult<Json<serde_json::Value>> {
    let part = read_file_part(multipart?, "No audio file provided").await?;
    let audio = state.audio()?;

    let request = TranscriptionRequest::new(
        part.bytes,
        part.filename,
        part.content_type
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string()),
    );

    let transcription = audio
        .transcribe(request)
        .await
        .map_err(|e| e.with_upstream_message("Error transcribing audio"))?;

    Ok(Json(transcription))
}

/// POST /api/text-to-speech - text to MPEG audio
pub async fn text_to_speech(
    State(state): State<Arc<AppState>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> GatewayResult<Response> {
    let Json(body) = body?;
    let text = body
        .get("text")
        .and_then(|text| text.as_str())
        .ok_or_else(|| GatewayError::BadRequest {
            message: "No text provided".to_string(),
        })?;

    let audio = state
        .audio()?
        .speech(SpeechRequest::new(text))
        .await
        .map_err(|e| e.with_upstream_message("Error generating speech"))?;

    Ok(([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response())
}
