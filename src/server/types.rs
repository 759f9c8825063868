//! Request and response bodies of the inbound API

use crate::services::messages::Role;
use serde::{Deserialize, Serialize};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// User-visible message
    pub detail: String,
}

/// One entry of the route listing served at `/`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteInfo {
    /// Route path
    pub path: &'static str,
    /// Accepted methods
    pub methods: &'static [&'static str],
}

/// Response of `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    /// Always `"ok"`
    pub status: &'static str,
    /// Registered routes
    pub routes: Vec<RouteInfo>,
}

/// Response of `GET /api/test-config`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyStatus {
    /// An OpenAI key is configured
    pub openai_key_set: bool,
    /// An Anthropic key is configured
    pub anthropic_key_set: bool,
}

/// A single chat turn sent by the client
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    /// Author of the turn
    pub role: Role,
    /// Turn text
    pub content: String,
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// Conversation so far, oldest first
    pub messages: Vec<ChatTurn>,
    /// Question the student is working on, if any
    #[serde(default)]
    pub current_question: String,
}

/// Response of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// Tutor reply
    pub response: String,
}
