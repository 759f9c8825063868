//! Type definitions for the audio APIs

use serde::Serialize;

/// Model used for transcription
pub const TRANSCRIPTION_MODEL: &str = "whisper-1";

/// Model used for speech synthesis
pub const SPEECH_MODEL: &str = "tts-1";

/// Voice used for speech synthesis
pub const DEFAULT_SPEECH_VOICE: &str = "echo";

/// An audio file to transcribe
#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    /// Raw audio bytes
    pub file: Vec<u8>,
    /// File name sent with the upload
    pub filename: String,
    /// MIME type of the audio
    pub content_type: String,
    /// Transcription model
    pub model: String,
}

impl TranscriptionRequest {
    /// Creates a request for the default transcription model
    pub fn new(file: Vec<u8>, filename: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            content_type: content_type.into(),
            model: TRANSCRIPTION_MODEL.to_string(),
        }
    }
}

/// Request body for `POST /v1/audio/speech`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeechRequest {
    /// Speech model
    pub model: String,
    /// Text to speak
    pub input: String,
    /// Voice name
    pub voice: String,
}

impl SpeechRequest {
    /// Creates a request with the default model and voice
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: SPEECH_MODEL.to_string(),
            input: input.into(),
            voice: DEFAULT_SPEECH_VOICE.to_string(),
        }
    }
}
