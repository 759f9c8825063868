//! OpenAI audio APIs: speech-to-text and text-to-speech.

mod service;
mod types;


pub use service::{AudioService, AudioServiceImpl};
pub use types::{
    SpeechRequest, TranscriptionRequest, DEFAULT_SPEECH_VOICE, SPEECH_MODEL, TRANSCRIPTION_MODEL,
};
