//! Error types for the gateway.

use thiserror::Error;

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Main error type for the gateway.
///
/// The quiz pipeline variants (`EmptyFile` through `QuizFormat`) map one to one
/// onto the user-visible error kinds of the quiz endpoint. The remaining
/// variants cover configuration, outbound transport and pass-through failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The uploaded document has zero bytes
    #[error("The uploaded file is empty")]
    EmptyFile,

    /// The document could not be decoded as UTF-8 or Latin-1
    #[error("Could not decode file content")]
    UndecodableContent,

    /// The PDF could not be opened at all
    #[error("Failed to process PDF: {message}")]
    UnreadablePdf {
        /// Parser error message
        message: String,
    },

    /// No page of the PDF yielded any text
    #[error("Could not extract any text from PDF")]
    NoExtractableText,

    /// The extracted text is empty or whitespace-only
    #[error("The file contains no text content")]
    EmptyContent,

    /// The generative model call failed, timed out or returned nothing
    #[error("Model request failed: {message}")]
    ModelRequest {
        /// Error message describing the failure
        message: String,
    },

    /// The model output is not valid JSON or violates the quiz schema
    #[error("Invalid quiz format: {message}")]
    QuizFormat {
        /// The specific check that failed
        message: String,
    },

    /// The inbound request is malformed (missing field, empty payload)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message shown to the caller
        message: String,
    },

    /// A pass-through service answered with a non-success status
    #[error("Upstream error {status}: {message}")]
    Upstream {
        /// Status returned by the upstream service
        status: u16,
        /// Error message
        message: String,
    },

    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Network error (connection failed, timeout, DNS issues)
    #[error("Network error: {message}")]
    Network {
        /// Error message describing the network issue
        message: String,
    },

    /// Serialization or deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
    },

    /// Internal error (unexpected conditions)
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal issue
        message: String,
    },
}

impl GatewayError {
    /// Returns the HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::EmptyFile
            | GatewayError::UndecodableContent
            | GatewayError::UnreadablePdf { .. }
            | GatewayError::NoExtractableText
            | GatewayError::EmptyContent
            | GatewayError::BadRequest { .. } => 400,
            GatewayError::Upstream { status, .. } if (400..=599).contains(status) => *status,
            GatewayError::Upstream { .. } | GatewayError::Network { .. } => 502,
            GatewayError::ModelRequest { .. }
            | GatewayError::QuizFormat { .. }
            | GatewayError::Configuration { .. }
            | GatewayError::Serialization { .. }
            | GatewayError::Internal { .. } => 500,
        }
    }

    /// Returns the message shown to the caller.
    ///
    /// Model and transport failures are reported generically; their details
    /// only go to the logs.
    pub fn public_message(&self) -> String {
        match self {
            GatewayError::ModelRequest { .. } => "Failed to generate quiz".to_string(),
            GatewayError::UndecodableContent => {
                "Could not decode file content. Please ensure it's a valid text or PDF file."
                    .to_string()
            }
            GatewayError::BadRequest { message } | GatewayError::Upstream { message, .. } => {
                message.clone()
            }
            GatewayError::Network { .. }
            | GatewayError::Serialization { .. }
            | GatewayError::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Replaces the message of an upstream error, keeping its status.
    ///
    /// Pass-through endpoints answer with their own fixed wording instead of
    /// echoing the upstream body.
    pub fn with_upstream_message(self, message: &str) -> Self {
        match self {
            GatewayError::Upstream { status, .. } => GatewayError::Upstream {
                status,
                message: message.to_string(),
            },
            other => other,
        }
    }

    /// Returns true if the failure happened before any model call.
    pub fn is_extraction_error(&self) -> bool {
        matches!(
            self,
            GatewayError::EmptyFile
                | GatewayError::UndecodableContent
                | GatewayError::UnreadablePdf { .. }
                | GatewayError::NoExtractableText
                | GatewayError::EmptyContent
        )
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Network {
                message: format!("Request timed out: {}", err),
            }
        } else if err.is_connect() {
            GatewayError::Network {
                message: format!("Connection failed: {}", err),
            }
        } else {
            GatewayError::Network {
                message: format!("Network error: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}
