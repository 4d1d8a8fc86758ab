//! Error types for image generation and the render run.

/// Errors that can occur while generating or saving images.
#[derive(Debug, thiserror::Error)]
pub enum LookGenError {
    /// API key missing, empty, or rejected.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Message taken from the error body, or the raw body text.
        message: String,
    },

    /// Response parsed but carried no usable image payload.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to decode base64 data.
    #[error("failed to decode: {0}")]
    Decode(String),

    /// I/O error (e.g., saving file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for image generation operations.
pub type Result<T> = std::result::Result<T, LookGenError>;
