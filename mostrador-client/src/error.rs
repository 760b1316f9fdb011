//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not valid JSON, or did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-success status from the backend; `message` is the backend's
    /// own wording when the body carried one
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Form boundary validation errors
///
/// Returned by submit when the draft cannot be turned into a payload.
/// These mirror what the input layer already enforces, so they surface
/// to the caller instead of occupying the inline error slot.
#[derive(Debug, Error)]
pub enum FormError {
    /// Required field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Price text does not parse as a number
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// A save is already in progress
    #[error("A save is already in progress")]
    SubmitInFlight,
}
