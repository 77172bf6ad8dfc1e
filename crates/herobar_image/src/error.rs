//! Image error types

use thiserror::Error;

/// Image loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The fetch itself failed
    #[error("Network error: {0}")]
    Network(String),

    /// The fetched bytes are not a supported image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The request was cancelled
    #[error("Image request cancelled")]
    Cancelled,
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;
