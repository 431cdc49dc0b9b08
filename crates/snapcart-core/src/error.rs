//! Error types for the snapcart-core library.
//!
//! The text parsing pipeline itself is total and returns no errors; these
//! types cover the fallible edges around it (the recognition provider and
//! file I/O in callers).

use thiserror::Error;

/// Main error type for the snapcart library.
#[derive(Error, Debug)]
pub enum SnapcartError {
    /// Text recognition provider error.
    #[error("recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by a text-recognition provider.
#[derive(Error, Debug)]
pub enum RecognitionError {
    /// The provider could not decode the supplied image bytes.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The provider processed the image but reported an internal failure.
    #[error("provider failure: {0}")]
    Provider(String),

    /// The provider is unreachable or misconfigured.
    #[error("provider unavailable: {0}")]
    Unavailable(String),
}

/// Result type for the snapcart library.
pub type Result<T> = std::result::Result<T, SnapcartError>;
