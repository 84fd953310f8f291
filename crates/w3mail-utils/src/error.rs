//! Error types for utility operations.

use std::time::Duration;

/// Result type alias for utility operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Utility error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Date parsing error.
    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Email address did not have the expected shape.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Shared type error (address classification, serialization).
    #[error(transparent)]
    Types(#[from] w3mail_types::Error),

    /// Operation did not finish in time.
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),

    /// Every retry attempt failed.
    #[error("Gave up after {attempts} attempts: {last_error}")]
    RetryExhausted {
        /// Attempts made.
        attempts: u32,
        /// Message of the final failure.
        last_error: String,
    },

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<w3mail_types::AddressError> for Error {
    fn from(err: w3mail_types::AddressError) -> Self {
        Self::Types(err.into())
    }
}
