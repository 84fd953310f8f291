//! Error types for the types crate.

use thiserror::Error;

use crate::address::AddressError;
use crate::api::ApiError;

/// Errors that can occur when working with w3mail types.
#[derive(Debug, Error)]
pub enum Error {
    /// Address could not be classified or had the wrong kind.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A service answered with an error envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
