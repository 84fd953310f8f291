//! Generic response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable error codes shared by all services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    /// Request failed validation.
    InvalidRequest,
    /// An address parameter could not be classified.
    InvalidAddress,
    /// Missing or bad credentials.
    Unauthorized,
    /// Caller lacks permission.
    Forbidden,
    /// Resource does not exist.
    NotFound,
    /// Too many requests.
    RateLimited,
    /// Server-side failure.
    Internal,
    /// Dependency (RPC, indexer) unavailable.
    Unavailable,
}

impl ApiErrorCode {
    /// HTTP status code conventionally paired with this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest | Self::InvalidAddress => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::RateLimited => 429,
            Self::Internal => 500,
            Self::Unavailable => 503,
        }
    }

    /// Returns true if retrying the request may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Unavailable)
    }
}

/// Error payload of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{code:?}: {message}")]
pub struct ApiError {
    /// Error code.
    pub code: ApiErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Extra structured context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates an error without details.
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches structured details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<crate::address::AddressError> for ApiError {
    fn from(err: crate::address::AddressError) -> Self {
        Self::new(ApiErrorCode::InvalidAddress, err.to_string())
    }
}

/// Standard envelope wrapping every service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// Failed response.
    #[must_use]
    pub fn err(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self::from_error(ApiError::new(code, message))
    }

    /// Failed response from an existing error.
    #[must_use]
    pub fn from_error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }

    /// Unwraps the envelope.
    ///
    /// # Errors
    ///
    /// Returns the carried error, or an `Internal` error when a response
    /// claims success without data (or failure without an error).
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data, self.error) {
            (true, Some(data), _) => Ok(data),
            (false, _, Some(error)) => Err(error),
            (true, None, _) => Err(ApiError::new(
                ApiErrorCode::Internal,
                "Successful response carried no data",
            )),
            (false, _, None) => Err(ApiError::new(
                ApiErrorCode::Internal,
                "Failed response carried no error",
            )),
        }
    }

    /// Maps the payload.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            timestamp: self.timestamp,
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::from_error(error),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Total items across all pages.
    pub total: u64,
    /// One-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

impl<T> Paginated<T> {
    /// Number of pages for `total` items.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    /// Returns true if pages follow this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}
