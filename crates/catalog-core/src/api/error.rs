//! API Errors

use thiserror::Error;

use crate::models::EntityId;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success status other than a list "not found"
    #[error("API Error: {status} - {reason}")]
    Status { status: u16, reason: String },

    #[error("{label} not found: {id}")]
    NotFound { label: &'static str, id: EntityId },

    /// Any failure of a multi-identifier request
    #[error("Failed to fetch {}s", .label.to_lowercase())]
    FetchMany { label: &'static str },

    /// Connectivity or request failure below HTTP
    #[error("{0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}
