//! Data source errors

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Failure while loading one collection
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload is neither an array nor an envelope
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Envelope with `success: false`
    #[error("Rejected by provider: {0}")]
    Rejected(String),
}

pub type SourceResult<T> = Result<T, SourceError>;

impl SourceError {
    /// Convert to an API error tagged with the failing collection
    pub fn into_app_error(self, collection: &str) -> AppError {
        let message = format!("Failed to load {}: {}", collection, self);
        match self {
            SourceError::Http(ref e) if e.is_timeout() => {
                AppError::with_message(ErrorCode::TimeoutError, message)
                    .with_detail("collection", collection)
            }
            SourceError::Http(_) | SourceError::Io(_) => AppError::data_source(collection, message),
            SourceError::Status { status, .. } => {
                AppError::data_source(collection, message).with_detail("status", status)
            }
            SourceError::Json(_) => AppError::with_message(ErrorCode::DataSourceMalformed, message)
                .with_detail("collection", collection),
            SourceError::Rejected(_) => {
                AppError::with_message(ErrorCode::DataSourceRejected, message)
                    .with_detail("collection", collection)
            }
        }
    }
}
