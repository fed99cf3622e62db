//! Shared types for the POS reporting service
//!
//! Wire records, typed models, report results, and the error/response types
//! used by the report server and its HTTP consumers.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
