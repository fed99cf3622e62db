//! API routes
//!
//! - [`health`] - health check
//! - [`reports`] - report computation and state

pub mod health;
pub mod reports;

use axum::Router;

use crate::core::ServerState;

/// All API routes, state not yet attached
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(reports::router())
}
