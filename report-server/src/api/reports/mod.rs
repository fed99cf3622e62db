//! Report API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/reports | GET | compute a report for the query filters |
//! | /api/reports/refresh | POST | recompute with the last filters |
//! | /api/reports/state | GET | last published report state |

mod handler;

pub use handler::ReportQuery;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/reports", get(handler::get_report))
        .route("/api/reports/refresh", post(handler::refresh_report))
        .route("/api/reports/state", get(handler::get_state))
}
