//! Health check
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | liveness and last report sequence |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::{DataSourceKind, ServerState};

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    environment: String,
    data_source: &'static str,
    /// Latest issued report sequence number
    last_sequence: u64,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        data_source: match state.config.data_source {
            DataSourceKind::Http => "http",
            DataSourceKind::File => "file",
        },
        last_sequence: state.reports.latest_sequence(),
    })
}
