//! Report Server - POS sales report aggregation
//!
//! # Overview
//!
//! Fetches orders, order lines and products from an external provider and
//! turns them into comparative business metrics: current vs previous
//! period, product/category/payment/day/hour/customer breakdowns.
//!
//! # Module layout
//!
//! ```text
//! report-server/src/
//! ├── core/      # config, state, server
//! ├── reports/   # pure aggregation pipeline
//! ├── source/    # data providers (HTTP, JSON files, in-memory)
//! ├── service.rs # sequenced computations and shared state
//! ├── api/       # HTTP routes and handlers
//! └── utils/     # logging, time
//! ```

pub mod api;
pub mod core;
pub mod reports;
pub mod service;
pub mod source;
pub mod utils;

pub use crate::core::{Config, Server, ServerError, ServerState};
pub use reports::{ReportSettings, Snapshot, build_report};
pub use service::{ReportService, ReportState};
pub use source::{DataSource, HttpDataSource, JsonFileSource, StaticSource, fetch_snapshot};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____                        __
   / __ \___  ____  ____  _____/ /_
  / /_/ / _ \/ __ \/ __ \/ ___/ __/
 / _, _/  __/ /_/ / /_/ / /  / /_
/_/ |_|\___/ .___/\____/_/   \__/
          /_/
    "#
    );
}
