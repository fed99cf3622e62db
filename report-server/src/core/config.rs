//! Server configuration

use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;

use super::error::{Result, ServerError};
use crate::reports::{DateFormat, ReportSettings};
use crate::utils::time::parse_timezone;

/// Where the raw collections come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceKind {
    #[default]
    Http,
    File,
}

impl FromStr for DataSourceKind {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "file" => Ok(Self::File),
            other => Err(ServerError::Config(format!("Unknown data source: {}", other))),
        }
    }
}

/// Report server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP port |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | - | daily-rolling log directory |
/// | TIMEZONE | UTC | business timezone for "now" |
/// | DATA_SOURCE | http | `http` or `file` |
/// | DATA_SOURCE_URL | http://localhost:8000/api | provider base URL |
/// | DATA_DIR | ./data | directory for the `file` source |
/// | ORDER_DATE_FORMAT | month-first | `month-first` or `day-first` |
/// | PAID_STATUS | Paid | status marking an order as paid |
/// | REQUEST_TIMEOUT_MS | 30000 | provider request timeout |
///
/// # Example
///
/// ```ignore
/// DATA_SOURCE=file DATA_DIR=/srv/pos HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub timezone: Tz,
    pub data_source: DataSourceKind,
    pub data_source_url: String,
    pub data_dir: String,
    pub order_date_format: DateFormat,
    pub paid_status: String,
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Numeric values fall back to their defaults; an unknown timezone, data
    /// source or date format is an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let timezone = match std::env::var("TIMEZONE") {
            Ok(tz) => parse_timezone(&tz).map_err(|e| ServerError::Config(e.message))?,
            Err(_) => defaults.timezone,
        };
        let data_source = match std::env::var("DATA_SOURCE") {
            Ok(kind) => kind.parse()?,
            Err(_) => defaults.data_source,
        };
        let order_date_format = match std::env::var("ORDER_DATE_FORMAT") {
            Ok(fmt) => fmt
                .parse::<DateFormat>()
                .map_err(|e| ServerError::Config(e.message))?,
            Err(_) => defaults.order_date_format,
        };

        Ok(Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            timezone,
            data_source,
            data_source_url: std::env::var("DATA_SOURCE_URL").unwrap_or(defaults.data_source_url),
            data_dir: std::env::var("DATA_DIR").unwrap_or(defaults.data_dir),
            order_date_format,
            paid_status: std::env::var("PAID_STATUS").unwrap_or(defaults.paid_status),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Pipeline settings derived from this config
    pub fn report_settings(&self) -> ReportSettings {
        ReportSettings {
            date_format: self.order_date_format,
            paid_status: self.paid_status.clone(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3000,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            timezone: Tz::UTC,
            data_source: DataSourceKind::Http,
            data_source_url: "http://localhost:8000/api".into(),
            data_dir: "./data".into(),
            order_date_format: DateFormat::MonthFirst,
            paid_status: shared::models::PAID_STATUS.into(),
            request_timeout_ms: 30000,
        }
    }
}
