use std::sync::Arc;

use super::{Config, DataSourceKind, Result, ServerError};
use crate::service::ReportService;
use crate::source::{DataSource, HttpDataSource, JsonFileSource};
use crate::utils::{Clock, SystemClock};

/// Shared handler state
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | reports | report computation and its published state |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub reports: Arc<ReportService>,
}

impl ServerState {
    pub fn new(config: Config, reports: Arc<ReportService>) -> Self {
        Self { config, reports }
    }

    /// Build the configured data source and report service
    pub fn initialize(config: &Config) -> Result<Self> {
        let source: Arc<dyn DataSource> = match config.data_source {
            DataSourceKind::Http => {
                let http = HttpDataSource::new(&config.data_source_url, config.request_timeout())
                    .map_err(|e| ServerError::Config(e.to_string()))?;
                tracing::info!(url = %http.base_url(), "Using HTTP data source");
                Arc::new(http)
            }
            DataSourceKind::File => {
                let file = JsonFileSource::new(&config.data_dir);
                tracing::info!(dir = %file.dir().display(), "Using JSON file data source");
                Arc::new(file)
            }
        };
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new(config.timezone));
        let reports = ReportService::new(source, clock, config.report_settings());

        Ok(Self::new(config.clone(), Arc::new(reports)))
    }
}
