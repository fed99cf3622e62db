//! Report service
//!
//! Owns the report state shared with the API. Every computation is tagged
//! with a monotonic sequence number; only the latest issued computation may
//! publish its outcome, so a slow superseded fetch never overwrites a newer
//! report.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{ReportFilters, ReportResult};
use shared::{AppError, AppResult};

use crate::reports::{ReportSettings, build_report};
use crate::source::{DataSource, fetch_snapshot};
use crate::utils::Clock;

/// Snapshot of the last published computation
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportState {
    pub data: Option<ReportResult>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: ReportFilters,
    /// Sequence number of the computation this state belongs to
    pub sequence: u64,
}

pub struct ReportService {
    source: Arc<dyn DataSource>,
    clock: Arc<dyn Clock>,
    settings: ReportSettings,
    sequence: AtomicU64,
    state: RwLock<ReportState>,
}

impl std::fmt::Debug for ReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportService")
            .field("settings", &self.settings)
            .field("sequence", &self.sequence)
            .finish_non_exhaustive()
    }
}

impl ReportService {
    pub fn new(
        source: Arc<dyn DataSource>,
        clock: Arc<dyn Clock>,
        settings: ReportSettings,
    ) -> Self {
        Self {
            source,
            clock,
            settings,
            sequence: AtomicU64::new(0),
            state: RwLock::new(ReportState::default()),
        }
    }

    /// Latest issued sequence number
    pub fn latest_sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Current shared state
    pub fn state(&self) -> ReportState {
        self.state.read().clone()
    }

    /// Compute a report for `filters`
    ///
    /// The caller always receives its own outcome. The shared state only
    /// takes it if no newer computation was issued meanwhile.
    pub async fn compute(&self, filters: ReportFilters) -> AppResult<ReportResult> {
        filters.validate()?;

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write();
            state.loading = true;
            state.filters = filters.clone();
            state.sequence = sequence;
        }
        tracing::debug!(sequence, "Report computation started");

        let outcome = fetch_snapshot(self.source.as_ref())
            .await
            .map(|snapshot| build_report(&snapshot, &filters, self.clock.now(), &self.settings));

        self.publish(sequence, &outcome);
        outcome
    }

    /// Recompute with the last requested filters
    pub async fn refresh(&self) -> AppResult<ReportResult> {
        let filters = self.state.read().filters.clone();
        self.compute(filters).await
    }

    fn publish(&self, sequence: u64, outcome: &Result<ReportResult, AppError>) {
        let mut state = self.state.write();
        let latest = self.sequence.load(Ordering::SeqCst);
        if sequence != latest {
            tracing::debug!(sequence, latest, "Discarding stale report");
            return;
        }

        state.loading = false;
        match outcome {
            Ok(report) => {
                state.data = Some(report.clone());
                state.error = None;
            }
            Err(e) => {
                tracing::warn!(sequence, code = %e.code, error = %e.message, "Report computation failed");
                state.data = None;
                state.error = Some(e.message.clone());
            }
        }
    }
}
