//! Data-quality sink
//!
//! Records the pipeline drops instead of failing on: unparseable cells,
//! dangling order lines, unknown products, totals that overflow. Every
//! occurrence is counted and
//! logged on the `report::data_quality` target.

use shared::models::ReportDiagnostics;

const TARGET: &str = "report::data_quality";

#[derive(Debug, Default)]
pub struct DataQuality {
    counters: ReportDiagnostics,
}

impl DataQuality {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalid_date(&mut self, collection: &'static str, id: &str, raw: &str) {
        self.counters.invalid_dates += 1;
        tracing::warn!(target: TARGET, collection, id, value = raw, "Unparseable date, record excluded");
    }

    pub fn invalid_amount(&mut self, collection: &'static str, id: &str, raw: &str) {
        self.counters.invalid_amounts += 1;
        tracing::warn!(target: TARGET, collection, id, value = raw, "Non-integer amount, record excluded");
    }

    pub fn invalid_quantity(&mut self, id: &str, raw: &str) {
        self.counters.invalid_quantities += 1;
        tracing::warn!(target: TARGET, collection = "order_lines", id, value = raw, "Non-integer quantity, record excluded");
    }

    pub fn missing_product(&mut self, line_id: &str, product_id: &str) {
        self.counters.missing_products += 1;
        tracing::warn!(target: TARGET, line_id, product_id, "Order line references unknown product");
    }

    pub fn orphan_line(&mut self, line_id: &str, order_id: &str) {
        self.counters.orphan_lines += 1;
        tracing::warn!(target: TARGET, line_id, order_id, "Order line references unknown order");
    }

    pub fn amount_overflow(&mut self, window: &'static str, metric: &'static str) {
        self.counters.amount_overflows += 1;
        tracing::warn!(target: TARGET, window, metric, "Total exceeds i64 range, clamped");
    }

    pub fn snapshot(&self) -> ReportDiagnostics {
        self.counters
    }

    pub fn finish(self) -> ReportDiagnostics {
        if !self.counters.is_clean() {
            tracing::info!(target: TARGET, diagnostics = ?self.counters, "Report built with excluded records");
        }
        self.counters
    }
}
