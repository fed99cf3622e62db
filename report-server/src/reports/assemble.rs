//! Report assembly
//!
//! Runs the pipeline (period, normalize, aggregate, compare) over one
//! snapshot and merges the pieces into a [`ReportResult`].

use chrono::NaiveDateTime;
use shared::models::{Order, OrderLine, PAID_STATUS, ReportFilters, ReportResult};

use super::aggregate::{self, JoinedLine, LineJoin};
use super::compare::{clamped_sum, compare, period_metrics};
use super::diagnostics::DataQuality;
use super::normalize::{DateFormat, Snapshot, normalize};
use super::period::resolve_period;

/// Source-dependent knobs of the pipeline
#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub date_format: DateFormat,
    /// Status value marking an order as paid
    pub paid_status: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            date_format: DateFormat::MonthFirst,
            paid_status: PAID_STATUS.to_string(),
        }
    }
}

fn all_lines<'a>(join: &LineJoin<'a>) -> Vec<&'a OrderLine> {
    join.joined
        .iter()
        .map(|j| j.line)
        .chain(join.missing.iter().copied())
        .collect()
}

/// Count window totals that the metrics had to clamp
fn check_totals(
    window: &'static str,
    orders: &[&Order],
    lines: &[&OrderLine],
    quality: &mut DataQuality,
) {
    if clamped_sum(orders.iter().map(|o| o.total)).1 {
        quality.amount_overflow(window, "revenue");
    }
    if clamped_sum(lines.iter().map(|l| l.quantity)).1 {
        quality.amount_overflow(window, "units");
    }
    if clamped_sum(lines.iter().map(|l| l.amount)).1 {
        quality.amount_overflow(window, "line_revenue");
    }
}

/// Build the full report for `filters` from a snapshot
///
/// Pure: the same snapshot, filters, `now` and settings always yield the
/// same result.
pub fn build_report(
    snapshot: &Snapshot,
    filters: &ReportFilters,
    now: NaiveDateTime,
    settings: &ReportSettings,
) -> ReportResult {
    let period = resolve_period(filters.date_range.as_ref(), now);

    let mut quality = DataQuality::new();
    let normalized = normalize(snapshot, settings.date_format, &mut quality);
    let windows = normalized.partition(&period, filters, &settings.paid_status);

    let lines_by_order = normalized.lines_by_order();
    let current_join = aggregate::join_lines(&windows.current, &lines_by_order, &normalized.catalog);
    let previous_join =
        aggregate::join_lines(&windows.previous, &lines_by_order, &normalized.catalog);

    for line in &current_join.missing {
        quality.missing_product(&line.id, &line.product_id);
    }

    // Category filter narrows the line-level views of the current window
    let (current_joined, current_units): (Vec<JoinedLine<'_>>, Vec<&OrderLine>) =
        if filters.has_category_filter() {
            let joined: Vec<JoinedLine<'_>> = current_join
                .joined
                .iter()
                .copied()
                .filter(|j| filters.accepts_category(&j.product.category))
                .collect();
            let units = joined.iter().map(|j| j.line).collect();
            (joined, units)
        } else {
            (current_join.joined.clone(), all_lines(&current_join))
        };

    let previous_units = all_lines(&previous_join);
    check_totals("current", &windows.current, &current_units, &mut quality);
    check_totals("previous", &windows.previous, &previous_units, &mut quality);

    let current = period_metrics(&windows.current, &current_units);
    let previous = period_metrics(&windows.previous, &previous_units);
    let comparison = compare(&current, &previous);

    let report = ReportResult {
        by_product: aggregate::by_product(&current_joined, &previous_join.joined, filters.sort_by),
        by_category: aggregate::by_category(&current_joined),
        by_payment_method: aggregate::by_payment_method(&windows.current),
        by_day: aggregate::by_day(&windows.current, &period.current),
        by_hour: aggregate::by_hour(&windows.current),
        customers: aggregate::by_customer(&windows.current),
        diagnostics: quality.finish(),
        time_range: period,
        current,
        previous,
        comparison,
    };

    tracing::debug!(
        granularity = ?report.time_range.granularity,
        orders = report.current.orders,
        revenue = report.current.revenue,
        previous_orders = report.previous.orders,
        "Report assembled"
    );

    report
}
