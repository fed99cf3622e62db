//! Report result model
//!
//! [`ReportResult`] is rebuilt from scratch on every request and handed to
//! the dashboard as-is.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::period::ReportPeriod;

/// Headline totals for one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    /// Sum of paid order totals
    pub revenue: i64,
    /// Paid order count
    pub orders: u64,
    /// `revenue / orders`, 0 when there are no orders
    pub average_order_value: f64,
    /// Units sold across all joined order lines
    pub units: i64,
    /// Line revenue per unit sold, 0 when nothing was sold
    pub revenue_per_unit: f64,
}

/// Period-over-period change of one metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Growth {
    /// Percentage change, rounded to two decimals; never NaN or infinite
    pub percent: f64,
    /// `percent >= 0`, drives the up/down badge
    pub is_positive: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub revenue: Growth,
    pub orders: Growth,
    pub average_order_value: Growth,
    pub units: Growth,
    pub revenue_per_unit: Growth,
}

/// Bestseller row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub revenue: i64,
    /// Revenue per unit
    pub efficiency: f64,
    pub previous_quantity: i64,
    pub previous_revenue: i64,
    pub quantity_growth: Growth,
    pub revenue_growth: Growth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category: String,
    pub revenue: i64,
    /// Number of order lines
    pub lines: u64,
    /// Share of category revenue, 0..=100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSales {
    pub method: String,
    pub orders: u64,
    pub revenue: i64,
    /// Share of order count, 0..=100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    /// `DD/MM/YYYY`, as the dashboard prints it
    pub label: String,
    pub orders: u64,
    pub revenue: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    /// 0..=23
    pub hour: u32,
    pub orders: u64,
    pub revenue: i64,
}

/// Customer report row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub customer_id: String,
    pub orders: u64,
    pub revenue: i64,
    pub average_order_value: f64,
    pub first_order_at: NaiveDateTime,
    pub last_order_at: NaiveDateTime,
}

/// Data-quality counters collected while building a report
///
/// Each counted record was excluded from aggregation rather than failing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDiagnostics {
    pub invalid_dates: u64,
    pub invalid_amounts: u64,
    pub invalid_quantities: u64,
    /// Order lines whose product id is absent from the catalog
    pub missing_products: u64,
    /// Order lines whose order id is absent from the order snapshot
    pub orphan_lines: u64,
    /// Window totals that exceeded the i64 range and were clamped
    pub amount_overflows: u64,
}

impl ReportDiagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Full comparative report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    pub time_range: ReportPeriod,
    pub current: PeriodMetrics,
    pub previous: PeriodMetrics,
    pub comparison: Comparison,
    pub by_product: Vec<ProductSales>,
    pub by_category: Vec<CategorySales>,
    pub by_payment_method: Vec<PaymentMethodSales>,
    pub by_day: Vec<DayBucket>,
    pub by_hour: Vec<HourBucket>,
    pub customers: Vec<CustomerSummary>,
    pub diagnostics: ReportDiagnostics,
}
