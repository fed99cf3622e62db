//! Record normalization
//!
//! Parses raw spreadsheet rows into typed records and splits paid orders
//! into the current and previous windows. Bad cells exclude their record and
//! are reported to [`DataQuality`]; nothing here fails the report.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use shared::AppError;
use shared::models::{
    Order, OrderLine, Product, RawOrder, RawOrderLine, RawProduct, ReportFilters, ReportPeriod,
};

use super::diagnostics::DataQuality;

/// Layout of the order date column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `MM/DD/YYYY HH:mm:ss`
    #[default]
    MonthFirst,
    /// `DD/MM/YYYY[ HH:mm:ss]`
    DayFirst,
}

const MONTH_FIRST: &[&str] = &["%m/%d/%Y %H:%M:%S", "%m/%d/%Y %H:%M"];
const DAY_FIRST: &[&str] = &["%d/%m/%Y %H:%M:%S", "%d/%m/%Y %H:%M"];
const ISO: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

impl DateFormat {
    /// Parse a date cell; `None` marks the record as undated
    pub fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (with_time, date_only) = match self {
            DateFormat::MonthFirst => (MONTH_FIRST, "%m/%d/%Y"),
            DateFormat::DayFirst => (DAY_FIRST, "%d/%m/%Y"),
        };

        with_time
            .iter()
            .chain(ISO)
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, date_only)
                    .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

impl FromStr for DateFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month-first" | "mm/dd/yyyy" | "us" => Ok(Self::MonthFirst),
            "day-first" | "dd/mm/yyyy" | "eu" => Ok(Self::DayFirst),
            other => Err(AppError::config(format!("Unknown date format: {}", other))),
        }
    }
}

/// Whole-table snapshot of the three source collections
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub orders: Vec<RawOrder>,
    pub lines: Vec<RawOrderLine>,
    pub products: Vec<RawProduct>,
}

/// Typed view of a [`Snapshot`]
#[derive(Debug, Default)]
pub struct Normalized {
    pub orders: Vec<Order>,
    pub lines: Vec<OrderLine>,
    pub catalog: HashMap<String, Product>,
}

/// Paid orders falling into each window
#[derive(Debug, Default)]
pub struct Windows<'a> {
    pub current: Vec<&'a Order>,
    pub previous: Vec<&'a Order>,
}

/// Strict integer parsing of a numeric cell
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parse every raw row, dropping (and reporting) the ones that do not parse
pub fn normalize(snapshot: &Snapshot, format: DateFormat, quality: &mut DataQuality) -> Normalized {
    let mut orders = Vec::with_capacity(snapshot.orders.len());
    for raw in &snapshot.orders {
        if let Some(order) = normalize_order(raw, format, quality) {
            orders.push(order);
        }
    }
    orders.sort_by(|a, b| a.placed_at.cmp(&b.placed_at).then_with(|| a.id.cmp(&b.id)));

    let known_orders: HashSet<&str> = snapshot.orders.iter().map(|o| o.id.trim()).collect();
    let mut lines = Vec::with_capacity(snapshot.lines.len());
    for raw in &snapshot.lines {
        if !known_orders.contains(raw.order_id.trim()) {
            quality.orphan_line(&raw.id, &raw.order_id);
            continue;
        }
        if let Some(line) = normalize_line(raw, quality) {
            lines.push(line);
        }
    }

    let mut catalog = HashMap::with_capacity(snapshot.products.len());
    for raw in &snapshot.products {
        let id = raw.id.trim();
        if id.is_empty() {
            continue;
        }
        catalog.entry(id.to_string()).or_insert_with(|| Product {
            id: id.to_string(),
            name: raw.name.trim().to_string(),
            category: raw.category.trim().to_string(),
        });
    }

    Normalized {
        orders,
        lines,
        catalog,
    }
}

fn normalize_order(raw: &RawOrder, format: DateFormat, quality: &mut DataQuality) -> Option<Order> {
    let Some(placed_at) = format.parse(&raw.date) else {
        quality.invalid_date("orders", &raw.id, &raw.date);
        return None;
    };
    let Some(total) = parse_integer(&raw.total) else {
        quality.invalid_amount("orders", &raw.id, &raw.total);
        return None;
    };

    let customer = raw.customer_id.trim();
    Some(Order {
        id: raw.id.trim().to_string(),
        placed_at,
        total,
        status: raw.status.trim().to_string(),
        payment_method: raw.payment_method.trim().to_string(),
        customer_id: (!customer.is_empty()).then(|| customer.to_string()),
    })
}

fn normalize_line(raw: &RawOrderLine, quality: &mut DataQuality) -> Option<OrderLine> {
    let Some(quantity) = parse_integer(&raw.quantity) else {
        quality.invalid_quantity(&raw.id, &raw.quantity);
        return None;
    };
    let Some(amount) = parse_integer(&raw.amount) else {
        quality.invalid_amount("order_lines", &raw.id, &raw.amount);
        return None;
    };

    Some(OrderLine {
        id: raw.id.trim().to_string(),
        order_id: raw.order_id.trim().to_string(),
        product_id: raw.product_id.trim().to_string(),
        quantity,
        amount,
    })
}

impl Normalized {
    /// Order lines grouped by order id
    pub fn lines_by_order(&self) -> HashMap<&str, Vec<&OrderLine>> {
        let mut index: HashMap<&str, Vec<&OrderLine>> = HashMap::new();
        for line in &self.lines {
            index.entry(line.order_id.as_str()).or_default().push(line);
        }
        index
    }

    /// Split paid orders into the current and previous windows
    ///
    /// Filters narrow the current window only; the previous window is bounded
    /// by status and time alone.
    pub fn partition(
        &self,
        period: &ReportPeriod,
        filters: &ReportFilters,
        paid_status: &str,
    ) -> Windows<'_> {
        let lines_by_order = if filters.has_category_filter() {
            self.lines_by_order()
        } else {
            HashMap::new()
        };

        let mut windows = Windows::default();
        for order in self.orders.iter().filter(|o| o.is_paid(paid_status)) {
            if period.current.contains(order.placed_at) {
                if self.passes_filters(order, filters, &lines_by_order) {
                    windows.current.push(order);
                }
            } else if period.previous.contains(order.placed_at) {
                windows.previous.push(order);
            }
        }
        windows
    }

    fn passes_filters(
        &self,
        order: &Order,
        filters: &ReportFilters,
        lines_by_order: &HashMap<&str, Vec<&OrderLine>>,
    ) -> bool {
        if !filters.accepts_amount(order.total) || !filters.accepts_payment_method(&order.payment_method) {
            return false;
        }
        if !filters.has_category_filter() {
            return true;
        }
        lines_by_order
            .get(order.id.as_str())
            .is_some_and(|lines| {
                lines.iter().any(|line| {
                    self.catalog
                        .get(&line.product_id)
                        .is_some_and(|p| filters.accepts_category(&p.category))
                })
            })
    }
}
