//! Multi-dimensional aggregation over the current window

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{NaiveDate, Timelike};
use shared::models::{
    CategorySales, CustomerSummary, DayBucket, HourBucket, Order, OrderLine, PaymentMethodSales,
    Product, ProductSales, ProductSort, TimeRange,
};

use super::compare::{ZeroBaseline, clamped_sum, growth_i64, percentage, ratio};

/// Label format of day buckets
pub const DAY_LABEL_FORMAT: &str = "%d/%m/%Y";

/// Order line joined with its catalog entry
#[derive(Debug, Clone, Copy)]
pub struct JoinedLine<'a> {
    pub line: &'a OrderLine,
    pub product: &'a Product,
}

/// Result of joining a window's lines against the catalog
#[derive(Debug, Default)]
pub struct LineJoin<'a> {
    pub joined: Vec<JoinedLine<'a>>,
    /// Lines whose product id is not in the catalog
    pub missing: Vec<&'a OrderLine>,
}

/// Join the lines of `orders` with the catalog
pub fn join_lines<'a>(
    orders: &[&'a Order],
    lines_by_order: &HashMap<&str, Vec<&'a OrderLine>>,
    catalog: &'a HashMap<String, Product>,
) -> LineJoin<'a> {
    let mut join = LineJoin::default();
    for order in orders {
        let Some(lines) = lines_by_order.get(order.id.as_str()) else {
            continue;
        };
        for &line in lines {
            match catalog.get(&line.product_id) {
                Some(product) => join.joined.push(JoinedLine { line, product }),
                None => join.missing.push(line),
            }
        }
    }
    join
}

#[derive(Default)]
struct Tally {
    quantity: i64,
    revenue: i64,
}

fn tally_by_product<'a>(lines: &[JoinedLine<'a>]) -> HashMap<&'a str, (Tally, &'a Product)> {
    let mut map: HashMap<&str, (Tally, &Product)> = HashMap::new();
    for joined in lines {
        let entry = map
            .entry(joined.product.id.as_str())
            .or_insert_with(|| (Tally::default(), joined.product));
        entry.0.quantity = entry.0.quantity.saturating_add(joined.line.quantity);
        entry.0.revenue = entry.0.revenue.saturating_add(joined.line.amount);
    }
    map
}

/// Product view with previous-window deltas
///
/// Only products sold in the current window are listed.
pub fn by_product(
    current: &[JoinedLine<'_>],
    previous: &[JoinedLine<'_>],
    sort: ProductSort,
) -> Vec<ProductSales> {
    let previous = tally_by_product(previous);

    let mut rows: Vec<ProductSales> = tally_by_product(current)
        .into_iter()
        .map(|(id, (tally, product))| {
            let (prev_quantity, prev_revenue) = previous
                .get(id)
                .map(|(t, _)| (t.quantity, t.revenue))
                .unwrap_or_default();
            ProductSales {
                product_id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                quantity: tally.quantity,
                revenue: tally.revenue,
                efficiency: ratio(tally.revenue, tally.quantity),
                previous_quantity: prev_quantity,
                previous_revenue: prev_revenue,
                quantity_growth: growth_i64(tally.quantity, prev_quantity, ZeroBaseline::FromNothing),
                revenue_growth: growth_i64(tally.revenue, prev_revenue, ZeroBaseline::FromNothing),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        let primary = match sort {
            ProductSort::Quantity => b.quantity.cmp(&a.quantity),
            ProductSort::Revenue => b.revenue.cmp(&a.revenue),
            ProductSort::Efficiency => b.efficiency.total_cmp(&a.efficiency),
        };
        primary
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.product_id.cmp(&b.product_id))
    });
    rows
}

/// Category view; percentages are shares of total category revenue
pub fn by_category(lines: &[JoinedLine<'_>]) -> Vec<CategorySales> {
    let mut map: HashMap<&str, (i64, u64)> = HashMap::new();
    for joined in lines {
        let entry = map.entry(joined.product.category.as_str()).or_default();
        entry.0 = entry.0.saturating_add(joined.line.amount);
        entry.1 += 1;
    }

    let (total, _) = clamped_sum(map.values().map(|(revenue, _)| *revenue));
    let mut rows: Vec<CategorySales> = map
        .into_iter()
        .map(|(category, (revenue, lines))| CategorySales {
            category: category.to_string(),
            revenue,
            lines,
            percentage: percentage(revenue, total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.revenue
            .cmp(&a.revenue)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

/// Payment method view; percentages are shares of order count
pub fn by_payment_method(orders: &[&Order]) -> Vec<PaymentMethodSales> {
    let mut map: HashMap<&str, (u64, i64)> = HashMap::new();
    for order in orders {
        let entry = map.entry(order.payment_method.as_str()).or_default();
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(order.total);
    }

    let total = orders.len() as i64;
    let mut rows: Vec<PaymentMethodSales> = map
        .into_iter()
        .map(|(method, (count, revenue))| PaymentMethodSales {
            method: method.to_string(),
            orders: count,
            revenue,
            percentage: percentage(count as i64, total),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.orders
            .cmp(&a.orders)
            .then_with(|| b.revenue.cmp(&a.revenue))
            .then_with(|| a.method.cmp(&b.method))
    });
    rows
}

/// One bucket per calendar day of `range`, in order
///
/// Allocates every day of the range; callers bound it through
/// `ReportFilters::validate`.
pub fn by_day(orders: &[&Order], range: &TimeRange) -> Vec<DayBucket> {
    let mut buckets: Vec<DayBucket> = range
        .days()
        .into_iter()
        .map(|date| DayBucket {
            date,
            label: date.format(DAY_LABEL_FORMAT).to_string(),
            orders: 0,
            revenue: 0,
        })
        .collect();

    let index: HashMap<NaiveDate, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.date, i))
        .collect();

    for order in orders {
        if let Some(&i) = index.get(&order.placed_at.date()) {
            buckets[i].orders += 1;
            buckets[i].revenue = buckets[i].revenue.saturating_add(order.total);
        }
    }
    buckets
}

/// 24 hour-of-day buckets
pub fn by_hour(orders: &[&Order]) -> Vec<HourBucket> {
    let mut buckets: Vec<HourBucket> = (0..24)
        .map(|hour| HourBucket {
            hour,
            orders: 0,
            revenue: 0,
        })
        .collect();

    for order in orders {
        let bucket = &mut buckets[order.placed_at.hour() as usize];
        bucket.orders += 1;
        bucket.revenue = bucket.revenue.saturating_add(order.total);
    }
    buckets
}

/// Per-customer totals; anonymous orders are skipped
pub fn by_customer(orders: &[&Order]) -> Vec<CustomerSummary> {
    let mut map: HashMap<&str, CustomerSummary> = HashMap::new();
    for order in orders {
        let Some(customer) = order.customer_id.as_deref() else {
            continue;
        };
        let summary = map.entry(customer).or_insert_with(|| CustomerSummary {
            customer_id: customer.to_string(),
            orders: 0,
            revenue: 0,
            average_order_value: 0.0,
            first_order_at: order.placed_at,
            last_order_at: order.placed_at,
        });
        summary.orders += 1;
        summary.revenue = summary.revenue.saturating_add(order.total);
        summary.first_order_at = summary.first_order_at.min(order.placed_at);
        summary.last_order_at = summary.last_order_at.max(order.placed_at);
    }

    let mut rows: Vec<CustomerSummary> = map
        .into_values()
        .map(|mut s| {
            s.average_order_value = ratio(s.revenue, s.orders as i64);
            s
        })
        .collect();

    rows.sort_by(|a, b| match b.revenue.cmp(&a.revenue) {
        Ordering::Equal => a.customer_id.cmp(&b.customer_id),
        other => other,
    });
    rows
}
