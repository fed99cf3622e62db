//! Period comparison
//!
//! Growth rates and ratios between the current and previous windows.
//! Uses rust_decimal for the arithmetic, exposes f64 rounded to 2 places.

use rust_decimal::prelude::*;
use shared::models::{Comparison, Growth, Order, OrderLine, PeriodMetrics};

const DECIMAL_PLACES: u32 = 2;

/// How growth behaves when the previous value is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroBaseline {
    /// Always 0%
    Zero,
    /// 100% when the current value is positive, 0% otherwise
    FromNothing,
}

#[inline]
fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[inline]
fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or_default()
}

/// `numerator / denominator`, 0 when the denominator is 0
fn ratio_decimal(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_default()
}

/// Rounded ratio with a zero guard
pub fn ratio(numerator: i64, denominator: i64) -> f64 {
    to_f64(ratio_decimal(numerator.into(), denominator.into()))
}

/// Share of `part` in `total` as a percentage, 0 when the total is 0
pub fn percentage(part: i64, total: i64) -> f64 {
    to_f64(ratio_decimal(part.into(), total.into()) * Decimal::ONE_HUNDRED)
}

/// Percentage change from `previous` to `current`
pub fn growth(current: Decimal, previous: Decimal, policy: ZeroBaseline) -> Growth {
    let percent = if previous.is_zero() {
        match policy {
            ZeroBaseline::FromNothing if current > Decimal::ZERO => Decimal::ONE_HUNDRED,
            _ => Decimal::ZERO,
        }
    } else {
        ratio_decimal(current - previous, previous) * Decimal::ONE_HUNDRED
    };

    let percent = to_f64(percent);
    Growth {
        percent,
        is_positive: percent >= 0.0,
    }
}

/// Sum of `values` clamped to the i64 range
///
/// The flag is set when the exact total did not fit.
pub fn clamped_sum(values: impl IntoIterator<Item = i64>) -> (i64, bool) {
    let total: i128 = values.into_iter().map(i128::from).sum();
    match i64::try_from(total) {
        Ok(sum) => (sum, false),
        Err(_) if total < 0 => (i64::MIN, true),
        Err(_) => (i64::MAX, true),
    }
}

/// Growth between two integer quantities
pub fn growth_i64(current: i64, previous: i64, policy: ZeroBaseline) -> Growth {
    growth(current.into(), previous.into(), policy)
}

/// Headline metrics of one window
///
/// `lines` are the order lines counted as units sold in that window.
pub fn period_metrics(orders: &[&Order], lines: &[&OrderLine]) -> PeriodMetrics {
    let (revenue, _) = clamped_sum(orders.iter().map(|o| o.total));
    let (units, _) = clamped_sum(lines.iter().map(|l| l.quantity));
    let count = orders.len() as u64;

    PeriodMetrics {
        revenue,
        orders: count,
        average_order_value: ratio(revenue, count as i64),
        units,
        revenue_per_unit: ratio(revenue, units),
    }
}

/// Growth of every headline metric
///
/// Revenue-per-unit uses the zero policy; the others count growth from
/// nothing as 100%.
pub fn compare(current: &PeriodMetrics, previous: &PeriodMetrics) -> Comparison {
    let aov = |m: &PeriodMetrics| ratio_decimal(m.revenue.into(), (m.orders as i64).into());
    let rpu = |m: &PeriodMetrics| ratio_decimal(m.revenue.into(), m.units.into());

    Comparison {
        revenue: growth_i64(current.revenue, previous.revenue, ZeroBaseline::FromNothing),
        orders: growth_i64(
            current.orders as i64,
            previous.orders as i64,
            ZeroBaseline::FromNothing,
        ),
        average_order_value: growth(
            round(aov(current)),
            round(aov(previous)),
            ZeroBaseline::FromNothing,
        ),
        units: growth_i64(current.units, previous.units, ZeroBaseline::FromNothing),
        revenue_per_unit: growth(round(rpu(current)), round(rpu(previous)), ZeroBaseline::Zero),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(revenue: i64, orders: u64, units: i64) -> PeriodMetrics {
        PeriodMetrics {
            revenue,
            orders,
            average_order_value: ratio(revenue, orders as i64),
            units,
            revenue_per_unit: ratio(revenue, units),
        }
    }

    #[test]
    fn test_growth_basic() {
        let g = growth_i64(150, 100, ZeroBaseline::Zero);
        assert_eq!(g.percent, 50.0);
        assert!(g.is_positive);

        let g = growth_i64(50, 100, ZeroBaseline::Zero);
        assert_eq!(g.percent, -50.0);
        assert!(!g.is_positive);
    }

    #[test]
    fn test_growth_rounds_half_away_from_zero() {
        assert_eq!(growth_i64(1, 3, ZeroBaseline::Zero).percent, -66.67);
        assert_eq!(growth_i64(2, 3, ZeroBaseline::Zero).percent, -33.33);
        // -49.995
        assert_eq!(growth_i64(10001, 20000, ZeroBaseline::Zero).percent, -50.0);
    }

    #[test]
    fn test_zero_baseline_policies() {
        assert_eq!(growth_i64(0, 0, ZeroBaseline::FromNothing).percent, 0.0);
        assert_eq!(growth_i64(5, 0, ZeroBaseline::FromNothing).percent, 100.0);
        assert_eq!(growth_i64(5, 0, ZeroBaseline::Zero).percent, 0.0);
        assert_eq!(growth_i64(0, 0, ZeroBaseline::Zero).percent, 0.0);
        assert!(growth_i64(0, 0, ZeroBaseline::Zero).is_positive);
    }

    #[test]
    fn test_unchanged_metric_is_positive() {
        let g = growth_i64(100, 100, ZeroBaseline::FromNothing);
        assert_eq!(g.percent, 0.0);
        assert!(g.is_positive);
    }

    #[test]
    fn test_ratio_guards_zero_denominator() {
        assert_eq!(ratio(100, 0), 0.0);
        assert_eq!(ratio(100, 3), 33.33);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(5, 0), 0.0);
    }

    #[test]
    fn test_compare_uses_per_metric_policy() {
        let current = metrics(1000, 2, 10);
        let previous = metrics(0, 0, 0);
        let cmp = compare(&current, &previous);

        assert_eq!(cmp.revenue.percent, 100.0);
        assert_eq!(cmp.orders.percent, 100.0);
        assert_eq!(cmp.average_order_value.percent, 100.0);
        assert_eq!(cmp.units.percent, 100.0);
        assert_eq!(cmp.revenue_per_unit.percent, 0.0);
    }

    #[test]
    fn test_compare_regular_values() {
        let current = metrics(3000, 3, 30);
        let previous = metrics(2000, 4, 10);
        let cmp = compare(&current, &previous);

        assert_eq!(cmp.revenue.percent, 50.0);
        assert_eq!(cmp.orders.percent, -25.0);
        // 1000 vs 500
        assert_eq!(cmp.average_order_value.percent, 100.0);
        assert_eq!(cmp.units.percent, 200.0);
        // 100 vs 200
        assert_eq!(cmp.revenue_per_unit.percent, -50.0);
        assert!(!cmp.revenue_per_unit.is_positive);
    }

    #[test]
    fn test_clamped_sum() {
        assert_eq!(clamped_sum([1, 2, 3]), (6, false));
        assert_eq!(clamped_sum([i64::MAX, 1]), (i64::MAX, true));
        assert_eq!(clamped_sum([i64::MIN, -1]), (i64::MIN, true));
        // Intermediate overflow that comes back into range
        assert_eq!(clamped_sum([i64::MAX, 1, -1]), (i64::MAX, false));
    }

    #[test]
    fn test_period_metrics_saturate() {
        let order = |id: &str, total: i64| Order {
            id: id.into(),
            placed_at: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            total,
            status: "Paid".into(),
            payment_method: "Cash".into(),
            customer_id: None,
        };
        let orders = [order("A", i64::MAX), order("B", 1)];
        let refs: Vec<&Order> = orders.iter().collect();

        let m = period_metrics(&refs, &[]);
        assert_eq!(m.revenue, i64::MAX);
        assert_eq!(m.orders, 2);
        assert_eq!(m.revenue_per_unit, 0.0);
    }

    #[test]
    fn test_period_metrics_empty_window() {
        let m = period_metrics(&[], &[]);
        assert_eq!(m, PeriodMetrics::default());
    }
}
