//! Report filters (user-supplied query)

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};

/// Longest accepted report range, in days between `from` and `to`
pub const MAX_RANGE_DAYS: i64 = 3660;

/// Inclusive calendar date range chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Whole days between the two dates, whichever comes first
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days().abs()
    }
}

/// Primary ranking metric for the product view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Units sold
    #[default]
    Quantity,
    /// Line revenue
    Revenue,
    /// Revenue per unit sold
    Efficiency,
}

impl FromStr for ProductSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quantity" | "qty" => Ok(Self::Quantity),
            "revenue" => Ok(Self::Revenue),
            "efficiency" => Ok(Self::Efficiency),
            other => Err(AppError::with_message(
                ErrorCode::InvalidSortKey,
                format!("Unknown sort key: {}", other),
            )
            .with_detail("sortBy", other)),
        }
    }
}

/// Filter set for one report request
///
/// Empty allow-lists mean "no restriction". Filters only ever narrow the
/// current window; the previous window is bounded by status and time alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<i64>,
    #[serde(default)]
    pub sort_by: ProductSort,
}

impl ReportFilters {
    /// Reject filter combinations that can never match anything
    pub fn validate(&self) -> AppResult<()> {
        if let Some(range) = &self.date_range
            && range.span_days() > MAX_RANGE_DAYS
        {
            return Err(AppError::invalid_date_range(format!(
                "Date range spans {} days, at most {} allowed",
                range.span_days(),
                MAX_RANGE_DAYS
            ))
            .with_detail("from", range.from.to_string())
            .with_detail("to", range.to.to_string()));
        }
        if let (Some(min), Some(max)) = (self.min_amount, self.max_amount)
            && min > max
        {
            return Err(AppError::new(ErrorCode::InvalidAmountRange)
                .with_detail("minAmount", min)
                .with_detail("maxAmount", max));
        }
        Ok(())
    }

    /// Inclusive amount bounds
    pub fn accepts_amount(&self, amount: i64) -> bool {
        self.min_amount.is_none_or(|min| amount >= min)
            && self.max_amount.is_none_or(|max| amount <= max)
    }

    pub fn accepts_payment_method(&self, method: &str) -> bool {
        self.payment_methods.is_empty() || self.payment_methods.iter().any(|m| m == method)
    }

    pub fn has_category_filter(&self) -> bool {
        !self.categories.is_empty()
    }

    pub fn accepts_category(&self, category: &str) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }
}
