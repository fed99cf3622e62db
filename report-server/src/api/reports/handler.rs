//! Report API Handlers

use axum::extract::{Query, State};
use serde::Deserialize;
use shared::models::{DateRange, ProductSort, ReportFilters, ReportResult};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::core::ServerState;
use crate::service::ReportState;
use crate::utils::time::parse_date;

// ============================================================================
// Query Parameters
// ============================================================================

/// `GET /api/reports` query string
///
/// List parameters are comma separated: `categories=Drinks,Noodles`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub categories: Option<String>,
    pub payment_methods: Option<String>,
    pub min_amount: Option<String>,
    pub max_amount: Option<String>,
    pub sort_by: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn split_list(value: Option<&str>) -> Vec<String> {
    non_empty(value)
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_amount(field: &str, value: Option<&str>) -> AppResult<Option<i64>> {
    non_empty(value)
        .map(|v| {
            v.parse::<i64>().map_err(|_| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("{} must be an integer", field))
                    .with_detail("field", field)
                    .with_detail("value", v)
            })
        })
        .transpose()
}

impl ReportQuery {
    /// Validate the query and turn it into report filters
    pub fn into_filters(self) -> AppResult<ReportFilters> {
        let date_range = match (non_empty(self.from.as_deref()), non_empty(self.to.as_deref())) {
            (Some(from), Some(to)) => {
                Some(DateRange::new(parse_date("from", from)?, parse_date("to", to)?))
            }
            (None, None) => None,
            _ => {
                return Err(AppError::invalid_date_range(
                    "from and to must be given together",
                ));
            }
        };

        let sort_by = match non_empty(self.sort_by.as_deref()) {
            Some(key) => key.parse::<ProductSort>()?,
            None => ProductSort::default(),
        };

        let filters = ReportFilters {
            date_range,
            categories: split_list(self.categories.as_deref()),
            payment_methods: split_list(self.payment_methods.as_deref()),
            min_amount: parse_amount("minAmount", self.min_amount.as_deref())?,
            max_amount: parse_amount("maxAmount", self.max_amount.as_deref())?,
            sort_by,
        };
        filters.validate()?;
        Ok(filters)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/reports - compute a report
pub async fn get_report(
    State(state): State<ServerState>,
    Query(query): Query<ReportQuery>,
) -> AppResult<ApiResponse<ReportResult>> {
    let filters = query.into_filters()?;

    tracing::debug!(
        date_range = ?filters.date_range,
        categories = ?filters.categories,
        payment_methods = ?filters.payment_methods,
        "Computing report"
    );

    let report = state.reports.compute(filters).await?;
    Ok(ApiResponse::success(report))
}

/// POST /api/reports/refresh - recompute with the last filters
pub async fn refresh_report(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<ReportResult>> {
    let report = state.reports.refresh().await?;
    Ok(ApiResponse::success_with_message("Refreshed", report))
}

/// GET /api/reports/state - last published state
pub async fn get_state(State(state): State<ServerState>) -> ApiResponse<ReportState> {
    ApiResponse::success(state.reports.state())
}
