//! Typed order records
//!
//! Produced by the report normalizer from [`super::record`] rows. Reporting
//! never mutates them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status marker an order must carry to count toward reporting
pub const PAID_STATUS: &str = "Paid";

/// Order entity (one per transaction)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Local wall-clock time the order was placed
    pub placed_at: NaiveDateTime,
    /// Total in the smallest currency unit
    pub total: i64,
    pub status: String,
    pub payment_method: String,
    pub customer_id: Option<String>,
}

impl Order {
    /// Whether the order carries the given paid marker
    pub fn is_paid(&self, paid_status: &str) -> bool {
        self.status == paid_status
    }
}

/// Order line (one per product per order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    pub quantity: i64,
    /// Line amount in the smallest currency unit
    pub amount: i64,
}
