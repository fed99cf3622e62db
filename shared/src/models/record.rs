//! Raw records as delivered by the spreadsheet-backed data provider
//!
//! Every cell is loosely typed: the provider may send `"100000"`, `100000`,
//! `100000.0` or nothing at all for the same column. Cells are captured as
//! strings here and parsed strictly by the report normalizer.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a spreadsheet cell into a string regardless of its JSON type
///
/// `null` becomes the empty string; integral floats lose their fractional part
/// so `100000.0` and `"100000"` normalize identically.
pub fn cell<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    })
}

/// One row of the `Orders` collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrder {
    #[serde(default, deserialize_with = "cell", alias = "Order ID", alias = "order_id")]
    pub id: String,
    #[serde(default, deserialize_with = "cell", alias = "Date", alias = "created_at", alias = "createdAt")]
    pub date: String,
    #[serde(default, deserialize_with = "cell", alias = "Total", alias = "total_amount", alias = "totalAmount")]
    pub total: String,
    #[serde(default, deserialize_with = "cell", alias = "Status")]
    pub status: String,
    #[serde(default, deserialize_with = "cell", alias = "Payment Method", alias = "payment_method", alias = "method")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "cell", alias = "Customer", alias = "customer_id", alias = "customer")]
    pub customer_id: String,
}

/// One row of the `OrderLines` collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrderLine {
    #[serde(default, deserialize_with = "cell", alias = "Order Line ID", alias = "line_id")]
    pub id: String,
    #[serde(default, deserialize_with = "cell", alias = "Order ID", alias = "order_id")]
    pub order_id: String,
    #[serde(default, deserialize_with = "cell", alias = "Product ID", alias = "product_id")]
    pub product_id: String,
    #[serde(default, deserialize_with = "cell", alias = "Quantity", alias = "qty")]
    pub quantity: String,
    #[serde(default, deserialize_with = "cell", alias = "Amount", alias = "line_amount", alias = "lineAmount")]
    pub amount: String,
}

/// One row of the `Products` collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    #[serde(default, deserialize_with = "cell", alias = "Product ID", alias = "product_id")]
    pub id: String,
    #[serde(default, deserialize_with = "cell", alias = "Name", alias = "product_name")]
    pub name: String,
    #[serde(default, deserialize_with = "cell", alias = "Category", alias = "category_name")]
    pub category: String,
}

/// A fetched collection: either a bare array or a `{success, data}` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Collection<T> {
    Bare(Vec<T>),
    Envelope {
        success: bool,
        #[serde(default = "Vec::new")]
        data: Vec<T>,
        #[serde(default, alias = "message")]
        error: Option<String>,
    },
}

impl<T> Collection<T> {
    /// Unwrap the records, turning a `success: false` envelope into its error message
    pub fn into_records(self) -> Result<Vec<T>, String> {
        match self {
            Collection::Bare(records) => Ok(records),
            Collection::Envelope {
                success: true,
                data,
                ..
            } => Ok(data),
            Collection::Envelope {
                success: false,
                error,
                ..
            } => Err(error.unwrap_or_else(|| "data source reported failure".to_string())),
        }
    }
}
