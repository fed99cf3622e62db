//! Product Model

use serde::{Deserialize, Serialize};

/// Catalog entry referenced by order lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
}
