//! JSON file provider
//!
//! Reads `orders.json`, `order_lines.json` and `products.json` from one
//! directory. Files may hold a bare array or a `{success, data}` envelope.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::models::{RawOrder, RawOrderLine, RawProduct};

use super::{DataSource, SourceResult, decode_collection};

pub const ORDERS_FILE: &str = "orders.json";
pub const ORDER_LINES_FILE: &str = "order_lines.json";
pub const PRODUCTS_FILE: &str = "products.json";

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn read<T: DeserializeOwned>(&self, file: &str) -> SourceResult<Vec<T>> {
        let path = self.dir.join(file);
        tracing::debug!(path = %path.display(), "Reading collection");
        let bytes = tokio::fs::read(&path).await?;
        decode_collection(&bytes)
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn fetch_orders(&self) -> SourceResult<Vec<RawOrder>> {
        self.read(ORDERS_FILE).await
    }

    async fn fetch_order_lines(&self) -> SourceResult<Vec<RawOrderLine>> {
        self.read(ORDER_LINES_FILE).await
    }

    async fn fetch_products(&self) -> SourceResult<Vec<RawProduct>> {
        self.read(PRODUCTS_FILE).await
    }
}
