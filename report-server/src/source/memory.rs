//! In-memory provider

use async_trait::async_trait;
use shared::models::{RawOrder, RawOrderLine, RawProduct};

use super::{DataSource, SourceResult};
use crate::reports::Snapshot;

/// Serves a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: Snapshot,
}

impl StaticSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch_orders(&self) -> SourceResult<Vec<RawOrder>> {
        Ok(self.snapshot.orders.clone())
    }

    async fn fetch_order_lines(&self) -> SourceResult<Vec<RawOrderLine>> {
        Ok(self.snapshot.lines.clone())
    }

    async fn fetch_products(&self) -> SourceResult<Vec<RawProduct>> {
        Ok(self.snapshot.products.clone())
    }
}
