//! External data provider
//!
//! Three read-only collections fetched as whole-table snapshots:
//!
//! - [`HttpDataSource`] - remote provider over HTTP
//! - [`JsonFileSource`] - JSON files in a local directory
//! - [`StaticSource`] - fixed in-memory snapshot

mod error;
mod file;
mod http;
mod memory;

pub use error::{SourceError, SourceResult};
pub use file::{JsonFileSource, ORDER_LINES_FILE, ORDERS_FILE, PRODUCTS_FILE};
pub use http::{CollectionPaths, HttpDataSource};
pub use memory::StaticSource;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared::AppResult;
use shared::models::{Collection, RawOrder, RawOrderLine, RawProduct};

use crate::reports::Snapshot;

/// Provider of the raw report collections
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_orders(&self) -> SourceResult<Vec<RawOrder>>;
    async fn fetch_order_lines(&self) -> SourceResult<Vec<RawOrderLine>>;
    async fn fetch_products(&self) -> SourceResult<Vec<RawProduct>>;
}

/// Decode a bare array or a `{success, data}` envelope
pub(crate) fn decode_collection<T: DeserializeOwned>(bytes: &[u8]) -> SourceResult<Vec<T>> {
    let collection: Collection<T> = serde_json::from_slice(bytes)?;
    collection.into_records().map_err(SourceError::Rejected)
}

/// Fetch all three collections concurrently
///
/// The first failure fails the whole snapshot.
pub async fn fetch_snapshot(source: &dyn DataSource) -> AppResult<Snapshot> {
    let (orders, lines, products) = tokio::try_join!(
        async {
            source
                .fetch_orders()
                .await
                .map_err(|e| e.into_app_error("orders"))
        },
        async {
            source
                .fetch_order_lines()
                .await
                .map_err(|e| e.into_app_error("order_lines"))
        },
        async {
            source
                .fetch_products()
                .await
                .map_err(|e| e.into_app_error("products"))
        },
    )?;

    tracing::debug!(
        orders = orders.len(),
        lines = lines.len(),
        products = products.len(),
        "Snapshot fetched"
    );

    Ok(Snapshot {
        orders,
        lines,
        products,
    })
}
