//! HTTP data provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::models::{RawOrder, RawOrderLine, RawProduct};

use super::{DataSource, SourceError, SourceResult, decode_collection};

/// Endpoint paths relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPaths {
    pub orders: String,
    pub order_lines: String,
    pub products: String,
}

impl Default for CollectionPaths {
    fn default() -> Self {
        Self {
            orders: "orders".into(),
            order_lines: "order-lines".into(),
            products: "products".into(),
        }
    }
}

/// Fetches whole-table snapshots from a remote provider
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    client: Client,
    base_url: String,
    paths: CollectionPaths,
}

impl HttpDataSource {
    pub fn new(base_url: &str, timeout: Duration) -> SourceResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            paths: CollectionPaths::default(),
        })
    }

    pub fn with_paths(mut self, paths: CollectionPaths) -> Self {
        self.paths = paths;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> SourceResult<Vec<T>> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(url = %url, "Fetching collection");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        decode_collection(&body)
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch_orders(&self) -> SourceResult<Vec<RawOrder>> {
        self.get(&self.paths.orders).await
    }

    async fn fetch_order_lines(&self) -> SourceResult<Vec<RawOrderLine>> {
        self.get(&self.paths.order_lines).await
    }

    async fn fetch_products(&self) -> SourceResult<Vec<RawProduct>> {
        self.get(&self.paths.products).await
    }
}
