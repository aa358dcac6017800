//! High-level client — `ChartClient` with sub-client accessors.
//!
//! The histories sub-client lives in `domain/history/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::history::client::HistoriesClient;
use crate::domain::history::HistorySet;
use crate::error::ChartError;
use crate::http::{ChartHttp, RetryConfig};
use crate::network::{API_URL_ENV, DEFAULT_API_URL, STOCK_DATA_PATH};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The primary entry point for fetching price histories.
///
/// Cheap to clone: clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ChartClient {
    pub(crate) http: ChartHttp,
    /// Last full fetch and when it happened.
    pub(crate) history_cache: Arc<RwLock<Option<(HistorySet, Instant)>>>,
    pub(crate) history_cache_ttl: Duration,
}

impl ChartClient {
    pub fn builder() -> ChartClientBuilder {
        ChartClientBuilder::default()
    }

    pub fn histories(&self) -> HistoriesClient<'_> {
        HistoriesClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.histories().clear_cache().await;
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ChartClientBuilder {
    base_url: String,
    history_path: String,
    timeout: Duration,
    retry: RetryConfig,
    history_cache_ttl: Duration,
}

impl Default for ChartClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            history_path: STOCK_DATA_PATH.to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::idempotent(),
            history_cache_ttl: Duration::from_secs(300),
        }
    }
}

impl ChartClientBuilder {
    /// Defaults, with the base URL taken from `YENCHART_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Path of the stock-data endpoint, relative to the base URL.
    pub fn history_path(mut self, path: &str) -> Self {
        self.history_path = path.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// How long a full fetch is served from cache. Zero disables caching.
    pub fn history_cache_ttl(mut self, ttl: Duration) -> Self {
        self.history_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<ChartClient, ChartError> {
        Ok(ChartClient {
            http: ChartHttp::new(&self.base_url, &self.history_path, self.timeout, self.retry)?,
            history_cache: Arc::new(RwLock::new(None)),
            history_cache_ttl: self.history_cache_ttl,
        })
    }
}
