//! Histories sub-client — cached fetch of every instrument's history.

use super::{history_set_from_response, HistorySet, HistorySource, InstrumentSeries};
use crate::client::ChartClient;
use crate::error::ChartError;
use crate::shared::Ticker;

use std::time::Instant;

/// Sub-client for price history operations.
pub struct HistoriesClient<'a> {
    pub(crate) client: &'a ChartClient,
}

impl<'a> HistoriesClient<'a> {
    /// All histories, served from cache while it is younger than the TTL.
    ///
    /// An expired cache is refilled under the write lock, so concurrent
    /// callers share one request.
    pub async fn fetch_all(&self) -> Result<HistorySet, ChartError> {
        if let Some(set) = self.cached(&*self.client.history_cache.read().await) {
            return Ok(set);
        }

        let mut cache = self.client.history_cache.write().await;
        // refilled while we waited for the lock
        if let Some(set) = self.cached(&cache) {
            return Ok(set);
        }
        let set = self.fetch().await?;
        *cache = Some((set.clone(), Instant::now()));
        Ok(set)
    }

    /// Fetch from the backend, bypassing and repopulating the cache.
    pub async fn refresh(&self) -> Result<HistorySet, ChartError> {
        let mut cache = self.client.history_cache.write().await;
        let set = self.fetch().await?;
        *cache = Some((set.clone(), Instant::now()));
        Ok(set)
    }

    /// One instrument's history, `None` if the backend does not carry it.
    pub async fn get(&self, ticker: &Ticker) -> Result<Option<InstrumentSeries>, ChartError> {
        Ok(self.fetch_all().await?.remove(ticker))
    }

    pub async fn clear_cache(&self) {
        *self.client.history_cache.write().await = None;
    }

    fn cached(&self, cache: &Option<(HistorySet, Instant)>) -> Option<HistorySet> {
        let (set, fetched_at) = cache.as_ref()?;
        if fetched_at.elapsed() >= self.client.history_cache_ttl {
            return None;
        }
        tracing::debug!(instruments = set.len(), "Serving price histories from cache");
        Some(set.clone())
    }

    async fn fetch(&self) -> Result<HistorySet, ChartError> {
        let resp = self.client.http.get_stock_data().await?;
        let set = history_set_from_response(resp)?;
        tracing::debug!(instruments = set.len(), "Fetched price histories");
        Ok(set)
    }
}

impl HistorySource for ChartClient {
    async fn fetch_all(&self) -> Result<HistorySet, ChartError> {
        self.histories().fetch_all().await
    }
}
