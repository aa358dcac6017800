//! History state container — app-owned, crate-provided update logic.

use super::{HistorySet, InstrumentSeries};
use crate::shared::Ticker;

/// Every instrument's full history, as last fetched.
///
/// The app owns instances of this type and replaces the contents on each
/// refresh cycle.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    data: HistorySet,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all series (e.g. from a fresh fetch).
    pub fn replace_all(&mut self, set: HistorySet) {
        self.data = set;
    }

    /// Insert or replace one instrument's series.
    pub fn insert(&mut self, series: InstrumentSeries) {
        self.data.insert(series.ticker.clone(), series);
    }

    pub fn get(&self, ticker: &Ticker) -> Option<&InstrumentSeries> {
        self.data.get(ticker)
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.data.contains_key(ticker)
    }

    /// Tickers in ascending order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl From<HistorySet> for HistoryStore {
    fn from(data: HistorySet) -> Self {
        Self { data }
    }
}
