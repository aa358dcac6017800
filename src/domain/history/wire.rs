//! Wire types for the stock-data endpoint.

use crate::shared::Ticker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single daily record as the backend sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// `YYYY/MM/DD` in JST.
    pub date: String,
    pub dollar: f64,
    pub yen: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
}

/// One instrument's entry in the stock-data response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockDataEntry {
    /// Display symbol, e.g. `"SPYD"`.
    pub ticker: String,
    pub histories: Vec<HistoryRecord>,
}

/// REST response for `GET /api/stock-data`, keyed by lowercase ticker.
pub type StockDataResponse = BTreeMap<Ticker, StockDataEntry>;
