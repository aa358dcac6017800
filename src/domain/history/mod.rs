//! Price history domain — daily samples in USD and JPY per instrument.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::error::{ChartError, InvalidInputError};
use crate::shared::{CurrencyKey, Ticker};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use convert::{history_set_from_response, response_from_history_set};
pub use state::HistoryStore;

/// Every instrument's history from one fetch, keyed by ticker.
pub type HistorySet = BTreeMap<Ticker, InstrumentSeries>;

/// Supplies every instrument's full history.
///
/// The chart pipeline never calls this itself: the application fetches once
/// per refresh cycle and feeds the result to the window filter and axis planner.
#[allow(async_fn_in_trait)]
pub trait HistorySource {
    async fn fetch_all(&self) -> Result<HistorySet, ChartError>;
}

/// One sample's value in each supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyValues {
    pub usd: f64,
    pub jpy: f64,
}

impl CurrencyValues {
    pub fn new(usd: f64, jpy: f64) -> Self {
        Self { usd, jpy }
    }

    pub fn get(&self, key: CurrencyKey) -> f64 {
        match key {
            CurrencyKey::Usd => self.usd,
            CurrencyKey::Jpy => self.jpy,
        }
    }
}

/// A single daily sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(with = "crate::shared::serde_util::slash_date")]
    pub date: NaiveDate,
    pub values: CurrencyValues,
    /// JPY per USD used upstream to derive `values.jpy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
}

impl HistoryPoint {
    pub fn value(&self, key: CurrencyKey) -> f64 {
        self.values.get(key)
    }

    /// The upstream rate, or `jpy / usd` when the backend did not send one.
    pub fn implied_exchange_rate(&self) -> Option<f64> {
        match self.exchange_rate {
            Some(rate) => Some(rate),
            None if self.values.usd != 0.0 => Some(self.values.jpy / self.values.usd),
            None => None,
        }
    }
}

/// Ordered history of one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentSeries {
    pub ticker: Ticker,
    /// Display symbol, e.g. `"SPYD"`.
    pub symbol: String,
    pub points: Vec<HistoryPoint>,
}

impl InstrumentSeries {
    /// Builds a series without checking date order.
    pub fn new(ticker: Ticker, symbol: impl Into<String>, points: Vec<HistoryPoint>) -> Self {
        Self {
            ticker,
            symbol: symbol.into(),
            points,
        }
    }

    /// Builds a series, rejecting duplicate or out-of-order dates and
    /// non-finite values.
    pub fn try_new(
        ticker: Ticker,
        symbol: impl Into<String>,
        points: Vec<HistoryPoint>,
    ) -> Result<Self, InvalidInputError> {
        let series = Self::new(ticker, symbol, points);
        series.validate()?;
        Ok(series)
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let mut previous: Option<NaiveDate> = None;
        for point in &self.points {
            for key in CurrencyKey::ALL {
                if !point.value(key).is_finite() {
                    return Err(InvalidInputError::NonFiniteValue {
                        ticker: self.ticker.clone(),
                        date: point.date,
                        currency: key,
                    });
                }
            }
            if let Some(prev) = previous {
                if point.date == prev {
                    return Err(InvalidInputError::DuplicateDate {
                        ticker: self.ticker.clone(),
                        date: point.date,
                    });
                }
                if point.date < prev {
                    return Err(InvalidInputError::UnsortedDates {
                        ticker: self.ticker.clone(),
                        date: point.date,
                        previous: prev,
                    });
                }
            }
            previous = Some(point.date);
        }
        Ok(())
    }

    /// Same instrument, different samples.
    pub fn with_points(&self, points: Vec<HistoryPoint>) -> Self {
        Self {
            ticker: self.ticker.clone(),
            symbol: self.symbol.clone(),
            points,
        }
    }

    pub fn values(&self, key: CurrencyKey) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(move |p| p.value(key))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
