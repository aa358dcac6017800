//! Conversions between wire records and domain samples.

use super::wire::{HistoryRecord, StockDataEntry, StockDataResponse};
use super::{CurrencyValues, HistoryPoint, HistorySet, InstrumentSeries};
use crate::error::InvalidInputError;
use crate::shared::serde_util::slash_date;
use crate::shared::Ticker;

impl TryFrom<HistoryRecord> for HistoryPoint {
    type Error = InvalidInputError;

    fn try_from(r: HistoryRecord) -> Result<Self, Self::Error> {
        let date = slash_date::parse(&r.date)
            .ok_or(InvalidInputError::InvalidDate { value: r.date })?;
        Ok(Self {
            date,
            values: CurrencyValues::new(r.dollar, r.yen),
            exchange_rate: r.exchange_rate,
        })
    }
}

impl From<&HistoryPoint> for HistoryRecord {
    fn from(p: &HistoryPoint) -> Self {
        Self {
            date: p.date.format(slash_date::FORMAT).to_string(),
            dollar: p.values.usd,
            yen: p.values.jpy,
            exchange_rate: p.exchange_rate,
        }
    }
}

impl TryFrom<(Ticker, StockDataEntry)> for InstrumentSeries {
    type Error = InvalidInputError;

    fn try_from((ticker, entry): (Ticker, StockDataEntry)) -> Result<Self, Self::Error> {
        let points = entry
            .histories
            .into_iter()
            .map(HistoryPoint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        InstrumentSeries::try_new(ticker, entry.ticker, points)
    }
}

impl From<&InstrumentSeries> for StockDataEntry {
    fn from(s: &InstrumentSeries) -> Self {
        Self {
            ticker: s.symbol.clone(),
            histories: s.points.iter().map(HistoryRecord::from).collect(),
        }
    }
}

/// Validates and converts a full stock-data response.
pub fn history_set_from_response(resp: StockDataResponse) -> Result<HistorySet, InvalidInputError> {
    resp.into_iter()
        .map(|(ticker, entry)| {
            InstrumentSeries::try_from((ticker.clone(), entry)).map(|series| (ticker, series))
        })
        .collect()
}

/// Inverse of [`history_set_from_response`].
pub fn response_from_history_set(set: &HistorySet) -> StockDataResponse {
    set.iter()
        .map(|(ticker, series)| (ticker.clone(), StockDataEntry::from(series)))
        .collect()
}
