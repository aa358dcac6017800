//! Unified error types.

use chrono::NaiveDate;
use thiserror::Error;

use crate::shared::{CurrencyKey, Ticker};

/// Top-level crate error.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// HTTP-layer errors. This is the network failure a `HistorySource` reports.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Contract violations in history data, caught at the wire boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("Invalid date {value:?}: expected YYYY/MM/DD or YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Duplicate date {date} in {ticker}")]
    DuplicateDate { ticker: Ticker, date: NaiveDate },

    #[error("Out-of-order date {date} in {ticker} (previous {previous})")]
    UnsortedDates {
        ticker: Ticker,
        date: NaiveDate,
        previous: NaiveDate,
    },

    #[error("Non-finite {currency} value on {date} in {ticker}")]
    NonFiniteValue {
        ticker: Ticker,
        date: NaiveDate,
        currency: CurrencyKey,
    },
}
