//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the backend sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::currency::format_currency;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Ticker ──────────────────────────────────────────────────────────────────

/// Newtype for instrument keys as the backend sends them (e.g. `"spyd"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Ticker {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Ticker(s.to_string()))
    }
}

impl Serialize for Ticker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Ticker {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Ticker(s))
    }
}

// ─── CurrencyKey ─────────────────────────────────────────────────────────────

/// Display currency: selects which value of a sample is plotted and how
/// its labels are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrencyKey {
    #[serde(rename = "USD", alias = "dollar")]
    Usd,
    #[default]
    #[serde(rename = "JPY", alias = "yen")]
    Jpy,
}

impl CurrencyKey {
    pub const ALL: [CurrencyKey; 2] = [CurrencyKey::Usd, CurrencyKey::Jpy];

    /// ISO 4217 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Jpy => "JPY",
        }
    }

    /// Field name carrying this currency in the wire records.
    pub fn wire_field(&self) -> &'static str {
        match self {
            Self::Usd => "dollar",
            Self::Jpy => "yen",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Jpy => "￥",
        }
    }

    /// Fraction digits shown on labels.
    pub fn fraction_digits(&self) -> usize {
        match self {
            Self::Usd => 2,
            Self::Jpy => 0,
        }
    }
}

impl std::fmt::Display for CurrencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "usd" | "dollar" | "$" => Ok(Self::Usd),
            "jpy" | "yen" | "円" | "￥" => Ok(Self::Jpy),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}

// ─── TimeWindow ──────────────────────────────────────────────────────────────

/// Calendar offset a window spans back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOffset {
    Months(u32),
    Years(u32),
}

/// Relative time window anchored on today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1M")]
    Month1,
    #[serde(rename = "3M")]
    Month3,
    #[serde(rename = "6M")]
    Month6,
    #[default]
    #[serde(rename = "1Y")]
    Year1,
    #[serde(rename = "3Y")]
    Year3,
}

impl TimeWindow {
    /// All windows, shortest first.
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Month1,
        TimeWindow::Month3,
        TimeWindow::Month6,
        TimeWindow::Year1,
        TimeWindow::Year3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month1 => "1M",
            Self::Month3 => "3M",
            Self::Month6 => "6M",
            Self::Year1 => "1Y",
            Self::Year3 => "3Y",
        }
    }

    pub fn offset(&self) -> WindowOffset {
        match self {
            Self::Month1 => WindowOffset::Months(1),
            Self::Month3 => WindowOffset::Months(3),
            Self::Month6 => WindowOffset::Months(6),
            Self::Year1 => WindowOffset::Years(1),
            Self::Year3 => WindowOffset::Years(3),
        }
    }

    /// Earliest date inside the window.
    ///
    /// Calendar arithmetic with end-of-month clamping: `3M` back from
    /// 2024-05-31 is 2024-02-29. Falls back to `NaiveDate::MIN` when the
    /// subtraction leaves chrono's date range.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        let months = match self.offset() {
            WindowOffset::Months(n) => n,
            WindowOffset::Years(n) => n * 12,
        };
        today
            .checked_sub_months(Months::new(months))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == normalized)
            .ok_or_else(|| format!("unsupported time window: {s}"))
    }
}
