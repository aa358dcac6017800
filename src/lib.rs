//! # yenchart
//!
//! Chart-ready price history for instruments quoted in USD and JPY.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Types, the window filter and axis planner, chart state (always available, WASM-safe)
//! 2. **HTTP API** — `ChartHttp` with retry and backoff
//! 3. **High-Level Client** — `ChartClient` with a cached histories sub-client
//!
//! The core is pure: `domain::window::filter` cuts a series to a relative
//! window anchored on an explicit `today`, and `domain::axis::plan` computes a
//! nice-number domain and six ticks for the selected currency. `ChartState`
//! re-runs both on every selection change.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yenchart::prelude::*;
//!
//! let client = ChartClient::builder()
//!     .base_url("http://localhost")
//!     .build()?;
//!
//! let histories = client.histories().fetch_all().await?;
//! let today = market_date(chrono::Utc::now());
//! let mut chart = ChartState::new(HistoryStore::from(histories), today);
//! chart.set_window(TimeWindow::Month3);
//! if let Some(view) = chart.view() {
//!     println!("{:?} {:?}", view.axis.domain, view.tick_labels());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, formatting and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): history, window, axis, chart.
pub mod domain;

/// Unified error types.
pub mod error;

/// Endpoint constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry and backoff.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ChartClient` — the primary entry point for fetching.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{format_currency, CurrencyKey, Ticker, TimeWindow, WindowOffset};

    // Domain types — history
    pub use crate::domain::history::{
        CurrencyValues, HistoryPoint, HistorySet, HistorySource, HistoryStore, InstrumentSeries,
    };

    // Pipeline
    pub use crate::domain::axis::{plan, AxisSpec};
    pub use crate::domain::window::{filter, market_date};

    // Chart state
    pub use crate::domain::chart::{ChartSelection, ChartState, ChartView};

    // Errors
    pub use crate::error::{ChartError, HttpError, InvalidInputError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, STOCK_DATA_PATH};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ChartClient, ChartClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::domain::history::client::HistoriesClient;
    #[cfg(feature = "http")]
    pub use crate::http::retry::RetryConfig;
}
