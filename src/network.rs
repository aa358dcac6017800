//! Endpoint constants for the price-history backend.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost";

/// Path of the endpoint returning every instrument's full history.
pub const STOCK_DATA_PATH: &str = "/api/stock-data";

/// Environment variable overriding the base URL.
pub const API_URL_ENV: &str = "YENCHART_API_URL";

/// Instrument selected first when the data set contains it.
pub const DEFAULT_TICKER: &str = "spyd";
