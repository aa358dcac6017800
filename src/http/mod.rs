//! HTTP client layer — `ChartHttp` with retry and backoff.

pub mod client;
pub mod retry;

pub use client::ChartHttp;
pub use retry::RetryConfig;
