//! Human-readable number formatting.
//!
//! - `num` — rounding and thousands separators for `f64`
//! - `currency` — axis and tooltip labels keyed by `CurrencyKey`

pub mod currency;
pub mod num;
