//! Domain modules organized as vertical slices.
//!
//! - `history` — samples, series, wire types, conversions, store, sub-client
//! - `window` — relative time-window filtering
//! - `axis` — nice-number axis domain and ticks
//! - `chart` — selection state that re-derives the chart on every change

pub mod axis;
pub mod chart;
pub mod history;
pub mod window;
