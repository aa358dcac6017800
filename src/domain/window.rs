//! Relative time-window filtering.

use crate::domain::history::InstrumentSeries;
use crate::shared::TimeWindow;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// UTC offset of the zone the backend stamps sample dates in (JST).
const MARKET_UTC_OFFSET_SECS: i32 = 9 * 3600;

/// Calendar date of `now` in the market's reporting zone.
pub fn market_date(now: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(MARKET_UTC_OFFSET_SECS) {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.date_naive(),
    }
}

/// Points of `series` dated on or after `window`'s cutoff from `today`.
///
/// Order is preserved. An empty result is valid. Unsorted input is filtered
/// point by point and never panics.
pub fn filter(series: &InstrumentSeries, window: TimeWindow, today: NaiveDate) -> InstrumentSeries {
    let cutoff = window.cutoff(today);
    let points = series
        .points
        .iter()
        .filter(|p| p.date >= cutoff)
        .cloned()
        .collect();
    series.with_points(points)
}
