//! Axis planning — a human-friendly value domain and tick set for one currency.
//!
//! The domain is snapped to a "nice" step (1, 2 or 5 times a power of ten)
//! chosen for roughly four intervals over the data range. Ticks then split
//! the snapped domain into five equal parts, six labels in total; the step
//! only decides where the domain ends.

use crate::domain::history::InstrumentSeries;
use crate::shared::fmt::num::round_dp;
use crate::shared::{format_currency, CurrencyKey};
use serde::{Deserialize, Serialize};

/// Intervals targeted when picking the domain step.
pub const STEP_DIVISIONS: f64 = 4.0;

/// Equal parts the domain is split into for ticks.
pub const TICK_INTERVALS: usize = 5;

const TICK_DECIMALS: u32 = 2;
/// Finest rounding applied to bounds and ticks.
const MAX_ROUND_DECIMALS: u32 = 12;
const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Flat series: range used in place of zero, as a share of the value...
const FLAT_RANGE_RATIO: f64 = 0.01;
/// ...but never below one whole currency unit.
const FLAT_RANGE_FLOOR: f64 = 1.0;

/// Value-axis domain and tick positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub domain: (f64, f64),
    pub ticks: Vec<f64>,
}

impl AxisSpec {
    /// Domain `(0, 0)` with no ticks: nothing to draw.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.domain.0
    }

    pub fn max(&self) -> f64 {
        self.domain.1
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.domain.0 && value <= self.domain.1
    }

    /// Tick labels formatted for `key`.
    pub fn tick_labels(&self, key: CurrencyKey) -> Vec<String> {
        self.ticks.iter().map(|t| format_currency(key, *t)).collect()
    }
}

/// Axis for `series` projected onto `key`.
///
/// Total: an empty series yields [`AxisSpec::empty`]. Non-finite samples are
/// skipped so NaN never reaches the ticks.
pub fn plan(series: &InstrumentSeries, key: CurrencyKey) -> AxisSpec {
    let total = series.len();
    let finite: Vec<f64> = series.values(key).filter(|v| v.is_finite()).collect();
    if finite.len() < total {
        tracing::warn!(
            ticker = %series.ticker,
            currency = %key,
            skipped = total - finite.len(),
            "Skipping non-finite samples while planning axis"
        );
    }
    plan_values(finite)
}

/// Axis for raw values. Non-finite values are ignored.
pub fn plan_values(values: impl IntoIterator<Item = f64>) -> AxisSpec {
    let bounds = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match bounds {
        Some((min, max)) => plan_range(min, max),
        None => AxisSpec::empty(),
    }
}

/// Axis for a known `[min, max]` data range.
///
/// Snapped bounds are clamped to the finite `f64` range, so values near
/// `f64::MAX` get a domain ending at `±f64::MAX` instead of infinity. A step
/// finer than `MAX_ROUND_DECIMALS` digits leaves the bounds unrounded.
pub fn plan_range(min: f64, max: f64) -> AxisSpec {
    if !(min.is_finite() && max.is_finite()) || max < min {
        tracing::warn!(min, max, "Unplottable value range");
        return AxisSpec::empty();
    }

    let raw_range = max - min;
    let raw_step = if raw_range == 0.0 {
        (max.abs() * FLAT_RANGE_RATIO).max(FLAT_RANGE_FLOOR) / STEP_DIVISIONS
    } else if raw_range.is_finite() {
        raw_range / STEP_DIVISIONS
    } else {
        // range overflows f64; split before subtracting
        max / STEP_DIVISIONS - min / STEP_DIVISIONS
    };
    let step = nice_step(raw_step);
    let decimals = rounding_decimals(step);
    let snap = |v: f64| clamp_finite(round_opt(v, decimals));

    let mut lo = snap((min / step).floor() * step);
    let mut hi = snap((max / step).ceil() * step);
    // float noise can push a snapped bound past the data by an ulp
    if lo > min {
        lo = snap(lo - step);
    }
    if hi < max {
        hi = snap(hi + step);
    }
    // flat series sitting exactly on the grid
    if hi <= lo {
        lo = snap(lo - step);
        hi = snap(hi + step);
    }

    AxisSpec {
        domain: (lo, hi),
        ticks: ticks_for((lo, hi)),
    }
}

/// Smallest `k * 10^p >= raw_step` with `k` in {1, 2, 5, 10}.
pub fn nice_step(raw_step: f64) -> f64 {
    if !(raw_step.is_finite() && raw_step > 0.0) {
        return FLAT_RANGE_FLOOR;
    }
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let fraction = raw_step / magnitude;
    let multiplier = NICE_MULTIPLIERS
        .into_iter()
        .find(|k| fraction <= k * (1.0 + 1e-9))
        .unwrap_or(10.0);
    multiplier * magnitude
}

/// Six ticks splitting `domain` into five equal parts.
///
/// Ticks are rounded to cents, or finer when the tick interval needs it.
/// When the span itself overflows, ticks are interpolated from both ends.
pub fn ticks_for(domain: (f64, f64)) -> Vec<f64> {
    let (lo, hi) = domain;
    let parts = TICK_INTERVALS as f64;
    let span = hi - lo;
    let interval = if span.is_finite() {
        span / parts
    } else {
        hi / parts - lo / parts
    };
    let decimals = rounding_decimals(interval).map(|d| d.max(TICK_DECIMALS));

    (0..=TICK_INTERVALS)
        .map(|i| {
            if i == TICK_INTERVALS {
                return hi;
            }
            let t = i as f64 / parts;
            let tick = if span.is_finite() {
                lo + span * t
            } else {
                lo * (1.0 - t) + hi * t
            };
            clamp_finite(round_opt(tick, decimals))
        })
        .collect()
}

/// Fractional digits needed to write multiples of `step` exactly, `None`
/// when that exceeds `MAX_ROUND_DECIMALS` (or `step` is not positive).
fn rounding_decimals(step: f64) -> Option<u32> {
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    if step >= 1.0 {
        return Some(0);
    }
    let decimals = -step.log10().floor();
    (decimals <= MAX_ROUND_DECIMALS as f64).then_some(decimals as u32)
}

fn round_opt(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => round_dp(value, d),
        None => value,
    }
}

fn clamp_finite(value: f64) -> f64 {
    value.clamp(-f64::MAX, f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::{CurrencyValues, HistoryPoint};
    use crate::shared::Ticker;
    use chrono::{Days, NaiveDate};

    fn series_of(usd: &[f64]) -> InstrumentSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let points = usd
            .iter()
            .enumerate()
            .map(|(i, v)| HistoryPoint {
                date: start + Days::new(i as u64),
                values: CurrencyValues::new(*v, (v * 151.3).round()),
                exchange_rate: Some(151.3),
            })
            .collect();
        InstrumentSeries::new(Ticker::from("spyd"), "SPYD", points)
    }

    fn assert_well_formed(spec: &AxisSpec, values: &[f64]) {
        for v in values {
            assert!(spec.contains(*v), "{v} outside {:?}", spec.domain);
        }
        assert_eq!(spec.ticks.len(), TICK_INTERVALS + 1);
        assert!(spec.ticks.windows(2).all(|w| w[0] <= w[1]), "{:?}", spec.ticks);
        assert!(spec.ticks.iter().all(|t| t.is_finite()));
        assert!(spec.min() < spec.max());
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(1.5), 2.0);
        assert_eq!(nice_step(1.0), 1.0);
        assert_eq!(nice_step(3.2), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(0.25), 0.5);
        assert_eq!(nice_step(120.0), 200.0);
        assert_eq!(nice_step(100.0), 100.0);
    }

    #[test]
    fn test_plan_empty_series() {
        let spec = plan(&series_of(&[]), CurrencyKey::Usd);
        assert_eq!(spec.domain, (0.0, 0.0));
        assert!(spec.ticks.is_empty());
        assert!(spec.is_empty());
    }

    #[test]
    fn test_plan_scenario_basic_range() {
        let spec = plan(&series_of(&[10.0, 12.0, 9.0, 15.0, 11.0]), CurrencyKey::Usd);
        assert_eq!(spec.domain, (8.0, 16.0));
        assert_eq!(spec.ticks, [8.0, 9.6, 11.2, 12.8, 14.4, 16.0]);
    }

    #[test]
    fn test_plan_flat_series() {
        let spec = plan(&series_of(&[100.0, 100.0, 100.0]), CurrencyKey::Usd);
        assert_eq!(spec.domain, (99.5, 100.5));
        assert_eq!(spec.ticks, [99.5, 99.7, 99.9, 100.1, 100.3, 100.5]);
        assert!(!spec.domain.0.is_nan() && !spec.domain.1.is_nan());
    }

    #[test]
    fn test_plan_flat_zero_series() {
        let spec = plan_values([0.0, 0.0]);
        assert_eq!(spec.domain, (-0.5, 0.5));
        assert_well_formed(&spec, &[0.0]);
    }

    #[test]
    fn test_plan_single_point() {
        let spec = plan(&series_of(&[40.37]), CurrencyKey::Usd);
        assert_well_formed(&spec, &[40.37]);
    }

    #[test]
    fn test_plan_uses_selected_currency() {
        let series = series_of(&[30.0, 31.0, 29.5]);
        let usd = plan(&series, CurrencyKey::Usd);
        let jpy = plan(&series, CurrencyKey::Jpy);
        assert_ne!(usd.domain, jpy.domain);
        let yen: Vec<f64> = series.values(CurrencyKey::Jpy).collect();
        assert_well_formed(&jpy, &yen);
    }

    #[test]
    fn test_plan_skips_non_finite_samples() {
        let spec = plan(&series_of(&[10.0, f64::NAN, 15.0, f64::INFINITY, 9.0]), CurrencyKey::Usd);
        assert_eq!(spec.domain, (8.0, 16.0));
        assert_eq!(plan_values([f64::NAN]), AxisSpec::empty());
    }

    #[test]
    fn test_plan_contains_all_values() {
        let cases: [&[f64]; 7] = [
            &[0.3, 0.7, 0.1],
            &[40.12, 40.55, 39.98, 41.03],
            &[4410.0, 4522.0, 4387.0, 4700.0],
            &[17290.0, 17512.0],
            &[-5.0, 3.0, 12.5],
            &[1e-3, 2e-3],
            &[123456.78, 123999.01, 120000.0],
        ];
        for values in cases {
            let spec = plan_values(values.iter().copied());
            assert_well_formed(&spec, values);
        }
    }

    #[test]
    fn test_plan_near_f64_max_stays_finite() {
        for values in [[1.7e308, 1.79e308], [f64::MAX, f64::MAX], [-1.79e308, -1.7e308]] {
            let spec = plan_values(values);
            assert_well_formed(&spec, &values);
            assert!(spec.min().is_finite() && spec.max().is_finite());
        }
        assert_eq!(plan_values([1.7e308, 1.79e308]).max(), f64::MAX);
    }

    #[test]
    fn test_plan_range_wider_than_f64() {
        let values = [-1e308, 1e308];
        let spec = plan_values(values);
        assert!(!spec.is_empty());
        assert_well_formed(&spec, &values);
    }

    #[test]
    fn test_plan_tiny_range_is_not_rounded_away() {
        let values = [1e-14, 2e-14];
        let spec = plan_values(values);
        assert_well_formed(&spec, &values);
        assert!(spec.ticks[0] < spec.ticks[TICK_INTERVALS]);
        assert!(spec.min() > 0.0);
    }

    #[test]
    fn test_plan_range_rejects_inverted_or_non_finite_bounds() {
        assert!(plan_range(2.0, 1.0).is_empty());
        assert!(plan_range(f64::NEG_INFINITY, 1.0).is_empty());
    }

    #[test]
    fn test_domain_lands_on_step_grid() {
        let spec = plan_values([4410.0, 4522.0, 4387.0, 4700.0]);
        // range 313 -> raw step 78.25 -> step 100
        assert_eq!(spec.domain, (4300.0, 4700.0));
        assert_eq!(spec.ticks, [4300.0, 4380.0, 4460.0, 4540.0, 4620.0, 4700.0]);
    }

    #[test]
    fn test_tick_labels() {
        let spec = plan_values([10.0, 12.0, 9.0, 15.0, 11.0]);
        assert_eq!(
            spec.tick_labels(CurrencyKey::Usd),
            ["$8.00", "$9.60", "$11.20", "$12.80", "$14.40", "$16.00"]
        );
        assert_eq!(
            spec.tick_labels(CurrencyKey::Jpy),
            ["￥8", "￥10", "￥11", "￥13", "￥14", "￥16"]
        );
    }
}
