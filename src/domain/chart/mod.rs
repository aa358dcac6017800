//! Chart domain — the user's selection and the chart-ready view derived from it.

pub mod state;

use crate::domain::axis::{self, AxisSpec};
use crate::domain::history::InstrumentSeries;
use crate::domain::window;
use crate::shared::{format_currency, CurrencyKey, Ticker, TimeWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use state::ChartState;

/// The three independently settable selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSelection {
    pub instrument: Ticker,
    pub currency: CurrencyKey,
    pub window: TimeWindow,
}

impl ChartSelection {
    /// `instrument` in the default currency (JPY) over the default window (1Y).
    pub fn new(instrument: Ticker) -> Self {
        Self {
            instrument,
            currency: CurrencyKey::default(),
            window: TimeWindow::default(),
        }
    }
}

/// Everything a renderer needs for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub selection: ChartSelection,
    /// Earliest date the window admits.
    pub cutoff: NaiveDate,
    /// The windowed series.
    pub series: InstrumentSeries,
    pub axis: AxisSpec,
}

impl ChartView {
    /// Filter `series` to the selected window and plan its axis.
    pub fn derive(series: &InstrumentSeries, selection: &ChartSelection, today: NaiveDate) -> Self {
        let filtered = window::filter(series, selection.window, today);
        let axis = axis::plan(&filtered, selection.currency);
        Self {
            selection: selection.clone(),
            cutoff: selection.window.cutoff(today),
            series: filtered,
            axis,
        }
    }

    /// `(date, value)` pairs in the selected currency.
    pub fn plot_points(&self) -> Vec<(NaiveDate, f64)> {
        self.series
            .points
            .iter()
            .map(|p| (p.date, p.value(self.selection.currency)))
            .collect()
    }

    pub fn tick_labels(&self) -> Vec<String> {
        self.axis.tick_labels(self.selection.currency)
    }

    /// Tooltip-style label for a value in the selected currency.
    pub fn format_value(&self, value: f64) -> String {
        format_currency(self.selection.currency, value)
    }

    /// No points inside the window.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
