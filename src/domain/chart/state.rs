//! Chart selection state — app-owned, re-derived on every change.

use super::{ChartSelection, ChartView};
use crate::domain::history::{HistorySet, HistoryStore};
use crate::network::DEFAULT_TICKER;
use crate::shared::{CurrencyKey, Ticker, TimeWindow};
use chrono::NaiveDate;

/// Holds the full histories, the user's three selections and the `today`
/// anchor. Every setter recomputes the view from the full series; nothing
/// is updated incrementally.
#[derive(Debug, Clone)]
pub struct ChartState {
    store: HistoryStore,
    selection: ChartSelection,
    today: NaiveDate,
    view: Option<ChartView>,
}

impl ChartState {
    /// Starts on the default instrument when the store has it, else on the
    /// first ticker.
    pub fn new(store: HistoryStore, today: NaiveDate) -> Self {
        let instrument = initial_instrument(&store);
        Self::with_selection(store, ChartSelection::new(instrument), today)
    }

    pub fn with_selection(store: HistoryStore, selection: ChartSelection, today: NaiveDate) -> Self {
        let mut state = Self {
            store,
            selection,
            today,
            view: None,
        };
        state.refresh();
        state
    }

    pub fn set_instrument(&mut self, instrument: Ticker) {
        self.selection.instrument = instrument;
        self.refresh();
    }

    pub fn set_currency(&mut self, currency: CurrencyKey) {
        self.selection.currency = currency;
        self.refresh();
    }

    pub fn set_window(&mut self, window: TimeWindow) {
        self.selection.window = window;
        self.refresh();
    }

    /// Move the window anchor (e.g. after midnight in the market zone).
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
        self.refresh();
    }

    /// Swap in freshly fetched histories, keeping the selection.
    pub fn replace_histories(&mut self, set: HistorySet) {
        self.store.replace_all(set);
        self.refresh();
    }

    pub fn selection(&self) -> &ChartSelection {
        &self.selection
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// The current chart, `None` when the selected instrument has no history.
    pub fn view(&self) -> Option<&ChartView> {
        self.view.as_ref()
    }

    fn refresh(&mut self) {
        self.view = self
            .store
            .get(&self.selection.instrument)
            .map(|series| ChartView::derive(series, &self.selection, self.today));

        match &self.view {
            Some(view) => tracing::debug!(
                instrument = %self.selection.instrument,
                currency = %self.selection.currency,
                window = %self.selection.window,
                points = view.series.len(),
                domain_min = view.axis.min(),
                domain_max = view.axis.max(),
                "Chart view derived"
            ),
            None => tracing::debug!(
                instrument = %self.selection.instrument,
                "No history for selected instrument"
            ),
        }
    }
}

fn initial_instrument(store: &HistoryStore) -> Ticker {
    let preferred = Ticker::from(DEFAULT_TICKER);
    if store.contains(&preferred) {
        return preferred;
    }
    store.tickers().next().cloned().unwrap_or(preferred)
}
