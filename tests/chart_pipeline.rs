//! End-to-end pipeline tests over a recorded stock-data response.
//!
//! wire JSON → domain histories → window filter → axis planner → labels.

use chrono::NaiveDate;

use yenchart::domain::axis::{plan, TICK_INTERVALS};
use yenchart::domain::history::wire::StockDataResponse;
use yenchart::domain::history::{history_set_from_response, response_from_history_set};
use yenchart::domain::window::filter;
use yenchart::prelude::*;

const FIXTURE: &str = include_str!("fixtures/stock_data.json");

fn histories() -> HistorySet {
    let resp: StockDataResponse = serde_json::from_str(FIXTURE).expect("fixture parses");
    history_set_from_response(resp).expect("fixture is well-formed")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[test]
fn fixture_round_trips_through_domain() {
    let set = histories();
    let resp: StockDataResponse = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(response_from_history_set(&set), resp);
}

#[test]
fn window_sizes_follow_calendar_cutoffs() {
    let set = histories();
    let spyd = &set[&Ticker::from("spyd")];
    let counts: Vec<usize> = TimeWindow::ALL
        .iter()
        .map(|w| filter(spyd, *w, today()).len())
        .collect();
    // 1M, 3M, 6M, 1Y, 3Y
    assert_eq!(counts, [2, 4, 6, 7, 8]);
}

#[test]
fn three_month_window_starts_on_leap_day() {
    let set = histories();
    let spyd = filter(&set[&Ticker::from("spyd")], TimeWindow::Month3, today());
    assert_eq!(spyd.first_date(), Some(date(2024, 2, 29)));
}

#[test]
fn usd_axis_for_three_months() {
    let set = histories();
    let spyd = filter(&set[&Ticker::from("spyd")], TimeWindow::Month3, today());
    let axis = plan(&spyd, CurrencyKey::Usd);
    assert_eq!(axis.domain, (38.5, 41.0));
    assert_eq!(
        axis.tick_labels(CurrencyKey::Usd),
        ["$38.50", "$39.00", "$39.50", "$40.00", "$40.50", "$41.00"]
    );
}

#[test]
fn jpy_axis_for_three_months() {
    let set = histories();
    let spyd = filter(&set[&Ticker::from("spyd")], TimeWindow::Month3, today());
    let axis = plan(&spyd, CurrencyKey::Jpy);
    assert_eq!(axis.domain, (4200.0, 4450.0));
    assert_eq!(
        axis.tick_labels(CurrencyKey::Jpy),
        ["￥4,200", "￥4,250", "￥4,300", "￥4,350", "￥4,400", "￥4,450"]
    );
}

#[test]
fn every_window_and_currency_yields_a_containing_axis() {
    let set = histories();
    for series in set.values() {
        for window in TimeWindow::ALL {
            let filtered = filter(series, window, today());
            for key in CurrencyKey::ALL {
                let axis = plan(&filtered, key);
                assert_eq!(axis.ticks.len(), TICK_INTERVALS + 1);
                assert!(axis.ticks.windows(2).all(|w| w[0] <= w[1]));
                for v in filtered.values(key) {
                    assert!(axis.contains(v), "{} {window} {key}: {v} outside {:?}", series.ticker, axis.domain);
                }
            }
        }
    }
}

#[test]
fn chart_state_walks_through_selections() {
    let mut chart = ChartState::new(HistoryStore::from(histories()), today());
    assert_eq!(chart.selection().instrument, Ticker::from("spyd"));

    chart.set_window(TimeWindow::Month3);
    chart.set_currency(CurrencyKey::Usd);
    let view = chart.view().expect("spyd has history");
    assert_eq!(view.axis.domain, (38.5, 41.0));
    assert_eq!(view.plot_points().last(), Some(&(date(2024, 5, 31), 40.55)));

    chart.set_instrument(Ticker::from("hdv"));
    let view = chart.view().expect("hdv has history");
    assert_eq!(view.series.symbol, "HDV");
    assert_eq!(view.series.first_date(), Some(date(2024, 2, 29)));

    chart.set_today(date(2027, 1, 1));
    assert!(chart.view().unwrap().axis.is_empty());
}
