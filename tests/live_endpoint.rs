//! Smoke test against a running stock-data backend.
//!
//! Run with: cargo test --test live_endpoint -- --ignored
//! The backend is read from `YENCHART_API_URL` (a `.env` file works too).

use yenchart::prelude::*;

fn live_client() -> ChartClient {
    dotenvy::dotenv().ok();
    ChartClientBuilder::from_env()
        .build()
        .expect("client builds")
}

#[tokio::test]
#[ignore]
async fn live_backend_serves_a_chartable_default() {
    let client = live_client();
    let histories = client.histories().fetch_all().await.expect("fetch stock data");
    assert!(!histories.is_empty(), "backend returned no instruments");

    let today = market_date(chrono::Utc::now());
    let chart = ChartState::new(HistoryStore::from(histories), today);
    let view = chart.view().expect("default instrument present");
    assert_eq!(view.axis.ticks.len(), 6);
    for v in view.series.values(view.selection.currency) {
        assert!(view.axis.contains(v));
    }
}
