#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::{SeedableRng, rngs::StdRng};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use crate::{
        api::{QuoteFetchFailure, QuoteSource},
        app::{
            PriceRefresher, RefreshOutcome,
            format::{format_change, format_price_with_code},
            refresher::{
                SYNTHETIC_CHANGE_CENTS, SYNTHETIC_CHANGE_RANGE, SYNTHETIC_PRICE_CENTS,
                SYNTHETIC_PRICE_RANGE, quoted_assets,
            },
        },
        models::{BoardSource, TRACKED_ASSETS},
        test::stub::{GatedSource, StubSource, response},
    };

    fn bitcoin_only() -> serde_json::Value {
        json!({ "bitcoin": { "nzd": 24631, "nzd_24h_change": 1.2 } })
    }

    #[test]
    fn quoted_branch_defaults_missing_keys_to_zero() {
        let assets = quoted_assets(&TRACKED_ASSETS, &response(bitcoin_only()), "nzd");

        assert_eq!(assets.len(), TRACKED_ASSETS.len());
        assert_eq!(*assets[0].price(), dec!(24631));
        assert_eq!(*assets[0].change_24h(), Some(dec!(1.2)));
        for quoted in &assets[1..] {
            assert_eq!(*quoted.price(), Decimal::ZERO);
            assert_eq!(*quoted.change_24h(), Some(Decimal::ZERO));
        }
    }

    #[test]
    fn fallback_branch_stays_in_synthetic_ranges() {
        let outcome = RefreshOutcome::Fallback(QuoteFetchFailure::Malformed(String::from("x")));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let assets = outcome.apply(&TRACKED_ASSETS, "nzd", &mut rng);
            assert_eq!(assets.len(), TRACKED_ASSETS.len());
            for quoted in &assets {
                assert!(SYNTHETIC_PRICE_RANGE.contains(quoted.price()));
                let change = quoted.change_24h().unwrap();
                assert!(SYNTHETIC_CHANGE_RANGE.contains(&change));
            }
        }
        assert_eq!(outcome.source(), BoardSource::Synthetic);
    }

    #[test]
    fn synthetic_cents_match_decimal_bounds() {
        let cents = |range: &std::ops::Range<i64>| {
            Decimal::new(range.start, 2)..Decimal::new(range.end, 2)
        };

        assert_eq!(cents(&SYNTHETIC_PRICE_CENTS), SYNTHETIC_PRICE_RANGE);
        assert_eq!(cents(&SYNTHETIC_CHANGE_CENTS), SYNTHETIC_CHANGE_RANGE);
    }

    #[test]
    fn held_amounts_survive_both_branches() {
        let quoted = RefreshOutcome::Quoted(response(bitcoin_only()));
        let fallback = RefreshOutcome::Fallback(QuoteFetchFailure::Malformed(String::new()));
        let mut rng = StdRng::seed_from_u64(1);

        for outcome in [quoted, fallback] {
            let assets = outcome.apply(&TRACKED_ASSETS, "nzd", &mut rng);
            for (quoted, tracked) in assets.iter().zip(TRACKED_ASSETS.iter()) {
                assert_eq!(quoted.asset(), tracked);
            }
        }
    }

    #[test]
    fn board_starts_unquoted() {
        let refresher = PriceRefresher::new(StubSource::failing(), "nzd");
        let board = refresher.board();

        assert!(!*board.loading());
        assert_eq!(*board.source(), BoardSource::Initial);
        assert!(board.last_updated().is_none());
        assert_eq!(board.assets().len(), 10);
        assert!(board.assets().iter().all(|a| a.price().is_zero()));
        assert!(board.assets().iter().all(|a| a.change_24h().is_none()));
    }

    #[tokio::test]
    async fn bitcoin_only_response_renders_expected_rows() {
        let refresher = PriceRefresher::new(StubSource::ok(bitcoin_only()), "nzd");

        refresher.refresh().await;
        let board = refresher.board();

        assert_eq!(*board.source(), BoardSource::Live);
        assert!(board.last_updated().is_some());

        let bitcoin = &board.assets()[0];
        assert_eq!(bitcoin.asset().symbol(), "BTC");
        assert_eq!(format_price_with_code(*bitcoin.price(), "nzd"), "$24,631 NZD");
        assert_eq!(format_change(bitcoin.change_24h().unwrap()), "↗1.20%");

        for quoted in &board.assets()[1..] {
            assert_eq!(format_price_with_code(*quoted.price(), "nzd"), "$0 NZD");
            assert_eq!(*quoted.change_24h(), Some(Decimal::ZERO));
        }
    }

    #[tokio::test]
    async fn failure_shows_synthetic_prices_and_clears_loading() {
        let refresher = PriceRefresher::new(StubSource::failing(), "nzd");

        refresher.refresh().await;
        let board = refresher.board();

        assert!(!*board.loading());
        assert_eq!(*board.source(), BoardSource::Synthetic);
        for quoted in board.assets() {
            assert!(!quoted.price().is_zero());
            assert!(SYNTHETIC_PRICE_RANGE.contains(quoted.price()));
        }
    }

    #[tokio::test]
    async fn network_error_never_reaches_the_caller() {
        let source: Arc<dyn QuoteSource> = Arc::new(
            crate::api::CoinGeckoApi::new("http://127.0.0.1:9", std::time::Duration::from_secs(2))
                .unwrap(),
        );
        let refresher = PriceRefresher::new(source, "nzd");

        refresher.refresh().await;
        let board = refresher.board();

        assert!(!*board.loading());
        assert!(board.assets().iter().all(|a| !a.price().is_zero()));
    }

    #[tokio::test]
    async fn loading_is_set_only_while_in_flight() {
        let source = GatedSource::new(bitcoin_only());
        let refresher = Arc::new(PriceRefresher::new(source.clone(), "nzd"));
        assert!(!*refresher.board().loading());

        let task = {
            let refresher = refresher.clone();
            tokio::spawn(async move { refresher.refresh().await })
        };

        source.started.notified().await;
        assert!(*refresher.board().loading());

        source.release.notify_one();
        task.await.unwrap();
        assert!(!*refresher.board().loading());
    }

    #[tokio::test]
    async fn identical_responses_give_identical_assets() {
        let refresher = PriceRefresher::new(StubSource::ok(bitcoin_only()), "nzd");

        refresher.refresh().await;
        let first = refresher.board();
        refresher.refresh().await;
        let second = refresher.board();

        assert_eq!(first.assets(), second.assets());
        assert_eq!(first.source(), second.source());
        assert_eq!(first.loading(), second.loading());
    }

    #[tokio::test]
    async fn subscribers_see_each_replacement() {
        let refresher = PriceRefresher::new(StubSource::ok(bitcoin_only()), "nzd");
        let mut board = refresher.subscribe();

        refresher.refresh().await;

        assert!(board.has_changed().unwrap());
        assert_eq!(*board.borrow_and_update().assets()[0].price(), dec!(24631));
    }
}
