use std::{ops::Range, sync::Arc};

use chrono::Local;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::watch;

use crate::{
    api::{QuoteFetchFailure, QuoteSource, SimplePriceResponse},
    models::{BoardSource, PriceBoard, QuotedAsset, TRACKED_ASSETS, TrackedAsset, asset},
};

pub const SYNTHETIC_PRICE_RANGE: Range<Decimal> = dec!(1000)..dec!(101000);
pub const SYNTHETIC_CHANGE_RANGE: Range<Decimal> = dec!(-5)..dec!(5);

// Same bounds as above, in hundredths.
pub(crate) const SYNTHETIC_PRICE_CENTS: Range<i64> = 100_000..10_100_000;
pub(crate) const SYNTHETIC_CHANGE_CENTS: Range<i64> = -500..500;

/// Result of one quote request, before it touches the board.
#[derive(Debug)]
pub enum RefreshOutcome {
    Quoted(SimplePriceResponse),
    Fallback(QuoteFetchFailure),
}

impl From<Result<SimplePriceResponse, QuoteFetchFailure>> for RefreshOutcome {
    fn from(result: Result<SimplePriceResponse, QuoteFetchFailure>) -> Self {
        match result {
            Ok(response) => RefreshOutcome::Quoted(response),
            Err(failure) => RefreshOutcome::Fallback(failure),
        }
    }
}

impl RefreshOutcome {
    pub fn source(&self) -> BoardSource {
        match self {
            RefreshOutcome::Quoted(_) => BoardSource::Live,
            RefreshOutcome::Fallback(_) => BoardSource::Synthetic,
        }
    }

    pub fn apply<R: Rng>(
        &self,
        assets: &[TrackedAsset],
        currency: &str,
        rng: &mut R,
    ) -> Vec<QuotedAsset> {
        match self {
            RefreshOutcome::Quoted(response) => quoted_assets(assets, response, currency),
            RefreshOutcome::Fallback(_) => synthetic_assets(assets, rng),
        }
    }
}

/// Missing coins or fields read as zero.
pub fn quoted_assets(
    assets: &[TrackedAsset],
    response: &SimplePriceResponse,
    currency: &str,
) -> Vec<QuotedAsset> {
    assets
        .iter()
        .map(|asset| {
            let quote = response.quote(asset.quote_key());
            let price = quote
                .and_then(|q| q.price(currency))
                .unwrap_or(Decimal::ZERO);
            let change = quote
                .and_then(|q| q.change_24h(currency))
                .unwrap_or(Decimal::ZERO);

            QuotedAsset::new(*asset, price, Some(change))
        })
        .collect()
}

pub fn synthetic_assets<R: Rng>(assets: &[TrackedAsset], rng: &mut R) -> Vec<QuotedAsset> {
    assets
        .iter()
        .map(|asset| {
            let price = Decimal::new(rng.gen_range(SYNTHETIC_PRICE_CENTS), 2);
            let change = Decimal::new(rng.gen_range(SYNTHETIC_CHANGE_CENTS), 2);

            QuotedAsset::new(*asset, price, Some(change))
        })
        .collect()
}

/// Owns the board and keeps its prices current against a quote source.
pub struct PriceRefresher {
    source: Arc<dyn QuoteSource>,
    currency: String,
    board: watch::Sender<PriceBoard>,
}

impl PriceRefresher {
    pub fn new(source: Arc<dyn QuoteSource>, currency: &str) -> Self {
        let (board, _) = watch::channel(PriceBoard::new(currency));

        Self {
            source,
            currency: currency.to_string(),
            board,
        }
    }

    pub fn board(&self) -> PriceBoard {
        self.board.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PriceBoard> {
        self.board.subscribe()
    }

    /// Re-quote every tracked asset. Never fails: a broken quote source
    /// puts synthetic numbers on the board instead.
    pub async fn refresh(&self) {
        self.board.send_modify(|board| board.set_loading(true));

        let quote_keys = asset::tracked_quote_keys();
        let outcome: RefreshOutcome = self
            .source
            .simple_price(&quote_keys, &self.currency)
            .await
            .into();

        match &outcome {
            RefreshOutcome::Quoted(response) => {
                log::debug!(
                    "Quoted {} of {} assets in {}",
                    response.len(),
                    TRACKED_ASSETS.len(),
                    self.currency
                );
            }
            RefreshOutcome::Fallback(failure) => {
                log::warn!("Quote fetch failed, showing synthetic prices: {}", failure);
            }
        }

        let assets = outcome.apply(&TRACKED_ASSETS, &self.currency, &mut rand::thread_rng());
        let source = outcome.source();

        self.board.send_modify(|board| {
            board.replace_assets(assets, source, Local::now());
            board.set_loading(false);
        });
    }
}
