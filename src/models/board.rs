use chrono::{DateTime, Local};
use derive_getters::Getters;
use serde::Serialize;

use super::{QuotedAsset, TRACKED_ASSETS};

/// Which refresh branch produced the numbers currently on the board.
/// Kept off the screen and out of snapshots; logs only.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub enum BoardSource {
    #[default]
    Initial,
    Live,
    Synthetic,
}

/// Everything the display needs. Assets are swapped as a whole, never edited.
#[derive(Clone, Debug, Getters, PartialEq, Serialize)]
pub struct PriceBoard {
    currency: String,
    assets: Vec<QuotedAsset>,
    loading: bool,
    last_updated: Option<DateTime<Local>>,
    #[serde(skip)]
    source: BoardSource,
}

impl PriceBoard {
    pub fn new(currency: &str) -> Self {
        Self {
            currency: currency.to_string(),
            assets: TRACKED_ASSETS.iter().map(QuotedAsset::unquoted).collect(),
            loading: false,
            last_updated: None,
            source: BoardSource::Initial,
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn replace_assets(
        &mut self,
        assets: Vec<QuotedAsset>,
        source: BoardSource,
        updated_at: DateTime<Local>,
    ) {
        self.assets = assets;
        self.source = source;
        self.last_updated = Some(updated_at);
    }
}
