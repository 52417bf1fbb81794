pub mod asset;
pub mod board;

pub use asset::{QuotedAsset, TRACKED_ASSETS, TrackedAsset};
pub use board::{BoardSource, PriceBoard};
