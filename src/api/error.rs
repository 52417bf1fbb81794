use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while asking the quote source for prices.
#[derive(Debug, Error)]
pub enum QuoteFetchFailure {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(StatusCode),

    #[error("Unexpected API response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for QuoteFetchFailure {
    fn from(err: serde_json::Error) -> Self {
        QuoteFetchFailure::Malformed(err.to_string())
    }
}
