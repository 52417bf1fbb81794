use async_trait::async_trait;

use super::{QuoteFetchFailure, SimplePriceResponse};

/// Anything that can quote a batch of coins in one local currency.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch price, 24h change and market cap for every key in one request.
    async fn simple_price(
        &self,
        quote_keys: &[&str],
        currency: &str,
    ) -> Result<SimplePriceResponse, QuoteFetchFailure>;
}
