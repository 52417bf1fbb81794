use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use super::{
    QuoteFetchFailure, QuoteSource,
    coingecko_dto::SimplePriceResponse,
    utils::{make_request, parse_response_object},
};

pub const BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Clone, Debug)]
pub struct CoinGeckoApi {
    client: Client,
    base_url: String,
}

impl CoinGeckoApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

pub fn simple_price_params(quote_keys: &[&str], currency: &str) -> String {
    format!(
        "ids={}&vs_currencies={}&include_24hr_change=true&include_market_cap=true",
        quote_keys.join(","),
        currency
    )
}

#[async_trait]
impl QuoteSource for CoinGeckoApi {
    async fn simple_price(
        &self,
        quote_keys: &[&str],
        currency: &str,
    ) -> Result<SimplePriceResponse, QuoteFetchFailure> {
        let params = simple_price_params(quote_keys, currency);
        let res = make_request(&self.client, &self.base_url, "simple/price", &params).await?;

        parse_response_object::<SimplePriceResponse>(res)
    }
}
