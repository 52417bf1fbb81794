use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Body of `/simple/price`: coin id -> per-currency fields.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SimplePriceResponse {
    coins: HashMap<String, CoinQuoteDto>,
}

/// Fields for one coin, keyed `<cur>`, `<cur>_24h_change` and `<cur>_market_cap`.
/// The API sends `null` for unknown values.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CoinQuoteDto {
    fields: HashMap<String, Option<Decimal>>,
}

impl SimplePriceResponse {
    pub fn quote(&self, quote_key: &str) -> Option<&CoinQuoteDto> {
        self.coins.get(quote_key)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }
}

impl CoinQuoteDto {
    pub fn price(&self, currency: &str) -> Option<Decimal> {
        self.field(currency)
    }

    pub fn change_24h(&self, currency: &str) -> Option<Decimal> {
        self.field(&format!("{}_24h_change", currency))
    }

    pub fn market_cap(&self, currency: &str) -> Option<Decimal> {
        self.field(&format!("{}_market_cap", currency))
    }

    fn field(&self, key: &str) -> Option<Decimal> {
        self.fields.get(key).copied().flatten()
    }
}
