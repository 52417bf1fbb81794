use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

const ICON_CDN: &str = "https://unpkg.com/cryptocurrency-icons@0.18.1/svg/color";
const ICON_PLACEHOLDER: &str = "https://via.placeholder.com/48/2563EB/FFFFFF";

/// A coin on the board. The table below is fixed for the life of the process.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TrackedAsset {
    name: &'static str,
    symbol: &'static str,
    quote_key: &'static str,
    held_amount: Decimal,
}

pub const TRACKED_ASSETS: [TrackedAsset; 10] = [
    TrackedAsset::new("Bitcoin", "BTC", "bitcoin", dec!(0.5)),
    TrackedAsset::new("Ethereum", "ETH", "ethereum", dec!(8)),
    TrackedAsset::new("Litecoin", "LTC", "litecoin", dec!(40)),
    TrackedAsset::new("Tether", "USDT", "tether", dec!(5000)),
    TrackedAsset::new("Tron", "TRX", "tron", dec!(25000)),
    TrackedAsset::new("Binance Coin", "BNB", "binancecoin", dec!(12)),
    TrackedAsset::new("Cardano", "ADA", "cardano", dec!(7500)),
    TrackedAsset::new("Solana", "SOL", "solana", dec!(60)),
    TrackedAsset::new("Polkadot", "DOT", "polkadot", dec!(400)),
    TrackedAsset::new("Dogecoin", "DOGE", "dogecoin", dec!(20000)),
];

impl TrackedAsset {
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        quote_key: &'static str,
        held_amount: Decimal,
    ) -> Self {
        Self {
            name,
            symbol,
            quote_key,
            held_amount,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn quote_key(&self) -> &'static str {
        self.quote_key
    }

    pub fn held_amount(&self) -> Decimal {
        self.held_amount
    }

    pub fn icon_url(&self) -> String {
        format!("{}/{}.svg", ICON_CDN, self.symbol.to_lowercase())
    }

    /// Used when the CDN has no icon for the ticker.
    pub fn icon_fallback_url(&self) -> String {
        format!("{}?text={}", ICON_PLACEHOLDER, self.symbol)
    }
}

pub fn tracked_quote_keys() -> Vec<&'static str> {
    TRACKED_ASSETS.iter().map(|asset| asset.quote_key()).collect()
}

#[derive(Clone, Debug, Eq, Getters, PartialEq, Serialize, new)]
pub struct QuotedAsset {
    #[serde(flatten)]
    asset: TrackedAsset,
    price: Decimal,
    change_24h: Option<Decimal>,
}

impl QuotedAsset {
    /// Not yet quoted: zero price, unknown change.
    pub fn unquoted(asset: &TrackedAsset) -> Self {
        Self::new(*asset, Decimal::ZERO, None)
    }

    pub fn market_value(&self) -> Decimal {
        self.asset.held_amount() * self.price
    }
}
