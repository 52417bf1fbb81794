pub mod coingecko;
pub mod coingecko_dto;
pub mod error;
pub mod source;
pub mod utils;

pub use coingecko::CoinGeckoApi;
pub use coingecko_dto::{CoinQuoteDto, SimplePriceResponse};
pub use error::QuoteFetchFailure;
pub use source::QuoteSource;
