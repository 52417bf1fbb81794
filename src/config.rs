use std::{path::PathBuf, time::Duration};

use anyhow::{Result, bail};
use clap::Parser;
use derive_getters::Getters;

use crate::api::coingecko;

pub const DEFAULT_CURRENCY: &str = "nzd";
pub const DEFAULT_REFRESH_SECS: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILE: &str = "crypto-rates.log";

#[derive(Debug, Parser)]
#[command(name = "crypto-rates", version, about = "Live rates board for a P2P crypto desk")]
pub struct Cli {
    /// Local currency to quote in
    #[arg(long, env = "RATES_CURRENCY", default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Seconds between refreshes
    #[arg(long, env = "RATES_INTERVAL_SECS", default_value_t = DEFAULT_REFRESH_SECS)]
    pub interval: u64,

    #[arg(long, env = "RATES_API_URL", default_value = coingecko::BASE_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "RATES_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, env = "RATES_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Refresh once, print the board and exit
    #[arg(long)]
    pub once: bool,

    /// With --once, print JSON instead of a table
    #[arg(long, requires = "once")]
    pub json: bool,
}

#[derive(Clone, Debug, Getters)]
pub struct Config {
    currency: String,
    refresh_period: Duration,
    api_url: String,
    request_timeout: Duration,
    log_file: PathBuf,
    once: bool,
    json: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let currency = cli.currency.trim().to_lowercase();
        if currency.is_empty() || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            bail!("Invalid currency code '{}'", cli.currency);
        }

        if cli.interval == 0 {
            bail!("Refresh interval must be at least one second");
        }

        if cli.timeout == 0 {
            bail!("Request timeout must be at least one second");
        }

        let api_url = cli.api_url.trim().trim_end_matches('/').to_string();
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!("API URL must be http(s): '{}'", cli.api_url);
        }

        Ok(Self {
            currency,
            refresh_period: Duration::from_secs(cli.interval),
            api_url,
            request_timeout: Duration::from_secs(cli.timeout),
            log_file: cli.log_file,
            once: cli.once,
            json: cli.json,
        })
    }
}
