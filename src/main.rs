use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crypto_rates_tui::{
    api::CoinGeckoApi,
    app::{App, PriceRefresher, report},
    config::{Cli, Config},
    logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_cli(Cli::parse())?;

    if *config.once() {
        logging::init(None)?;
    } else {
        logging::init(Some(config.log_file().as_path()))?;
    }

    let source = CoinGeckoApi::new(config.api_url(), *config.request_timeout())?;
    let refresher = Arc::new(PriceRefresher::new(Arc::new(source), config.currency()));

    if *config.once() {
        refresher.refresh().await;
        let board = refresher.board();

        if *config.json() {
            println!("{}", report::board_json(&board)?);
        } else {
            for line in report::board_lines(&board) {
                println!("{}", line);
            }
        }

        return Ok(());
    }

    log::info!(
        "Starting rates board in {} against {}",
        config.currency(),
        config.api_url()
    );

    let mut app = App::new(refresher);
    app.run(*config.refresh_period()).await
}
