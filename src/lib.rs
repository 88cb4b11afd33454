pub mod cli;
pub mod core;
pub mod providers;
pub mod render;

use crate::cli::dashboard::DashboardRequest;
use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com";
pub const DEFAULT_YAHOO_URL: &str = "https://query1.finance.yahoo.com";

pub enum AppCommand {
    Dashboard(DashboardRequest),
    Coins,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load_or_default()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Coins => cli::coins::run(),
        AppCommand::Dashboard(request) => {
            let spot_cache = Arc::new(Cache::new());
            let history_cache = Arc::new(Cache::new());

            let coingecko_base = config
                .providers
                .coingecko
                .as_ref()
                .map_or(DEFAULT_COINGECKO_URL, |p| &p.base_url);
            let spot_provider =
                providers::coingecko::CoinGeckoProvider::new(coingecko_base, spot_cache);

            let yahoo_base = config
                .providers
                .yahoo
                .as_ref()
                .map_or(DEFAULT_YAHOO_URL, |p| &p.base_url);
            let history_provider =
                providers::yahoo_finance::YahooHistoryProvider::new(yahoo_base, history_cache);

            cli::dashboard::run(request, &config, &spot_provider, &history_provider).await
        }
    }
}
