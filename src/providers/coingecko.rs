use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::core::cache::Cache;
use crate::core::price::SpotPriceProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Real-time USD spot prices from the CoinGecko `simple/price` endpoint.
pub struct CoinGeckoProvider {
    base_url: String,
    cache: Arc<Cache<f64>>,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str, cache: Arc<Cache<f64>>) -> Self {
        CoinGeckoProvider {
            base_url: base_url.to_string(),
            cache,
        }
    }
}

// Response shape: { "<coin id>": { "usd": 12345.67 } }
#[derive(Deserialize, Debug)]
struct SimplePriceEntry {
    usd: Option<f64>,
}

#[async_trait]
impl SpotPriceProvider for CoinGeckoProvider {
    #[instrument(
        name = "CoinGeckoSpotFetch",
        skip(self),
        fields(id = %id)
    )]
    async fn fetch_spot(&self, id: &str) -> Result<f64> {
        if let Some(cached) = self.cache.get(id).await {
            return Ok(cached);
        }

        let url = format!(
            "{}/api/v3/simple/price?ids={}&vs_currencies=usd",
            self.base_url, id
        );
        debug!("Requesting spot price from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("coinlens/0.2")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for coin: {} URL: {}", e, id, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for coin: {}",
                response.status(),
                id
            ));
        }

        let data = response
            .json::<HashMap<String, SimplePriceEntry>>()
            .await?;
        let price = data
            .get(id)
            .and_then(|entry| entry.usd)
            .ok_or_else(|| anyhow!("No spot price found for coin: {}", id))?;

        self.cache.put(id.to_string(), price).await;

        Ok(price)
    }
}
