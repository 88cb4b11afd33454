use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::core::cache::Cache;
use crate::core::price::HistoryProvider;
use crate::core::series::{PricePoint, PriceSeries};

/// Daily close history from the Yahoo Finance chart endpoint.
pub struct YahooHistoryProvider {
    base_url: String,
    cache: Arc<Cache<PriceSeries>>,
}

impl YahooHistoryProvider {
    pub fn new(base_url: &str, cache: Arc<Cache<PriceSeries>>) -> Self {
        YahooHistoryProvider {
            base_url: base_url.to_string(),
            cache,
        }
    }
}

#[derive(Deserialize, Debug)]
struct YahooChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    result: Vec<ChartItem>,
}

#[derive(Deserialize, Debug)]
struct ChartItem {
    timestamp: Option<Vec<i64>>,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    close: Option<Vec<Option<f64>>>,
}

/// Pairs timestamps with closes, dropping null closes (Yahoo emits them for
/// days without a bar).
fn extract_series(item: &ChartItem) -> PriceSeries {
    let (Some(timestamps), Some(closes)) = (
        item.timestamp.as_ref(),
        item.indicators
            .as_ref()
            .and_then(|inds| inds.quote.first())
            .and_then(|q| q.close.as_ref()),
    ) else {
        return PriceSeries::default();
    };

    let points = timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| {
            let close = (*close)?;
            let date = Utc.timestamp_opt(*ts, 0).single()?.date_naive();
            Some(PricePoint { date, close })
        })
        .collect();

    PriceSeries::new(points)
}

#[async_trait]
impl HistoryProvider for YahooHistoryProvider {
    #[instrument(
        name = "YahooHistoryFetch",
        skip(self),
        fields(symbol = %symbol, start = %start, end = %end)
    )]
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let cache_key = format!("{symbol}:{start}:{end}");
        if let Some(cached) = self.cache.get(&cache_key).await {
            return Ok(cached);
        }

        // period2 is exclusive, so push it one day past the requested end.
        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = (end + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp();

        let url = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url, symbol, period1, period2
        );
        debug!("Requesting price history from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("coinlens/0.2")
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for symbol: {} URL: {}", e, symbol, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for symbol: {}",
                response.status(),
                symbol
            ));
        }

        let text = response.text().await?;
        let data: YahooChartResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", symbol, e))?;

        let item = data
            .chart
            .result
            .first()
            .ok_or_else(|| anyhow!("No price data found for symbol: {}", symbol))?;

        let series = extract_series(item);
        debug!("Parsed {} daily closes for {}", series.len(), symbol);

        self.cache.put(cache_key, series.clone()).await;

        Ok(series)
    }
}
