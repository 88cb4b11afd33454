//! Data source abstractions for spot prices and daily close history.

use crate::core::series::PriceSeries;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Current USD price for a coin, looked up by source-specific id.
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    async fn fetch_spot(&self, id: &str) -> Result<f64>;
}

/// Daily closing prices for a ticker over an inclusive date range.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries>;
}
