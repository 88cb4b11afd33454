pub mod coingecko;
pub mod yahoo_finance;

// Re-export the cache so providers share one import path
pub use crate::core::cache::Cache;
