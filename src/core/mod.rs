//! Core business logic abstractions

pub mod analytics;
pub mod cache;
pub mod coins;
pub mod config;
pub mod log;
pub mod price;
pub mod series;

// Re-export main types for cleaner imports
pub use coins::Coin;
pub use price::{HistoryProvider, SpotPriceProvider};
pub use series::{PricePoint, PriceSeries};
