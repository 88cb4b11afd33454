//! Derived-column computations and trend classification over a price series.

use crate::core::series::PriceSeries;
use chrono::NaiveDate;
use std::fmt::Display;

pub const SHORT_WINDOW: usize = 20;
pub const LONG_WINDOW: usize = 50;

/// One day of the joined analysis table: close plus derived columns.
#[derive(Debug, Clone)]
pub struct AnalysisRow {
    pub date: NaiveDate,
    pub close: f64,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub daily_return: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Bullish,
    Bearish,
    Mixed,
}

impl Trend {
    /// Strictly bullish when close > MA20 > MA50, strictly bearish when
    /// close < MA20 < MA50. Everything else, including an undefined MA,
    /// is mixed.
    pub fn classify(close: f64, ma_short: Option<f64>, ma_long: Option<f64>) -> Self {
        match (ma_short, ma_long) {
            (Some(short), Some(long)) if close > short && short > long => Trend::Bullish,
            (Some(short), Some(long)) if close < short && short < long => Trend::Bearish,
            _ => Trend::Mixed,
        }
    }
}

impl Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Trend::Bullish => "Bullish",
                Trend::Bearish => "Bearish",
                Trend::Mixed => "Mixed",
            }
        )
    }
}

/// The full analysis table for a coin over the selected range.
#[derive(Debug)]
pub struct PriceAnalysis {
    pub rows: Vec<AnalysisRow>,
}

impl PriceAnalysis {
    pub fn from_series(series: &PriceSeries) -> Self {
        let ma_short = series.rolling_mean(SHORT_WINDOW);
        let ma_long = series.rolling_mean(LONG_WINDOW);
        let returns = series.pct_change();

        let rows = series
            .points()
            .iter()
            .enumerate()
            .map(|(i, point)| AnalysisRow {
                date: point.date,
                close: point.close,
                ma_short: ma_short[i],
                ma_long: ma_long[i],
                daily_return: returns[i],
            })
            .collect();

        Self { rows }
    }

    pub fn latest(&self) -> Option<&AnalysisRow> {
        self.rows.last()
    }

    /// Last `n` rows, or all rows when the table is shorter.
    pub fn tail(&self, n: usize) -> &[AnalysisRow] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }

    pub fn trend(&self) -> Option<Trend> {
        self.latest()
            .map(|row| Trend::classify(row.close, row.ma_short, row.ma_long))
    }

    /// Defined daily returns only, for the histogram.
    pub fn daily_returns(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.daily_return).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over the observed value range. A degenerate range
/// (all values equal, or a single value) collapses to one bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span <= 0.0 {
        return vec![HistogramBin {
            lo: min,
            hi: max,
            count: values.len(),
        }];
    }

    let width = span / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        // The max value lands in the last bin.
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lo: min + i as f64 * width,
            hi: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}
