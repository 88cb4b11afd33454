//! PNG chart rendering with plotters: closing price line, price with moving
//! averages, and the daily-return histogram.

use crate::core::analytics::{HistogramBin, PriceAnalysis};
use anyhow::{Result, anyhow, bail};
use plotters::prelude::*;
use std::path::Path;

pub const CHART_WIDTH: u32 = 1000;
pub const CHART_HEIGHT: u32 = 400;

// Matplotlib default palette, as used by the dashboard this replaces.
const CLOSE_COLOR: RGBColor = RGBColor(31, 119, 180);
const MA_SHORT_COLOR: RGBColor = RGBColor(255, 127, 14);
const MA_LONG_COLOR: RGBColor = RGBColor(44, 160, 44);

/// Y-axis bounds with 10% padding around the observed values.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let padding = (max - min).max(1e-8) * 0.1;
    ((min - padding).max(0.0), max + padding)
}

pub fn render_closing_price(analysis: &PriceAnalysis, coin_name: &str, path: &Path) -> Result<()> {
    if analysis.rows.len() < 2 {
        bail!("Not enough price data to render a chart (minimum 2 points)");
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill canvas: {}", e))?;

    let x_min = analysis.rows[0].date;
    let x_max = analysis.rows[analysis.rows.len() - 1].date;
    let (y_min, y_max) = padded_range(analysis.rows.iter().map(|r| r.close));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{coin_name} Closing Price"),
            ("sans-serif", 30).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price (USD)")
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(
            analysis.rows.iter().map(|r| (r.date, r.close)),
            &CLOSE_COLOR,
        ))
        .map_err(|e| anyhow!("Failed to draw close series: {}", e))?
        .label("Close")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CLOSE_COLOR));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("Failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| anyhow!("Failed to render chart: {}", e))?;
    Ok(())
}

pub fn render_moving_averages(
    analysis: &PriceAnalysis,
    coin_name: &str,
    path: &Path,
) -> Result<()> {
    if analysis.rows.len() < 2 {
        bail!("Not enough price data to render a chart (minimum 2 points)");
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill canvas: {}", e))?;

    let x_min = analysis.rows[0].date;
    let x_max = analysis.rows[analysis.rows.len() - 1].date;
    let (y_min, y_max) = padded_range(
        analysis
            .rows
            .iter()
            .flat_map(|r| [Some(r.close), r.ma_short, r.ma_long])
            .flatten(),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("{coin_name} Price with Moving Averages"),
            ("sans-serif", 30).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Price (USD)")
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(
            analysis.rows.iter().map(|r| (r.date, r.close)),
            &CLOSE_COLOR,
        ))
        .map_err(|e| anyhow!("Failed to draw close series: {}", e))?
        .label("Close")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CLOSE_COLOR));

    let ma_short: Vec<_> = analysis
        .rows
        .iter()
        .filter_map(|r| r.ma_short.map(|ma| (r.date, ma)))
        .collect();
    if !ma_short.is_empty() {
        chart
            .draw_series(LineSeries::new(ma_short, &MA_SHORT_COLOR))
            .map_err(|e| anyhow!("Failed to draw MA20 series: {}", e))?
            .label("20-day MA")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MA_SHORT_COLOR));
    }

    let ma_long: Vec<_> = analysis
        .rows
        .iter()
        .filter_map(|r| r.ma_long.map(|ma| (r.date, ma)))
        .collect();
    if !ma_long.is_empty() {
        chart
            .draw_series(LineSeries::new(ma_long, &MA_LONG_COLOR))
            .map_err(|e| anyhow!("Failed to draw MA50 series: {}", e))?
            .label("50-day MA")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MA_LONG_COLOR));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| anyhow!("Failed to draw legend: {}", e))?;

    root.present()
        .map_err(|e| anyhow!("Failed to render chart: {}", e))?;
    Ok(())
}

pub fn render_returns_histogram(
    bins: &[HistogramBin],
    coin_name: &str,
    path: &Path,
) -> Result<()> {
    if bins.is_empty() {
        bail!("No daily returns to render a histogram for");
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Failed to fill canvas: {}", e))?;

    let x_min = bins[0].lo;
    let mut x_max = bins[bins.len() - 1].hi;
    if x_max <= x_min {
        // Degenerate single-value histogram, widen so the bar is visible.
        x_max = x_min + 1e-8;
    }
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Histogram of {coin_name} Daily Returns"),
            ("sans-serif", 30).into_font(),
        )
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)
        .map_err(|e| anyhow!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .x_desc("Daily Return")
        .y_desc("Frequency")
        .draw()
        .map_err(|e| anyhow!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(bins.iter().map(|bin| {
            let hi = if bin.hi > bin.lo { bin.hi } else { x_max };
            Rectangle::new(
                [(bin.lo, 0.0), (hi, bin.count as f64)],
                CLOSE_COLOR.mix(0.6).filled(),
            )
        }))
        .map_err(|e| anyhow!("Failed to draw histogram bars: {}", e))?;

    root.present()
        .map_err(|e| anyhow!("Failed to render chart: {}", e))?;
    Ok(())
}
