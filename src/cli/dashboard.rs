use super::ui;
use crate::core::analytics::{self, PriceAnalysis, Trend};
use crate::core::coins::{self, Coin};
use crate::core::config::AppConfig;
use crate::core::price::{HistoryProvider, SpotPriceProvider};
use crate::render::charts;
use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Utc};
use comfy_table::Cell;
use std::path::PathBuf;
use tracing::debug;

const TABLE_TAIL_ROWS: usize = 10;
const RETURN_HISTOGRAM_BINS: usize = 50;

/// Earliest selectable start of the date range.
fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

pub struct DashboardRequest {
    pub coin: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub out_dir: Option<PathBuf>,
}

/// Clamps the requested range to the supported bounds and rejects inverted
/// ranges. Runs before any network call.
fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(NaiveDate, NaiveDate)> {
    let earliest = earliest_date();
    let start = start.unwrap_or(earliest).clamp(earliest, today);
    let end = end.unwrap_or(today).clamp(earliest, today);

    if start > end {
        bail!("Start date must be before end date.");
    }
    Ok((start, end))
}

fn resolve_coin(request: &DashboardRequest, config: &AppConfig) -> Result<&'static Coin> {
    let query = request
        .coin
        .as_deref()
        .or(config.default_coin.as_deref())
        .unwrap_or("Bitcoin");
    coins::find(query).ok_or_else(|| {
        anyhow::anyhow!("Unknown coin '{query}'. Run `coinlens coins` to list supported coins.")
    })
}

pub async fn run(
    request: DashboardRequest,
    config: &AppConfig,
    spot_provider: &(dyn SpotPriceProvider + Send + Sync),
    history_provider: &(dyn HistoryProvider + Send + Sync),
) -> Result<()> {
    let coin = resolve_coin(&request, config)?;
    let today = Utc::now().date_naive();
    let (start, end) = resolve_range(request.start, request.end, today)?;
    debug!(
        "Rendering dashboard for {} from {} to {}",
        coin.name, start, end
    );

    // Both sources are independent, fetch them together.
    let spinner = ui::new_spinner("Fetching data...");
    let (history, spot) = futures::join!(
        history_provider.fetch_history(coin.yahoo_ticker, start, end),
        spot_provider.fetch_spot(coin.coingecko_id)
    );
    spinner.finish_and_clear();

    let series = history?;
    // Spot price is best-effort; the dashboard renders without it.
    let spot = match spot {
        Ok(price) => Some(price),
        Err(e) => {
            println!(
                "{}",
                ui::style_text(
                    &format!("Real-time price unavailable: {e}"),
                    ui::StyleType::Warning
                )
            );
            None
        }
    };

    println!(
        "\n{}",
        ui::style_text(
            &format!("{} {} Price Dashboard", coin.symbol, coin.name),
            ui::StyleType::Title
        )
    );
    println!(
        "{}",
        ui::style_text(
            &format!("{start} to {end} · {} trading days", series.len()),
            ui::StyleType::Subtle
        )
    );

    if let Some(price) = spot {
        println!(
            "\n{} {}",
            ui::style_text(
                &format!("Current {} Price (USD):", coin.name),
                ui::StyleType::MetricLabel
            ),
            ui::style_text(&ui::format_usd(price), ui::StyleType::MetricValue)
        );
    }

    if series.is_empty() {
        println!(
            "\n{}",
            ui::style_text(
                "No data available for the selected range.",
                ui::StyleType::Warning
            )
        );
        return Ok(());
    }

    let analysis = PriceAnalysis::from_series(&series);

    ui::print_separator();
    println!(
        "{}",
        ui::style_text(
            &format!("Data Table (Last {TABLE_TAIL_ROWS} Days)"),
            ui::StyleType::MetricLabel
        )
    );
    println!("{}", tail_table(&analysis));

    ui::print_separator();
    println!(
        "{}",
        ui::style_text("Quick Analysis", ui::StyleType::MetricLabel)
    );
    print_quick_analysis(&analysis);

    write_charts(&analysis, coin, &request, config);

    Ok(())
}

fn tail_table(analysis: &PriceAnalysis) -> comfy_table::Table {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("Close"),
        ui::header_cell("MA 20"),
        ui::header_cell("MA 50"),
        ui::header_cell("Daily Return"),
    ]);

    for row in analysis.tail(TABLE_TAIL_ROWS) {
        let close = Cell::new(ui::format_usd(row.close))
            .set_alignment(comfy_table::CellAlignment::Right);
        let ma_short = ui::format_optional_cell(row.ma_short, ui::format_usd);
        let ma_long = ui::format_optional_cell(row.ma_long, ui::format_usd);
        let daily_return = match row.daily_return {
            Some(change) => ui::change_cell(change),
            None => ui::format_optional_cell(None::<f64>, |_| String::new()),
        };

        table.add_row(vec![
            Cell::new(row.date.to_string()),
            close,
            ma_short,
            ma_long,
            daily_return,
        ]);
    }

    table
}

fn print_quick_analysis(analysis: &PriceAnalysis) {
    let Some(latest) = analysis.latest() else {
        return;
    };

    println!("- Last Close: {}", ui::format_usd(latest.close));
    println!(
        "- 20-day MA: {}",
        latest
            .ma_short
            .map_or("N/A".to_string(), ui::format_usd)
    );
    println!(
        "- 50-day MA: {}",
        latest.ma_long.map_or("N/A".to_string(), ui::format_usd)
    );

    let trend = Trend::classify(latest.close, latest.ma_short, latest.ma_long);
    let (description, style) = match trend {
        Trend::Bullish => (
            "Price above both moving averages.",
            ui::StyleType::Positive,
        ),
        Trend::Bearish => (
            "Price below both moving averages.",
            ui::StyleType::Negative,
        ),
        Trend::Mixed => (
            "Price between moving averages.",
            ui::StyleType::MetricValue,
        ),
    };
    println!(
        "\n{}",
        ui::style_text(&format!("{trend} trend: {description}"), style)
    );
}

/// Renders the three chart files. Chart output is best-effort: a failure
/// (for example, an unwritable directory) is reported but does not fail the
/// dashboard.
fn write_charts(
    analysis: &PriceAnalysis,
    coin: &Coin,
    request: &DashboardRequest,
    config: &AppConfig,
) {
    let out_dir = request
        .out_dir
        .clone()
        .or_else(|| config.output_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))
    {
        println!("{}", ui::style_text(&format!("{e:#}"), ui::StyleType::Warning));
        return;
    }

    let slug = coin.yahoo_ticker.to_lowercase();
    let bins = analytics::histogram(&analysis.daily_returns(), RETURN_HISTOGRAM_BINS);

    let close_path = out_dir.join(format!("{slug}_close.png"));
    let ma_path = out_dir.join(format!("{slug}_ma.png"));
    let returns_path = out_dir.join(format!("{slug}_returns.png"));

    let results = [
        (
            charts::render_closing_price(analysis, coin.name, &close_path),
            close_path,
        ),
        (
            charts::render_moving_averages(analysis, coin.name, &ma_path),
            ma_path,
        ),
        (
            charts::render_returns_histogram(&bins, coin.name, &returns_path),
            returns_path,
        ),
    ];

    let mut written = Vec::new();
    for (result, path) in results {
        match result {
            Ok(()) => written.push(path),
            Err(e) => println!(
                "{}",
                ui::style_text(
                    &format!("Chart not rendered ({}): {e}", path.display()),
                    ui::StyleType::Warning
                )
            ),
        }
    }

    if !written.is_empty() {
        ui::print_separator();
        println!("{}", ui::style_text("Charts", ui::StyleType::MetricLabel));
        for path in written {
            println!("- {}", path.display());
        }
    }
}
