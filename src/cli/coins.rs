use super::ui;
use crate::core::coins::COINS;
use anyhow::Result;
use comfy_table::Cell;

/// Lists the supported coins as a table.
pub fn run() -> Result<()> {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Name"),
        ui::header_cell("Symbol"),
        ui::header_cell("CoinGecko Id"),
        ui::header_cell("Yahoo Ticker"),
    ]);

    for coin in COINS {
        table.add_row(vec![
            Cell::new(coin.name),
            Cell::new(coin.symbol),
            Cell::new(coin.coingecko_id),
            Cell::new(coin.yahoo_ticker),
        ]);
    }

    println!("{table}");
    println!(
        "\n{}",
        ui::style_text(
            &format!("{} coins supported", COINS.len()),
            ui::StyleType::Subtle
        )
    );

    Ok(())
}
