use anyhow::{Context, Result};

use crate::{
    app::format::{format_change, format_price_with_code, format_quantity},
    models::PriceBoard,
};

/// Plain text rendering of the board for `--once`.
pub fn board_lines(board: &PriceBoard) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.assets().len() + 2);

    lines.push(format!(
        "{:<14} {:<6} {:>10} {:>18} {:>9} {:>20}",
        "Name", "Symbol", "Held", "Price", "24h", "Value"
    ));

    for quoted in board.assets() {
        let asset = quoted.asset();
        let change = quoted
            .change_24h()
            .map(format_change)
            .unwrap_or_else(|| String::from("-"));

        lines.push(format!(
            "{:<14} {:<6} {:>10} {:>18} {:>9} {:>20}",
            asset.name(),
            asset.symbol(),
            format_quantity(asset.held_amount()),
            format_price_with_code(*quoted.price(), board.currency()),
            change,
            format_price_with_code(quoted.market_value(), board.currency()),
        ));
    }

    let updated = board
        .last_updated()
        .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| String::from("never"));
    lines.push(format!("Updated {}", updated));

    lines
}

pub fn board_json(board: &PriceBoard) -> Result<String> {
    serde_json::to_string_pretty(board).with_context(|| "Failed to serialize board")
}
