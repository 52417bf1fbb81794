use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use rust_decimal::Decimal;

use crate::{
    app::format::{format_change, format_price_with_code, format_quantity},
    models::PriceBoard,
};

pub const BRAND: &str = "CryptoZealandia";
pub const STANDARD_RATE_PERCENT: u8 = 4;
pub const DISCORD_URL: &str = "https://discord.com/users/1050266930063355914";
pub const CONTACT: &str = "Trades are handled directly: message me on Discord";

pub fn render(frame: &mut Frame, board: &PriceBoard, table_state: &mut TableState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(BRAND, Style::default().fg(Color::Cyan)),
        Span::raw("  P2P cryptocurrency trader  "),
        Span::styled(
            format!("Standard rate {}%", STANDARD_RATE_PERCENT),
            Style::default().fg(Color::Yellow),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    let header_cells = ["Name", "Symbol", "Held", "Price", "24h", "Value"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let currency = board.currency();
    let rows = board.assets().iter().map(|quoted| {
        let asset = quoted.asset();

        let (change, color_change) = match quoted.change_24h() {
            Some(change) if *change >= Decimal::ZERO => (format_change(*change), Color::Green),
            Some(change) => (format_change(*change), Color::Red),
            None => (String::from("-"), Color::DarkGray),
        };

        let cells = [
            Cell::from(asset.name()),
            Cell::from(asset.symbol()),
            Cell::from(format_quantity(asset.held_amount())),
            Cell::from(format_price_with_code(*quoted.price(), currency))
                .style(Style::default().fg(Color::Blue)),
            Cell::from(change).style(Style::default().fg(color_change)),
            Cell::from(format_price_with_code(quoted.market_value(), currency)),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Length(22),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Available Cryptocurrencies")
                .borders(Borders::ALL),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, chunks[1], table_state);

    frame.render_widget(status_line(board), chunks[2]);
}

/// Same text whichever refresh branch filled the board.
pub fn status_message(board: &PriceBoard) -> String {
    if *board.loading() {
        return String::from("Loading...");
    }

    match board.last_updated() {
        Some(at) => format!("Updated {}", at.format("%H:%M:%S")),
        None => String::from("Waiting for prices"),
    }
}

fn status_line(board: &PriceBoard) -> Paragraph<'static> {
    let color = if *board.loading() {
        Color::Yellow
    } else {
        Color::Reset
    };

    Paragraph::new(Line::from(vec![
        Span::styled(status_message(board), Style::default().fg(color)),
        Span::raw("  |  "),
        Span::raw(CONTACT),
        Span::raw(" "),
        Span::styled(DISCORD_URL, Style::default().fg(Color::Cyan)),
        Span::raw("  |  F5 refresh, q quit"),
    ]))
    .block(Block::default().borders(Borders::ALL))
}
