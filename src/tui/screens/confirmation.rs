//! Order confirmation screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rust_decimal::Decimal;

use crate::receipt::format_currency;
use crate::tui::app::App;

/// Renders the confirmation for a saved order.
pub fn render(frame: &mut Frame, app: &App, order_number: u16, total: Decimal) {
    let palette = app.palette();
    let strings = app.strings();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(9),
            Constraint::Fill(1),
        ])
        .split(frame.area());
    let area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(40),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.primary));

    let lines = vec![
        Line::from(Span::styled(
            strings.order_confirmed,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("{}: ", strings.order_number)),
            Span::styled(
                format!("#{order_number}"),
                Style::default()
                    .fg(palette.on_primary)
                    .bg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("{}: {}", strings.total, format_currency(total))),
        Line::from(""),
        Line::from(strings.thank_you),
        Line::from(Span::styled(
            format!("[Enter] {}", strings.back_to_menu),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(para, area);
}
