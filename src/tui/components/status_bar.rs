//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::receipt::format_currency;
use crate::tui::app::{App, Mode};

/// Renders the status bar: language, theme, item count, running total,
/// and the latest status message.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let strings = app.strings();
    let order = app.order();

    let mode_span = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::Black).bg(Color::Gray)),
        Mode::Insert => Span::styled(
            " INSERT ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
    };

    let status_span = if let Some(ref status) = app.status_message {
        Span::styled(
            format!(" {} ", status.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let total = Span::styled(
        format!(
            " {}: {} ",
            strings.total,
            format_currency(app.totals().total)
        ),
        Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    );

    let line = Line::from(vec![
        mode_span,
        Span::raw(format!(" {} ", app.language.label())),
        Span::raw("│"),
        Span::styled(
            format!(" {} ", app.theme.name()),
            Style::default().fg(palette.text),
        ),
        Span::raw("│"),
        Span::raw(format!(" {}{} ", strings.quantity, order.item_count())),
        total,
        status_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
