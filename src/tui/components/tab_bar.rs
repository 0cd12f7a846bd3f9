//! Category tab bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::catalog::Category;
use crate::tui::app::App;

/// Renders the shop title followed by one tab per menu category.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let strings = app.strings();

    let mut spans: Vec<Span> = vec![
        Span::styled(
            format!(" {} ", strings.menu),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
    ];

    for category in Category::ALL {
        let style = if category == app.active_category {
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(format!(" {} ", category.label(strings)), style));
        spans.push(Span::raw(" "));
    }

    let para = Paragraph::new(Line::from(spans));
    frame.render_widget(para, area);
}
