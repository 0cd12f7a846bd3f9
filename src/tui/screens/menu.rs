//! Menu screen layout and rendering.

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::order::percent::{DISCOUNT_PRESETS, TIP_PRESETS};
use crate::receipt::{RECEIPT_HEADER_ROWS, Ticket, format_currency, render_receipt};
use crate::tui::app::{App, Focus, Mode};
use crate::tui::components::{status_bar, tab_bar};
use crate::tui::input::PercentInput;

/// Renders the menu screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category tabs
            Constraint::Length(1), // Status bar
            Constraint::Min(10),   // Order | Menu
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    tab_bar::render(frame, main_layout[0], app);
    status_bar::render(frame, main_layout[1], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_layout[2]);

    render_order_panel(frame, content[0], app);
    render_menu(frame, content[1], app);

    render_keybindings(frame, main_layout[3], app);
}

fn border_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(app.palette().primary)
    } else {
        Style::default().fg(app.palette().border)
    }
}

/// Renders the item list of the active category.
fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.palette();
    let title = format!(" {} ", app.active_category.label(app.strings()));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app, Focus::Menu));

    let mut lines: Vec<Line> = Vec::new();
    for (i, item) in app.menu_items().iter().enumerate() {
        let selected = i == app.menu_index;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected && app.focus == Focus::Menu {
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let in_order = app
            .order()
            .line(item.id)
            .map(|l| format!(" ({}{})", app.strings().quantity, l.quantity))
            .unwrap_or_default();

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(item.name.clone(), name_style),
            Span::styled(in_order, Style::default().fg(Color::DarkGray)),
            Span::raw("  "),
            Span::styled(format_currency(item.price), Style::default().fg(palette.text)),
        ]));

        if app.expanded_item == Some(item.id) && !item.description.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", item.description),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(para, area);
}

/// Renders the receipt with the discount and tip selectors below it.
fn render_order_panel(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    render_receipt_panel(frame, layout[0], app);
    render_percent_selector(
        frame,
        layout[1],
        app,
        Focus::Discount,
        app.strings().discount_percent,
        &DISCOUNT_PRESETS,
        app.order().discount_percent,
        &app.discount_input,
    );
    render_percent_selector(
        frame,
        layout[2],
        app,
        Focus::Tip,
        app.strings().tip_percent,
        &TIP_PRESETS,
        app.order().tip_percent,
        &app.tip_input,
    );
}

fn render_receipt_panel(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.strings();
    let block = Block::default()
        .title(format!(" {} ", strings.order))
        .borders(Borders::ALL)
        .border_style(border_style(app, Focus::Order));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.order().is_empty() {
        let para = Paragraph::new(strings.empty_order).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(para, inner);
        return;
    }

    let width = usize::from(inner.width.max(1));
    let highlight = Style::default()
        .fg(app.palette().on_primary)
        .bg(app.palette().primary);
    let ticket = Ticket {
        number: app.ticket_number,
        issued_at: Local::now().naive_local(),
    };

    // Each order line takes two receipt rows: name, then quantity and amount.
    let first_row = RECEIPT_HEADER_ROWS + app.order_index * 2;
    let highlighted = first_row..first_row + 2;
    let lines: Vec<Line> = render_receipt(app.order(), strings, &ticket, width)
        .into_iter()
        .enumerate()
        .map(|(row, text)| {
            if app.focus == Focus::Order && highlighted.contains(&row) {
                Line::from(Span::styled(text, highlight))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let scroll = receipt_scroll(first_row, usize::from(inner.height));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

/// Rows to skip so both rows of the highlighted line fit in `height`.
fn receipt_scroll(first_row: usize, height: usize) -> u16 {
    let offset = (first_row + 2).saturating_sub(height);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

#[allow(clippy::too_many_arguments)]
fn render_percent_selector(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    focus: Focus,
    title: &str,
    presets: &[u32],
    current: u32,
    input: &PercentInput,
) {
    let palette = app.palette();
    let editing = app.focus == focus && app.mode == Mode::Insert;
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_style(app, focus));

    let mut spans: Vec<Span> = Vec::new();
    for preset in presets {
        let style = if *preset == current && !editing {
            Style::default()
                .fg(palette.on_primary)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {preset}% "), style));
    }

    let custom = !presets.contains(&current);
    let field_style = if editing {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else if custom {
        Style::default()
            .fg(palette.on_primary)
            .bg(palette.primary)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let field = if editing {
        let (before, after) = input.as_str().split_at(input.cursor);
        format!("{before}▏{after}")
    } else {
        input.as_str().to_string()
    };
    spans.push(Span::raw(" │ "));
    spans.push(Span::raw(format!("{}: ", app.strings().other)));
    spans.push(Span::styled(format!("[{field:<3}]%"), field_style));

    let para = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(para, area);
}

/// Renders the keybinding help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let para = Paragraph::new(keybinding_help(app)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}

fn keybinding_help(app: &App) -> String {
    let save = app.strings().save_order;
    match (app.mode, app.focus) {
        (Mode::Insert, _) => "[0-9]type [Bksp]delete [←→]move [Enter/Esc]done".to_string(),
        (Mode::Normal, Focus::Menu) => format!(
            "[←→]category [↑↓]select [Enter]add [d]description [s]{save} [Tab]panel [L]lang [T]theme [q]quit"
        ),
        (Mode::Normal, Focus::Order) => {
            format!("[↑↓]select [x]remove [s]{save} [Tab]panel [L]lang [T]theme [q]quit")
        }
        (Mode::Normal, Focus::Discount | Focus::Tip) => {
            format!("[←→]preset [i]type value [s]{save} [Tab]panel [L]lang [T]theme [q]quit")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;

    #[test]
    fn help_uses_localized_save_label() {
        let mut app = App::new(&AppConfig::default(), Catalog::builtin().unwrap());
        assert!(keybinding_help(&app).contains("[s]Guardar orden"));
        app.cycle_language();
        app.focus = Focus::Order;
        assert!(keybinding_help(&app).contains("[s]Save order"));
        app.mode = Mode::Insert;
        assert!(!keybinding_help(&app).contains("[s]"));
    }

    #[test]
    fn receipt_scroll_keeps_highlight_visible() {
        assert_eq!(receipt_scroll(RECEIPT_HEADER_ROWS, 20), 0);
        let first_row = RECEIPT_HEADER_ROWS + 30 * 2;
        let scroll = usize::from(receipt_scroll(first_row, 20));
        assert!(first_row >= scroll);
        assert!(first_row + 2 <= scroll + 20);
    }

    #[test]
    fn receipt_scroll_with_zero_height() {
        assert_eq!(receipt_scroll(RECEIPT_HEADER_ROWS, 0), 6);
    }
}
