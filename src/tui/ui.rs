//! Main UI rendering coordinator.

use ratatui::Frame;

use super::app::{App, Screen};
use super::screens::{confirmation, menu};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Menu => menu::render(frame, app),
        Screen::Confirmation {
            order_number,
            total,
        } => confirmation::render(frame, app, order_number, total),
    }
}
