//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use super::app::{App, Focus, Mode, Screen};

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),
    /// Request to quit the application.
    Quit,
}

/// Effects the event loop performs outside of [`update`].
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Save the current order; the loop draws the order number.
    SaveOrder,
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => None,
        Event::Tick => {
            app.clear_stale_status();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    if let Screen::Confirmation { .. } = app.screen {
        return handle_confirmation_keys(app, key);
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Insert => handle_insert_mode(app, key),
    }
}

/// Handles keys on the confirmation screen.
fn handle_confirmation_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.back_to_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
    None
}

/// Handles keys in normal mode.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            None
        }
        KeyCode::Tab => {
            app.next_focus();
            None
        }
        KeyCode::BackTab => {
            app.previous_focus();
            None
        }
        KeyCode::Char('L') => {
            app.cycle_language();
            None
        }
        KeyCode::Char('T') => {
            app.cycle_theme();
            None
        }
        KeyCode::Char('s') => {
            if app.order().is_empty() {
                None
            } else {
                Some(Action::SaveOrder)
            }
        }
        _ => match app.focus {
            Focus::Menu => handle_menu_keys(app, key),
            Focus::Order => handle_order_keys(app, key),
            Focus::Discount | Focus::Tip => handle_percent_keys(app, key),
        },
    }
}

/// Handles keys while the menu panel has focus.
fn handle_menu_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.previous_category(),
        KeyCode::Char('l') | KeyCode::Right => app.next_category(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next_item(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_item(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('a') => app.add_selected_item(),
        KeyCode::Char('d') => app.toggle_description(),
        _ => {}
    }
    None
}

/// Handles keys while the order panel has focus.
fn handle_order_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next_line(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_line(),
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => app.remove_selected_line(),
        _ => {}
    }
    None
}

/// Handles keys while a percentage selector has focus.
fn handle_percent_keys(app: &mut App, key: KeyEvent) -> Option<Action> {
    let is_discount = app.focus == Focus::Discount;
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => {
            if is_discount {
                app.cycle_discount(false);
            } else {
                app.cycle_tip(false);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if is_discount {
                app.cycle_discount(true);
            } else {
                app.cycle_tip(true);
            }
        }
        KeyCode::Char('i') | KeyCode::Enter => app.mode = Mode::Insert,
        _ => {}
    }
    None
}

/// Handles keys in insert mode: editing the focused percentage field.
///
/// Every accepted edit is applied to the order right away.
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> Option<Action> {
    let is_discount = match app.focus {
        Focus::Discount => true,
        Focus::Tip => false,
        Focus::Menu | Focus::Order => {
            app.mode = Mode::Normal;
            return None;
        }
    };
    let input = if is_discount {
        &mut app.discount_input
    } else {
        &mut app.tip_input
    };

    let changed = match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.mode = Mode::Normal;
            false
        }
        KeyCode::Char(c) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        _ => false,
    };

    if changed {
        if is_discount {
            app.apply_discount_input();
        } else {
            app.apply_tip_input();
        }
    }
    None
}
