//! Terminal storefront for taking orders.
//!
//! A Ratatui-based TUI with the menu by category, the running receipt,
//! discount and tip selectors, and a confirmation screen after saving.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod screens;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use terminal::{Tui, install_panic_hook, restore_terminal, setup_terminal};
pub use ui::render;
