//! Application state for the TUI.

use std::time::{Duration, Instant};

use rust_decimal::Decimal;
use tracing::info;

use crate::catalog::{Catalog, Category};
use crate::config::AppConfig;
use crate::i18n::{Language, Strings};
use crate::models::{MenuCatalogItem, OrderState};
use crate::order::percent::{DISCOUNT_PRESETS, PercentPolicy, TIP_PRESETS};
use crate::order::totals::Totals;
use crate::order::{OrderAction, OrderFinalized, OrderStore};
use crate::theme::{Palette, Theme};

use super::input::PercentInput;

/// How long a status message stays on screen.
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Central application state container.
pub struct App {
    // -- Order State --
    /// The session's order store; the only place order state changes.
    pub store: OrderStore,
    /// Menu the items come from.
    pub catalog: Catalog,
    /// Treatment of percentages above 100.
    pub percent_policy: PercentPolicy,

    // -- Menu State --
    /// Category shown in the menu panel.
    pub active_category: Category,
    /// Highlighted row in the menu panel.
    pub menu_index: usize,
    /// Item whose description is unfolded.
    pub expanded_item: Option<u32>,
    /// Highlighted line in the order panel.
    pub order_index: usize,
    /// Number printed on the current receipt.
    pub ticket_number: u16,

    // -- Percentage Entry --
    /// Free-text discount field.
    pub discount_input: PercentInput,
    /// Free-text tip field.
    pub tip_input: PercentInput,

    // -- Display --
    pub language: Language,
    pub theme: Theme,

    // -- UI State --
    /// Screen currently shown.
    pub screen: Screen,
    /// Panel that receives keys.
    pub focus: Focus,
    /// Current input mode.
    pub mode: Mode,
    /// Transient message in the status bar.
    pub status_message: Option<StatusDisplay>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an App with an empty order, showing the first category.
    pub fn new(config: &AppConfig, catalog: Catalog) -> Self {
        Self {
            store: OrderStore::new(),
            catalog,
            percent_policy: config.order.percent_policy,

            active_category: Category::default(),
            menu_index: 0,
            expanded_item: None,
            order_index: 0,
            ticket_number: 0,

            discount_input: PercentInput::new(),
            tip_input: PercentInput::new(),

            language: config.display.language,
            theme: config.display.theme,

            screen: Screen::Menu,
            focus: Focus::Menu,
            mode: Mode::Normal,
            status_message: None,

            should_quit: false,
        }
    }

    /// Returns the string table for the active language.
    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Returns the colors of the active theme.
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Returns the current order state.
    pub fn order(&self) -> &OrderState {
        self.store.state()
    }

    /// Recomputes the current totals.
    pub fn totals(&self) -> Totals {
        self.store.totals()
    }

    /// Items of the active category in the active language.
    pub fn menu_items(&self) -> Vec<MenuCatalogItem> {
        self.catalog.items(self.active_category, self.language)
    }

    /// Switches to the next category.
    pub fn next_category(&mut self) {
        let idx = self.category_position();
        self.set_category(Category::ALL[(idx + 1) % Category::ALL.len()]);
    }

    /// Switches to the previous category.
    pub fn previous_category(&mut self) {
        let idx = self.category_position();
        let prev = idx.checked_sub(1).unwrap_or(Category::ALL.len() - 1);
        self.set_category(Category::ALL[prev]);
    }

    fn category_position(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self.active_category)
            .unwrap_or(0)
    }

    fn set_category(&mut self, category: Category) {
        self.active_category = category;
        self.menu_index = 0;
        self.expanded_item = None;
    }

    /// Moves the menu highlight down.
    pub fn select_next_item(&mut self) {
        let len = self.menu_items().len();
        if self.menu_index + 1 < len {
            self.menu_index += 1;
        }
    }

    /// Moves the menu highlight up.
    pub fn select_previous_item(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    /// Folds or unfolds the description of the highlighted item.
    pub fn toggle_description(&mut self) {
        if let Some(item) = self.menu_items().get(self.menu_index) {
            self.expanded_item = match self.expanded_item {
                Some(id) if id == item.id => None,
                _ => Some(item.id),
            };
        }
    }

    /// Adds one unit of the highlighted menu item to the order.
    pub fn add_selected_item(&mut self) {
        let Some(item) = self.menu_items().into_iter().nth(self.menu_index) else {
            return;
        };
        if let Err(e) = self.store.dispatch(OrderAction::AddItem(item)) {
            self.show_status(e.to_string());
        }
    }

    /// Moves the order highlight down.
    pub fn select_next_line(&mut self) {
        if self.order_index + 1 < self.order().lines.len() {
            self.order_index += 1;
        }
    }

    /// Moves the order highlight up.
    pub fn select_previous_line(&mut self) {
        self.order_index = self.order_index.saturating_sub(1);
    }

    /// Removes the highlighted order line entirely.
    pub fn remove_selected_line(&mut self) {
        let Some(id) = self.order().lines.get(self.order_index).map(|l| l.id) else {
            return;
        };
        self.dispatch_or_report(OrderAction::RemoveItem(id));
        let len = self.order().lines.len();
        if self.order_index >= len {
            self.order_index = len.saturating_sub(1);
        }
    }

    /// Steps the discount through its presets.
    pub fn cycle_discount(&mut self, forward: bool) {
        let next = step_preset(&DISCOUNT_PRESETS, self.order().discount_percent, forward);
        self.discount_input.set_value(next);
        self.dispatch_or_report(OrderAction::SetDiscount(next));
    }

    /// Steps the tip through its presets.
    pub fn cycle_tip(&mut self, forward: bool) {
        let next = step_preset(&TIP_PRESETS, self.order().tip_percent, forward);
        self.tip_input.set_value(next);
        self.dispatch_or_report(OrderAction::SetTip(next));
    }

    /// Pushes the discount field's validated value into the order.
    ///
    /// If the policy changed the typed value, the field is rewritten to
    /// show what the order holds.
    pub fn apply_discount_input(&mut self) {
        let value = self.discount_input.value(self.percent_policy);
        self.dispatch_or_report(OrderAction::SetDiscount(value));
        sync_field(&mut self.discount_input, self.store.state().discount_percent);
    }

    /// Pushes the tip field's validated value into the order.
    pub fn apply_tip_input(&mut self) {
        let value = self.tip_input.value(self.percent_policy);
        self.dispatch_or_report(OrderAction::SetTip(value));
        sync_field(&mut self.tip_input, self.store.state().tip_percent);
    }

    /// Saves the order under `order_number` and shows the confirmation.
    ///
    /// Empty orders are not saved. The store is reset before the screen
    /// changes, so the confirmation never sees the old lines. The next
    /// receipt is printed as `next_ticket`.
    pub fn save_order(&mut self, order_number: u16, next_ticket: u16) -> Option<OrderFinalized> {
        if self.order().is_empty() {
            return None;
        }
        let finalized = match self.store.finalize() {
            Ok(finalized) => finalized,
            Err(e) => {
                self.show_status(e.to_string());
                return None;
            }
        };
        self.discount_input.clear();
        self.tip_input.clear();
        self.order_index = 0;
        self.ticket_number = next_ticket;
        self.mode = Mode::Normal;
        self.focus = Focus::Menu;
        info!(order_number, "showing order confirmation");
        self.screen = Screen::Confirmation {
            order_number,
            total: finalized.totals.total,
        };
        Some(finalized)
    }

    /// Leaves the confirmation screen.
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    /// Switches to the next UI language.
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
    }

    /// Switches to the next color theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Moves focus to the next panel.
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous panel.
    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Sets a status message to display.
    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears status messages older than the timeout.
    pub fn clear_stale_status(&mut self) {
        if let Some(ref status) = self.status_message
            && status.timestamp.elapsed() > STATUS_TIMEOUT
        {
            self.status_message = None;
        }
    }

    // Shows a rejection in the status bar instead of propagating it.
    fn dispatch_or_report(&mut self, action: OrderAction) {
        if let Err(e) = self.store.dispatch(action) {
            self.show_status(e.to_string());
        }
    }
}

/// Rewrites `input` when its raw digits no longer match `stored`.
///
/// An empty field and a typed "0" both stand for 0 and are left alone.
fn sync_field(input: &mut PercentInput, stored: u32) {
    if input.value(PercentPolicy::Allow) != stored {
        input.set_value(stored);
    }
}

/// Next (or previous) preset after `current`, wrapping around.
///
/// A value that is not a preset steps to the first (or last) preset.
fn step_preset(presets: &[u32], current: u32, forward: bool) -> u32 {
    let len = presets.len();
    match presets.iter().position(|p| *p == current) {
        Some(i) if forward => presets[(i + 1) % len],
        Some(i) => presets[i.checked_sub(1).unwrap_or(len - 1)],
        None if forward => presets[0],
        None => presets[len - 1],
    }
}

/// Screens of the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Menu, order panel, and percentage selectors.
    Menu,
    /// Shown right after an order is saved.
    Confirmation { order_number: u16, total: Decimal },
}

/// UI focus targets on the menu screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Menu,
    Order,
    Discount,
    Tip,
}

impl Focus {
    const CYCLE: [Focus; 4] = [Focus::Menu, Focus::Order, Focus::Discount, Focus::Tip];

    fn next(self) -> Self {
        let idx = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    fn previous(self) -> Self {
        let idx = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[idx.checked_sub(1).unwrap_or(Self::CYCLE.len() - 1)]
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing into the focused percentage field.
    Insert,
}

/// Status message with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct StatusDisplay {
    /// The message.
    pub message: String,
    /// When the message was shown.
    pub timestamp: Instant,
}
