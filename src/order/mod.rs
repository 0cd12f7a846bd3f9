//! Order store: the single place where order state changes.
//!
//! Every change goes through [`reduce`], a pure function from the current
//! [`OrderState`] and one [`OrderAction`] to the next state. [`OrderStore`]
//! wraps it for a session: actions are applied one at a time, each fully,
//! and a rejected action leaves the previous state untouched.

pub mod percent;
pub mod totals;

use std::fmt;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::{MenuCatalogItem, OrderLine, OrderState};
use totals::{Totals, compute_totals};

/// The complete mutation surface of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Add one unit of a catalog item.
    AddItem(MenuCatalogItem),
    /// Drop the whole line with this id.
    RemoveItem(u32),
    /// Replace the discount percentage.
    SetDiscount(u32),
    /// Replace the tip percentage.
    SetTip(u32),
    /// Return to the empty order.
    ResetOrder,
}

/// Reason the store declined an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    NegativePrice { id: u32, price: Decimal },
    QuantityOverflow { id: u32 },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativePrice { id, price } => {
                write!(f, "item {id}: price must be non-negative, got {price}")
            }
            Self::QuantityOverflow { id } => {
                write!(f, "item {id}: quantity overflow")
            }
        }
    }
}

impl std::error::Error for OrderError {}

impl OrderState {
    /// Adds one unit of `item`, merging into an existing line with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NegativePrice`] for a negative catalog price and
    /// [`OrderError::QuantityOverflow`] if the line quantity cannot grow.
    pub fn add_item(&self, item: &MenuCatalogItem) -> Result<Self, OrderError> {
        if item.price < Decimal::ZERO {
            return Err(OrderError::NegativePrice {
                id: item.id,
                price: item.price,
            });
        }

        let mut next = self.clone();
        match next.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(1)
                    .ok_or(OrderError::QuantityOverflow { id: item.id })?;
            }
            None => next.lines.push(OrderLine::from_item(item)),
        }
        Ok(next)
    }

    /// Removes the line with `id`. Missing ids leave the order as it was.
    #[must_use]
    pub fn remove_item(&self, id: u32) -> Self {
        let mut next = self.clone();
        next.lines.retain(|line| line.id != id);
        next
    }

    /// Replaces the discount percentage as given.
    #[must_use]
    pub fn set_discount(&self, value: u32) -> Self {
        Self {
            discount_percent: value,
            ..self.clone()
        }
    }

    /// Replaces the tip percentage as given.
    #[must_use]
    pub fn set_tip(&self, value: u32) -> Self {
        Self {
            tip_percent: value,
            ..self.clone()
        }
    }

    /// Returns the canonical empty order.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Derives the totals for this state.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.lines, self.discount_percent, self.tip_percent)
    }
}

/// Applies one action to `state`, returning the next state.
///
/// # Errors
///
/// Only [`OrderAction::AddItem`] can fail; see [`OrderState::add_item`].
pub fn reduce(state: &OrderState, action: &OrderAction) -> Result<OrderState, OrderError> {
    match action {
        OrderAction::AddItem(item) => state.add_item(item),
        OrderAction::RemoveItem(id) => Ok(state.remove_item(*id)),
        OrderAction::SetDiscount(value) => Ok(state.set_discount(*value)),
        OrderAction::SetTip(value) => Ok(state.set_tip(*value)),
        OrderAction::ResetOrder => Ok(OrderState::reset()),
    }
}

/// Summary handed back when an order is saved.
///
/// Built from the state as it was just before the reset; the store itself
/// is already empty by the time the caller sees this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFinalized {
    pub line_count: usize,
    pub item_count: u32,
    pub totals: Totals,
}

/// Holds the order state for one session.
#[derive(Debug, Default)]
pub struct OrderStore {
    state: OrderState,
}

impl OrderStore {
    /// Creates a store holding the empty order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &OrderState {
        &self.state
    }

    /// Recomputes totals against the current state.
    pub fn totals(&self) -> Totals {
        self.state.totals()
    }

    /// Applies `action` and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns the reducer's [`OrderError`]; the stored state is unchanged.
    pub fn dispatch(&mut self, action: OrderAction) -> Result<&OrderState, OrderError> {
        debug!(?action, "dispatching order action");
        match reduce(&self.state, &action) {
            Ok(next) => {
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                warn!(error = %e, "order action rejected");
                Err(e)
            }
        }
    }

    /// Closes the current order: takes its totals, then dispatches
    /// [`OrderAction::ResetOrder`].
    ///
    /// The reset is committed before the summary is returned, so whatever
    /// reacts to the summary only ever observes the empty order.
    ///
    /// # Errors
    ///
    /// Returns the reducer's [`OrderError`] if the reset is declined; the
    /// order is then left open.
    pub fn finalize(&mut self) -> Result<OrderFinalized, OrderError> {
        let summary = OrderFinalized {
            line_count: self.state.lines.len(),
            item_count: self.state.item_count(),
            totals: self.state.totals(),
        };
        self.dispatch(OrderAction::ResetOrder)?;
        info!(
            lines = summary.line_count,
            total = %summary.totals.total,
            "order finalized"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pizza() -> MenuCatalogItem {
        MenuCatalogItem::new(1, "Pizza", dec!(12.00))
    }

    fn soda() -> MenuCatalogItem {
        MenuCatalogItem::new(2, "Soda", dec!(2.50))
    }

    #[test]
    fn initial_state_is_empty() {
        let store = OrderStore::new();
        assert!(store.state().is_empty());
        assert_eq!(store.state().discount_percent, 0);
        assert_eq!(store.state().tip_percent, 0);
    }

    #[test]
    fn adding_same_item_twice_accumulates_quantity() {
        let state = OrderState::default()
            .add_item(&pizza())
            .unwrap()
            .add_item(&pizza())
            .unwrap();
        assert_eq!(state.lines.len(), 1);
        assert_eq!(state.lines[0].quantity, 2);
    }

    #[test]
    fn lines_keep_first_added_order() {
        let state = OrderState::default()
            .add_item(&pizza())
            .unwrap()
            .add_item(&soda())
            .unwrap()
            .add_item(&pizza())
            .unwrap();
        let ids: Vec<u32> = state.lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(state.line(1).map(|l| l.quantity), Some(2));
        assert_eq!(state.line(2).map(|l| l.quantity), Some(1));
    }

    #[test]
    fn remove_drops_whole_line() {
        let state = OrderState::default()
            .add_item(&pizza())
            .unwrap()
            .add_item(&pizza())
            .unwrap()
            .add_item(&soda())
            .unwrap();
        let next = state.remove_item(1);
        assert!(next.line(1).is_none());
        assert_eq!(next.lines.len(), 1);
        assert_eq!(next.lines[0].id, 2);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let state = OrderState::default()
            .add_item(&pizza())
            .unwrap()
            .add_item(&soda())
            .unwrap()
            .set_discount(10);
        assert_eq!(state.remove_item(99), state);
        assert_eq!(OrderState::default().remove_item(1), OrderState::default());
    }

    #[test]
    fn store_keeps_percentages_verbatim() {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::SetDiscount(150)).unwrap();
        store.dispatch(OrderAction::SetTip(7)).unwrap();
        assert_eq!(store.state().discount_percent, 150);
        assert_eq!(store.state().tip_percent, 7);
    }

    #[test]
    fn negative_price_is_rejected_and_state_kept() {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::AddItem(pizza())).unwrap();
        let before = store.state().clone();

        let bad = MenuCatalogItem::new(3, "Broken", dec!(-1.00));
        let result = store.dispatch(OrderAction::AddItem(bad));
        assert!(matches!(
            result,
            Err(OrderError::NegativePrice { id: 3, .. })
        ));
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn zero_price_is_accepted() {
        let free = MenuCatalogItem::new(4, "Water", dec!(0));
        let state = OrderState::default().add_item(&free).unwrap();
        assert_eq!(state.lines.len(), 1);
    }

    #[test]
    fn quantity_overflow_is_rejected() {
        let mut state = OrderState::default().add_item(&pizza()).unwrap();
        state.lines[0].quantity = u32::MAX;
        assert_eq!(
            state.add_item(&pizza()),
            Err(OrderError::QuantityOverflow { id: 1 })
        );
    }

    #[test]
    fn reset_restores_canonical_state() {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::AddItem(pizza())).unwrap();
        store.dispatch(OrderAction::AddItem(soda())).unwrap();
        store.dispatch(OrderAction::SetDiscount(20)).unwrap();
        store.dispatch(OrderAction::SetTip(10)).unwrap();

        store.dispatch(OrderAction::ResetOrder).unwrap();
        assert_eq!(store.state(), &OrderState::default());
    }

    #[test]
    fn finalize_reports_closing_totals_then_empties_store() {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::AddItem(pizza())).unwrap();
        store.dispatch(OrderAction::AddItem(pizza())).unwrap();
        store.dispatch(OrderAction::AddItem(soda())).unwrap();
        store.dispatch(OrderAction::SetDiscount(20)).unwrap();
        store.dispatch(OrderAction::SetTip(10)).unwrap();

        let finalized = store.finalize().unwrap();
        assert_eq!(finalized.line_count, 2);
        assert_eq!(finalized.item_count, 3);
        assert_eq!(finalized.totals.total, dec!(23.32));
        assert_eq!(store.state(), &OrderState::default());
        assert_eq!(store.totals().total, Decimal::ZERO);
    }

    #[test]
    fn finalize_lands_on_reset_action_state() {
        let mut store = OrderStore::new();
        store.dispatch(OrderAction::AddItem(soda())).unwrap();
        store.dispatch(OrderAction::SetTip(25)).unwrap();
        let expected = reduce(store.state(), &OrderAction::ResetOrder).unwrap();

        store.finalize().unwrap();
        assert_eq!(store.state(), &expected);
    }

    #[test]
    fn display_errors() {
        let err = OrderError::NegativePrice {
            id: 7,
            price: dec!(-2.5),
        };
        assert_eq!(err.to_string(), "item 7: price must be non-negative, got -2.5");
        assert_eq!(
            OrderError::QuantityOverflow { id: 3 }.to_string(),
            "item 3: quantity overflow"
        );
    }
}
