//! Order lines and the order state they live in.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::menu::MenuCatalogItem;

/// One distinct menu item and its accumulated quantity.
///
/// Quantity is always at least 1; a line that would drop to zero is
/// removed from the order instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    /// Starts a new line for `item` with quantity 1.
    #[must_use]
    pub fn from_item(item: &MenuCatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            quantity: 1,
        }
    }

    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// The whole mutable state of one ordering session.
///
/// `Default` is the canonical empty order: no lines, 0% discount, 0% tip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    /// Lines in first-added order, at most one per id.
    pub lines: Vec<OrderLine>,
    pub discount_percent: u32,
    pub tip_percent: u32,
}

impl OrderState {
    /// Returns the line with the given id, if present.
    pub fn line(&self, id: u32) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Returns whether the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
