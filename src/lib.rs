//! Point-of-sale order core with a terminal storefront.
//!
//! The order store in [`order`] owns the cart: items with quantities plus a
//! discount and a tip percentage. Totals are derived on demand by
//! [`order::totals::compute_totals`], and free-text percentages pass through
//! the validator in [`order::percent`] before they reach the store. The
//! [`tui`] module puts a menu, receipt, and confirmation screen on top.

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod order;
pub mod receipt;
pub mod theme;
pub mod tui;

pub use error::{PosError, Result};
