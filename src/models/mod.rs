//! Plain data types shared by the order store, the catalog, and the TUI.

pub mod menu;
pub mod order;

pub use menu::MenuCatalogItem;
pub use order::{OrderLine, OrderState};
