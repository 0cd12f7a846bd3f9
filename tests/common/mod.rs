//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::PathBuf;

use posplus::models::MenuCatalogItem;
use rust_decimal_macros::dec;

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A 12.00 pizza.
pub fn pizza() -> MenuCatalogItem {
    MenuCatalogItem::new(1, "Pizza Margarita", dec!(12.00))
}

/// A 2.50 soda.
pub fn soda() -> MenuCatalogItem {
    MenuCatalogItem::new(2, "Refresco", dec!(2.50))
}

/// A 100.00 item for round-number arithmetic.
pub fn hundred() -> MenuCatalogItem {
    MenuCatalogItem::new(3, "Catering", dec!(100.00))
}
