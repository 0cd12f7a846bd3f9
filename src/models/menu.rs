//! Menu item as seen by the order store.
//!
//! A [`MenuCatalogItem`] is the already-localized view of one catalog entry.
//! The catalog produces them; the store only ever reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single orderable item supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalogItem {
    /// Unique within the catalog; becomes the order line id.
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "image")]
    pub image_ref: String,
}

impl MenuCatalogItem {
    /// Creates an item with empty description and image.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: String::new(),
            image_ref: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn price_parses_from_string_or_number() {
        let from_str: MenuCatalogItem =
            serde_json::from_str(r#"{"id": 1, "name": "Soda", "price": "2.50"}"#).unwrap();
        let from_num: MenuCatalogItem =
            serde_json::from_str(r#"{"id": 1, "name": "Soda", "price": 2.5}"#).unwrap();
        assert_eq!(from_str.price, dec!(2.50));
        assert_eq!(from_num.price, dec!(2.5));
        assert!(from_str.description.is_empty());
    }
}
