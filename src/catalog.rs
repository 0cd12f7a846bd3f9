//! Menu catalog: items grouped by category, text per language.
//!
//! The catalog is the read-only source of [`MenuCatalogItem`]s. It is loaded
//! from JSON shaped as a map from category key to a list of entries, where
//! each entry carries its `name` and `description` per language code:
//!
//! ```json
//! { "bebidas": [ { "id": 20, "price": "2.50", "image": "soda.jpg",
//!                  "name": { "es-ES": "Refresco", "en-US": "Soda" } } ] }
//! ```
//!
//! Text missing for a language falls back to `es-ES`, which every entry
//! must provide.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::PosError;
use crate::i18n::{Language, Strings};
use crate::models::MenuCatalogItem;

/// Menu shipped with the binary.
const BUILTIN_MENU: &str = include_str!("../assets/menu.json");

/// Menu sections, in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "pizzas")]
    Pizzas,
    #[serde(rename = "entrantes")]
    Starters,
    #[serde(rename = "bebidas")]
    Drinks,
    #[serde(rename = "postres")]
    Desserts,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Pizzas,
        Category::Starters,
        Category::Drinks,
        Category::Desserts,
    ];

    /// Returns the localized section title.
    pub fn label(&self, strings: &Strings) -> &'static str {
        match self {
            Category::Pizzas => strings.pizzas,
            Category::Starters => strings.starters,
            Category::Drinks => strings.drinks,
            Category::Desserts => strings.desserts,
        }
    }
}

/// One catalog entry with text in every available language.
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: u32,
    price: Decimal,
    #[serde(default)]
    image: String,
    name: HashMap<String, String>,
    #[serde(default)]
    description: HashMap<String, String>,
}

impl CatalogEntry {
    fn localize(&self, language: Language) -> MenuCatalogItem {
        MenuCatalogItem {
            id: self.id,
            name: pick(&self.name, language),
            price: self.price,
            description: pick(&self.description, language),
            image_ref: self.image.clone(),
        }
    }
}

/// Returns the text for `language`, else the `es-ES` text, else empty.
fn pick(texts: &HashMap<String, String>, language: Language) -> String {
    texts
        .get(language.code())
        .or_else(|| texts.get(Language::default().code()))
        .cloned()
        .unwrap_or_default()
}

/// The full menu.
#[derive(Debug, Clone)]
pub struct Catalog {
    sections: Vec<(Category, Vec<CatalogEntry>)>,
}

impl Catalog {
    /// Returns the menu embedded in the binary.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded JSON is malformed.
    pub fn builtin() -> crate::Result<Self> {
        Self::from_json(BUILTIN_MENU)
    }

    /// Loads a menu from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PosError::Io`] if the file cannot be read, and
    /// [`PosError::Json`] or [`PosError::Catalog`] if its content is invalid.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PosError::Io(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&contents)
    }

    /// Parses and checks a menu.
    ///
    /// # Errors
    ///
    /// Returns [`PosError::Catalog`] for duplicate ids, negative prices, or
    /// entries without a default-language name.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let mut raw: HashMap<Category, Vec<CatalogEntry>> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        let fallback = Language::default().code();
        for entries in raw.values() {
            for entry in entries {
                if !seen.insert(entry.id) {
                    return Err(PosError::Catalog(format!("duplicate item id {}", entry.id)));
                }
                if entry.price < Decimal::ZERO {
                    return Err(PosError::Catalog(format!(
                        "item {}: price must be non-negative, got {}",
                        entry.id, entry.price
                    )));
                }
                if !entry.name.contains_key(fallback) {
                    return Err(PosError::Catalog(format!(
                        "item {}: missing {fallback} name",
                        entry.id
                    )));
                }
            }
        }

        let sections: Vec<(Category, Vec<CatalogEntry>)> = Category::ALL
            .into_iter()
            .map(|category| (category, raw.remove(&category).unwrap_or_default()))
            .collect();
        debug!(items = seen.len(), "catalog loaded");

        Ok(Self { sections })
    }

    /// Returns the localized items of `category`, in catalog order.
    pub fn items(&self, category: Category, language: Language) -> Vec<MenuCatalogItem> {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.iter().map(|e| e.localize(language)).collect())
            .unwrap_or_default()
    }

    /// Looks up a single item by id across all categories.
    pub fn find(&self, id: u32, language: Language) -> Option<MenuCatalogItem> {
        self.sections
            .iter()
            .flat_map(|(_, entries)| entries.iter())
            .find(|e| e.id == id)
            .map(|e| e.localize(language))
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Returns whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn builtin_menu_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for category in Category::ALL {
            assert!(!catalog.items(category, Language::EsEs).is_empty());
        }
    }

    #[test]
    fn items_are_localized() {
        let catalog = Catalog::builtin().unwrap();
        let es = catalog.find(20, Language::EsEs).unwrap();
        let en = catalog.find(20, Language::EnUs).unwrap();
        assert_eq!(es.name, "Refresco");
        assert_eq!(en.name, "Soda");
        assert_eq!(es.price, dec!(2.50));
        assert_eq!(es.id, en.id);
    }

    #[test]
    fn missing_translation_falls_back() {
        let catalog = Catalog::builtin().unwrap();
        let item = catalog.find(3, Language::DeDe).unwrap();
        assert_eq!(item.name, "Pizza Vier Käse");
        assert_eq!(
            item.description,
            "Mozzarella, gorgonzola, parmesano y fontina."
        );
    }

    #[test]
    fn missing_category_is_empty() {
        let catalog = Catalog::from_json(
            r#"{"pizzas": [{"id": 1, "price": "9", "name": {"es-ES": "P"}}]}"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.items(Category::Drinks, Language::EsEs).is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"{
            "pizzas": [{"id": 1, "price": "9", "name": {"es-ES": "A"}}],
            "postres": [{"id": 1, "price": "3", "name": {"es-ES": "B"}}]
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate item id 1"));
    }

    #[test]
    fn negative_price_rejected() {
        let json = r#"{"bebidas": [{"id": 5, "price": "-1", "name": {"es-ES": "X"}}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, PosError::Catalog(_)));
    }

    #[test]
    fn default_language_name_required() {
        let json = r#"{"bebidas": [{"id": 5, "price": "1", "name": {"en-US": "X"}}]}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("missing es-ES name"));
    }

    #[test]
    fn unknown_category_is_json_error() {
        let err = Catalog::from_json(r#"{"sopas": []}"#).unwrap_err();
        assert!(matches!(err, PosError::Json(_)));
    }
}
