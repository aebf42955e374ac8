use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::category::Category;
use crate::entry::MenuEntry;
use crate::error::CatalogError;

/// Embedded menu dataset. Edited by hand when the menu changes, parsed
/// once at startup.
const MENU_JSON: &str = include_str!("../data/menu.json");

static CATALOG: Lazy<MenuCatalog> =
    Lazy::new(|| MenuCatalog::from_json(MENU_JSON).expect("embedded menu.json is valid"));

/// Immutable mapping from [`Category`] to its ordered entries.
///
/// Built once, read-only for the lifetime of the process. Entry order is
/// display order; callers get slices and never mutate them.
#[derive(Debug, Deserialize)]
pub struct MenuCatalog {
    starters: Vec<MenuEntry>,
    mains: Vec<MenuEntry>,
    desserts: Vec<MenuEntry>,
    drinks: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Process-wide catalog instance.
    pub fn global() -> &'static MenuCatalog {
        &CATALOG
    }

    /// Parses and validates a catalog document. Every category must be
    /// present with at least one entry.
    pub fn from_json(json: &str) -> Result<MenuCatalog, CatalogError> {
        let catalog: MenuCatalog = serde_json::from_str(json)?;
        for category in Category::ALL {
            if catalog.entries_for(category).is_empty() {
                return Err(CatalogError::EmptySection(category));
            }
        }
        Ok(catalog)
    }

    /// Entries of one category, unmodified and in stored order.
    ///
    /// Total over the enumeration: the closed [`Category`] set plus
    /// load-time validation guarantee a non-empty result.
    pub fn entries_for(&self, category: Category) -> &[MenuEntry] {
        match category {
            Category::Starters => &self.starters,
            Category::Mains => &self.mains,
            Category::Desserts => &self.desserts,
            Category::Drinks => &self.drinks,
        }
    }

    /// String-keyed lookup for callers outside the typed enumeration.
    /// Unknown keys fail with [`CatalogError::UnknownCategory`].
    pub fn entries_for_key(&self, key: &str) -> Result<&[MenuEntry], CatalogError> {
        Ok(self.entries_for(key.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_entries() {
        let catalog = MenuCatalog::global();
        for category in Category::ALL {
            assert!(
                !catalog.entries_for(category).is_empty(),
                "category {category} must not be empty"
            );
        }
    }

    #[test]
    fn repeated_reads_are_stable() {
        let catalog = MenuCatalog::global();
        for category in Category::ALL {
            let first = catalog.entries_for(category);
            let second = catalog.entries_for(category);
            assert_eq!(first, second);
            assert_eq!(first.as_ptr(), second.as_ptr());
        }
    }

    #[test]
    fn desserts_dataset_is_exact() {
        let desserts = MenuCatalog::global().entries_for(Category::Desserts);
        assert_eq!(desserts.len(), 4);
        assert_eq!(desserts[0].name, "Dark Chocolate Soufflé");
        assert_eq!(desserts[0].price, "$14");
    }

    #[test]
    fn key_lookup_matches_typed_lookup() {
        let catalog = MenuCatalog::global();
        assert_eq!(
            catalog.entries_for_key("mains").unwrap(),
            catalog.entries_for(Category::Mains)
        );
    }

    #[test]
    fn key_lookup_rejects_unknown_category() {
        let err = MenuCatalog::global().entries_for_key("brunch").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
    }

    #[test]
    fn load_rejects_empty_section() {
        let json = r#"{
            "starters": [{"name": "Soup", "description": "of the day", "price": "$9"}],
            "mains": [{"name": "Steak", "description": "grilled", "price": "$30"}],
            "desserts": [],
            "drinks": [{"name": "Wine", "description": "house", "price": "$12"}]
        }"#;
        let err = MenuCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySection(Category::Desserts)));
    }

    #[test]
    fn load_rejects_malformed_document() {
        let err = MenuCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidData(_)));
    }
}
