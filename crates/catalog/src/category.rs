use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Menu section. Closed set; the tab bar renders these in [`Category::ALL`]
/// order and never sees a value outside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Starters,
        Category::Mains,
        Category::Desserts,
        Category::Drinks,
    ];

    /// Stable string key. The UI addresses tabs by this key.
    pub fn key(self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }

    /// Human-readable heading for the tab control.
    pub fn label(self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Mains",
            Category::Desserts => "Desserts",
            Category::Drinks => "Drinks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_parse_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn display_order_is_fixed() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["starters", "mains", "desserts", "drinks"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "brunch".parse::<Category>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(key) if key == "brunch"));
    }

    #[test]
    fn default_is_starters() {
        assert_eq!(Category::default(), Category::Starters);
    }
}
