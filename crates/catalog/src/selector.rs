use crate::category::Category;
use crate::error::CatalogError;

/// Owned view state of the menu section: which category is visible.
///
/// A plain value with no framework ties. The frontend wraps it in a
/// reactive signal and re-renders the tab bar and the entry list when it
/// changes; nothing else on the page depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelector {
    active: Category,
}

impl CategorySelector {
    /// Starts at the first category, `Starters`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active category. Always defined.
    pub fn current(&self) -> Category {
        self.active
    }

    /// Switches the visible category. Re-selecting the active one leaves
    /// the state bit-for-bit unchanged.
    pub fn select(&mut self, category: Category) {
        self.active = category;
    }

    /// Boundary form of [`select`](Self::select). Tab keys arrive from the
    /// DOM as strings; anything outside the enumeration must not disturb
    /// the state.
    pub fn select_key(&mut self, key: &str) -> Result<Category, CatalogError> {
        let category: Category = key.parse()?;
        self.active = category;
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_starters() {
        assert_eq!(CategorySelector::new().current(), Category::Starters);
    }

    #[test]
    fn select_switches_category() {
        let mut selector = CategorySelector::new();
        selector.select(Category::Mains);
        assert_eq!(selector.current(), Category::Mains);
    }

    #[test]
    fn reselecting_active_category_is_idempotent() {
        let mut selector = CategorySelector::new();
        selector.select(Category::Desserts);
        let snapshot = selector;
        selector.select(Category::Desserts);
        assert_eq!(selector, snapshot);
    }

    #[test]
    fn full_cycle_returns_to_initial_state() {
        let initial = CategorySelector::new();
        let mut selector = initial;
        for category in [
            Category::Mains,
            Category::Desserts,
            Category::Drinks,
            Category::Starters,
        ] {
            selector.select(category);
        }
        assert_eq!(selector, initial);
    }

    #[test]
    fn select_key_accepts_enumerated_keys() {
        let mut selector = CategorySelector::new();
        assert_eq!(selector.select_key("drinks").unwrap(), Category::Drinks);
        assert_eq!(selector.current(), Category::Drinks);
    }

    #[test]
    fn unknown_key_leaves_state_untouched() {
        let mut selector = CategorySelector::new();
        selector.select(Category::Mains);
        let err = selector.select_key("sushi").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(_)));
        assert_eq!(selector.current(), Category::Mains);
    }
}
