use catalog::{Category, CategorySelector};
use leptos::prelude::*;

/// Reactive wrapper around [`CategorySelector`].
///
/// Created once when the page mounts and shared via context; only the
/// tab highlight and the entry list subscribe to it.
#[derive(Clone, Copy)]
pub struct MenuState {
    selector: RwSignal<CategorySelector>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selector: RwSignal::new(CategorySelector::new()),
        }
    }

    /// Currently visible category (reactive read).
    pub fn current(&self) -> Category {
        self.selector.with(|selector| selector.current())
    }

    /// Activates the tab with the given key.
    ///
    /// Unknown keys are logged and ignored. Re-selecting the active tab
    /// skips the signal write, so subscribers are not notified.
    pub fn select_key(&self, key: &str) {
        let active = self.selector.with_untracked(|selector| selector.current());
        match key.parse::<Category>() {
            Ok(category) if category == active => {}
            Ok(category) => self.selector.update(|selector| selector.select(category)),
            Err(err) => log::warn!("menu tab rejected: {err}"),
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
