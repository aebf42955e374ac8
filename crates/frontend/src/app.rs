use leptos::prelude::*;

use crate::menu::MenuState;
use crate::page::HomePage;

#[component]
pub fn App() -> impl IntoView {
    // Menu selection state is shared via context so the tab bar and the
    // entry list track the same active category.
    provide_context(MenuState::new());

    view! {
        <HomePage />
    }
}
