use catalog::{Category, MenuCatalog, MenuEntry};
use leptos::prelude::*;

use crate::menu::MenuState;

/// Per-entry delay of the `fade-up` animation, cascading down the list.
const ENTRY_STAGGER_MS: u32 = 50;

fn entry_delay_ms(index: usize) -> u32 {
    index as u32 * ENTRY_STAGGER_MS
}

/// The one stateful region of the page: category tabs plus the projected
/// entry list. Everything around it is static markup.
#[component]
pub fn MenuSection() -> impl IntoView {
    view! {
        <section id="menu" class="section section--alt">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"Our Menu"</h2>
                    <div class="section__rule"></div>
                </div>
                <CategoryTabs />
                <MenuList />
                <p class="menu__note">
                    "Seasonal menu changes monthly. Ask your server about today's specials."
                </p>
            </div>
        </section>
    }
}

/// One button per category, in enumeration order. Clicks go through the
/// string-keyed selection boundary.
#[component]
fn CategoryTabs() -> impl IntoView {
    let state = use_context::<MenuState>().expect("MenuState context not found");

    view! {
        <div class="menu-tabs">
            {Category::ALL
                .into_iter()
                .map(|category| {
                    let class = move || {
                        if state.current() == category {
                            "menu-tabs__tab menu-tabs__tab--active"
                        } else {
                            "menu-tabs__tab"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| state.select_key(category.key())>
                            {category.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn MenuList() -> impl IntoView {
    let state = use_context::<MenuState>().expect("MenuState context not found");
    let entries = move || {
        MenuCatalog::global()
            .entries_for(state.current())
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="menu-list">
            <For
                each=entries
                key=|(_, entry)| entry.name.clone()
                children=move |(index, entry)| {
                    view! { <MenuItem entry=entry delay_ms=entry_delay_ms(index) /> }
                }
            />
        </div>
    }
}

/// Renders one entry: name, price, description, in that order.
#[component]
fn MenuItem(entry: MenuEntry, delay_ms: u32) -> impl IntoView {
    let style = format!("animation: fade-up 0.45s ease-out {delay_ms}ms both;");

    view! {
        <div class="menu-item" style=style>
            <div class="menu-item__row">
                <h4 class="menu-item__name">{entry.name}</h4>
                <span class="menu-item__price">{entry.price}</span>
            </div>
            <p class="menu-item__description">{entry.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_with_position() {
        assert_eq!(entry_delay_ms(0), 0);
        assert_eq!(entry_delay_ms(1), ENTRY_STAGGER_MS);
        assert_eq!(entry_delay_ms(3), 3 * ENTRY_STAGGER_MS);
    }
}
