mod about;
mod footer;
mod gallery;
mod hero;
mod highlights;
mod nav;
mod reserve;

use leptos::prelude::*;

use crate::menu::MenuSection;

/// Single-page layout. Every section is static markup except the menu,
/// which tracks the active category.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <nav::NavBar />
            <hero::Hero />
            <highlights::Highlights />
            <MenuSection />
            <about::About />
            <gallery::Gallery />
            <reserve::ReservationSection />
            <footer::PageFooter />
        </div>
    }
}
