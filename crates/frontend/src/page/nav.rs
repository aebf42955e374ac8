use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::scroll_to;

const LINKS: [(&str, &str); 4] = [
    ("#menu", "Menu"),
    ("#about", "About"),
    ("#gallery", "Gallery"),
    ("#reserve", "Reserve"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav__inner">
                <div class="nav__brand">"Luna"</div>
                <div class="nav__links">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=href class="nav__link">
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <Button on_click=Callback::new(move |_| scroll_to("reserve"))>
                    "Reserve Now"
                </Button>
            </div>
        </nav>
    }
}
