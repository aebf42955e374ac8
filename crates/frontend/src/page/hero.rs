use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::scroll_to;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__backdrop">
                <img src="/images/hero-ambiance.jpg" alt="Luna Bistro dining experience" />
                <div class="hero__overlay"></div>
            </div>
            <div class="hero__content">
                <h1>"Where Flavor Meets Atmosphere"</h1>
                <p>
                    "Experience chef-crafted cuisine in an intimate setting designed for unforgettable moments."
                </p>
                <div class="hero__actions">
                    <Button size="lg" on_click=Callback::new(move |_| scroll_to("menu"))>
                        "View Menu"
                    </Button>
                    <Button
                        size="lg"
                        variant="outline"
                        on_click=Callback::new(move |_| scroll_to("reserve"))
                    >
                        "Reserve a Table"
                    </Button>
                </div>
            </div>
        </section>
    }
}
