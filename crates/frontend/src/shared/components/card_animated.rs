use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `fade-up` appear animation from `styles.css`.
///
/// `delay_ms` staggers cascading cards (0, 100, 200, ...).
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: fade-up 0.45s ease-out {delay_ms}ms both;")
    } else {
        format!("animation: fade-up 0.45s ease-out {delay_ms}ms both; {style}")
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
