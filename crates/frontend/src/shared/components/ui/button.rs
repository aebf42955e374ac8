use leptos::prelude::*;

/// Call-to-action button in the site accent colors.
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "outline"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "lg"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Click event handler
    #[prop(optional, into)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = move || {
        let mut classes = String::from("button");
        match variant.get().as_deref() {
            Some("outline") => classes.push_str(" button--outline"),
            _ => classes.push_str(" button--primary"),
        }
        if size.get().as_deref() == Some("lg") {
            classes.push_str(" button--lg");
        }
        if block {
            classes.push_str(" button--block");
        }
        classes
    };

    view! {
        <button
            type="button"
            class=classes
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
