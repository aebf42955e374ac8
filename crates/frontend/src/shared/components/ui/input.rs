use leptos::prelude::*;

/// Labeled input bound to a string signal.
#[component]
pub fn Input(
    /// Field label
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "email", "date", "time" or "tel"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_t
                value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
