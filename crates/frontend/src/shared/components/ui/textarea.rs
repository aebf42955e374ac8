use leptos::prelude::*;

/// Labeled multi-line text field bound to a string signal.
#[component]
pub fn Textarea(
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
    /// Rows attribute
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <textarea
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=rows
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || value.get()}
            </textarea>
        </div>
    }
}
