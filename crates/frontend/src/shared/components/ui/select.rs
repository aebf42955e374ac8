use leptos::prelude::*;

/// Labeled select with a fixed option list.
#[component]
pub fn Select(
    /// Field label
    #[prop(into)]
    label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
    /// Options: (value, label) pairs, rendered in order
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|(option_value, option_label)| {
                        let value_for_selected = option_value.clone();
                        let is_selected = move || value.get() == value_for_selected;
                        view! {
                            <option value=option_value selected=is_selected>
                                {option_label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
