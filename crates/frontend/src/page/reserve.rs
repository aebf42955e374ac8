use leptos::prelude::*;

use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::components::CardAnimated;

/// Guest count choices offered by the reservation form.
const GUEST_CHOICES: [&str; 5] = ["1", "2", "3", "4", "5+"];

fn guest_options() -> Vec<(String, String)> {
    GUEST_CHOICES
        .iter()
        .map(|count| {
            let label = if *count == "1" {
                format!("{count} Guest")
            } else {
                format!("{count} Guests")
            };
            ((*count).to_string(), label)
        })
        .collect()
}

/// Field values of the reservation form.
///
/// Collected while the visitor types but never submitted; there is no
/// booking backend. Reservations are taken over the phone.
#[derive(Debug, Clone, Default, PartialEq)]
struct ReservationDraft {
    name: String,
    email: String,
    date: String,
    time: String,
    guests: String,
    phone: String,
    requests: String,
}

impl ReservationDraft {
    fn new() -> Self {
        Self {
            guests: GUEST_CHOICES[0].to_string(),
            ..Self::default()
        }
    }
}

#[component]
pub fn ReservationSection() -> impl IntoView {
    let draft = RwSignal::new(ReservationDraft::new());

    let name = Signal::derive(move || draft.with(|d| d.name.clone()));
    let email = Signal::derive(move || draft.with(|d| d.email.clone()));
    let date = Signal::derive(move || draft.with(|d| d.date.clone()));
    let time = Signal::derive(move || draft.with(|d| d.time.clone()));
    let guests = Signal::derive(move || draft.with(|d| d.guests.clone()));
    let phone = Signal::derive(move || draft.with(|d| d.phone.clone()));
    let requests = Signal::derive(move || draft.with(|d| d.requests.clone()));

    view! {
        <section id="reserve" class="section">
            <div class="section__inner section__inner--narrow">
                <div class="section__heading section__heading--centered">
                    <h2>"Reserve Your Table"</h2>
                    <div class="section__rule section__rule--centered"></div>
                </div>

                <CardAnimated>
                    <form class="form">
                        <div class="form__row">
                            <Input
                                label="Name"
                                value=name
                                placeholder="Your name"
                                on_input=Callback::new(move |value| {
                                    draft.update(|d| d.name = value)
                                })
                            />
                            <Input
                                label="Email"
                                value=email
                                input_type="email"
                                placeholder="your@email.com"
                                on_input=Callback::new(move |value| {
                                    draft.update(|d| d.email = value)
                                })
                            />
                        </div>
                        <div class="form__row">
                            <Input
                                label="Date"
                                value=date
                                input_type="date"
                                on_input=Callback::new(move |value| {
                                    draft.update(|d| d.date = value)
                                })
                            />
                            <Input
                                label="Time"
                                value=time
                                input_type="time"
                                on_input=Callback::new(move |value| {
                                    draft.update(|d| d.time = value)
                                })
                            />
                        </div>
                        <div class="form__row">
                            <Select
                                label="Guests"
                                value=guests
                                options=guest_options()
                                on_change=Callback::new(move |value| {
                                    draft.update(|d| d.guests = value)
                                })
                            />
                            <Input
                                label="Phone"
                                value=phone
                                input_type="tel"
                                placeholder="+1 (555) 123-4567"
                                on_input=Callback::new(move |value| {
                                    draft.update(|d| d.phone = value)
                                })
                            />
                        </div>
                        <Textarea
                            label="Special Requests"
                            value=requests
                            rows=4
                            placeholder="Allergies, dietary preferences, or special occasions..."
                            on_input=Callback::new(move |value| {
                                draft.update(|d| d.requests = value)
                            })
                        />
                        <Button block=true>"Reserve Table"</Button>
                    </form>
                </CardAnimated>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_options_cover_all_choices() {
        let options = guest_options();
        assert_eq!(options.len(), GUEST_CHOICES.len());
        assert_eq!(options[0], ("1".to_string(), "1 Guest".to_string()));
        assert_eq!(options[4], ("5+".to_string(), "5+ Guests".to_string()));
    }

    #[test]
    fn draft_starts_with_single_guest() {
        let draft = ReservationDraft::new();
        assert_eq!(draft.guests, "1");
        assert!(draft.name.is_empty());
    }
}
