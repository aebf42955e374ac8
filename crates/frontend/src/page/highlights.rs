use leptos::prelude::*;

use crate::shared::components::CardAnimated;

const HIGHLIGHTS: [(&str, &str); 3] = [
    (
        "Fresh Ingredients",
        "Sourced daily from local farmers and sustainable suppliers. Every ingredient is selected for quality and flavor.",
    ),
    (
        "Chef-Crafted",
        "Our executive chef brings 20+ years of culinary expertise, creating innovative dishes that honor tradition.",
    ),
    (
        "Intimate Ambiance",
        "Thoughtfully designed spaces with warm lighting and curated music create the perfect backdrop for every occasion.",
    ),
];

#[component]
pub fn Highlights() -> impl IntoView {
    view! {
        <section class="section">
            <div class="section__inner">
                <div class="highlights">
                    {HIGHLIGHTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, (title, copy))| {
                            view! {
                                <CardAnimated delay_ms=(index as u32 * 100)>
                                    <div class="highlight">
                                        <div class="highlight__mark">"✓"</div>
                                        <h3>{title}</h3>
                                        <p>{copy}</p>
                                    </div>
                                </CardAnimated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
