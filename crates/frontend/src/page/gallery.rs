use leptos::prelude::*;

const PHOTOS: [(&str, &str); 2] = [
    ("/images/hero-food.jpg", "Signature dish plating"),
    ("/images/menu-showcase.jpg", "Menu showcase"),
];

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="section section--alt">
            <div class="section__inner">
                <div class="section__heading">
                    <h2>"Gallery"</h2>
                    <div class="section__rule"></div>
                </div>
                <div class="gallery">
                    {PHOTOS
                        .into_iter()
                        .map(|(src, alt)| {
                            view! {
                                <div class="gallery__frame">
                                    <img src=src alt=alt />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
