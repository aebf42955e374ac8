use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section">
            <div class="section__inner">
                <div class="about">
                    <div class="about__copy">
                        <h2>"About Luna Bistro"</h2>
                        <div class="section__rule"></div>
                        <p>
                            "Founded in 2018, Luna Bistro emerged from a vision to create a sanctuary for food lovers seeking authentic culinary excellence. Our name reflects the restaurant's commitment to creating magical moments, under the glow of warm lighting and surrounded by like-minded diners."
                        </p>
                        <p>
                            "Chef Marcus Chen leads our kitchen with a philosophy rooted in respect for ingredients and technique. Each dish tells a story of sourcing, preparation, and passion. We believe that exceptional food, paired with genuine hospitality, creates memories that last a lifetime."
                        </p>
                        <p>
                            "Whether you're celebrating a milestone or simply seeking an exceptional meal, Luna Bistro welcomes you to our table."
                        </p>
                    </div>
                    <div class="about__photo">
                        <img src="/images/chef-craft.jpg" alt="Chef Marcus Chen at work" />
                    </div>
                </div>
            </div>
        </section>
    }
}
