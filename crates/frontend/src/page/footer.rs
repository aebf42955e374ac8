use leptos::prelude::*;

struct FooterColumn {
    heading: &'static str,
    lines: &'static [&'static str],
}

const COLUMNS: [FooterColumn; 3] = [
    FooterColumn {
        heading: "Location",
        lines: &["428 Urban Avenue", "Downtown District", "New York, NY 10001"],
    },
    FooterColumn {
        heading: "Contact",
        lines: &[
            "Phone: (212) 555-0123",
            "Email: hello@lunabistro.com",
            "Reservations: reserve@lunabistro.com",
        ],
    },
    FooterColumn {
        heading: "Hours",
        lines: &[
            "Tue-Thu: 5pm-11pm",
            "Fri-Sat: 5pm-12am",
            "Sun: 5pm-10pm",
            "Closed Mondays",
        ],
    },
];

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__columns">
                    {COLUMNS
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div class="footer__column">
                                    <h4>{column.heading}</h4>
                                    {column
                                        .lines
                                        .iter()
                                        .map(|line| view! { <p>{*line}</p> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="footer__bottom">
                    <div class="footer__copyright">
                        "© 2024 Luna Bistro. All rights reserved."
                    </div>
                    <div class="footer__social">
                        <a href="#" class="footer__social-link">
                            "Instagram"
                        </a>
                        <a href="#" class="footer__social-link">
                            "Facebook"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
