//! Page footer: brand line, link columns, legal copy.

use leptos::prelude::*;

const LINK_COLUMNS: &[(&str, &[&str])] = &[
    ("Product", &["Features", "Pricing", "Mobile App", "Updates"]),
    ("Resources", &["Help Center", "LHDN PCB Calculator", "HR Guides", "API Documentation"]),
    ("Company", &["About Us", "Careers", "Contact", "Privacy Policy"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__brand">
                    <span class="footer__name">
                        "SMART" <span class="footer__name-accent">"HR"</span>
                    </span>
                    <span class="footer__tagline">"Solutions 4U"</span>
                    <p class="footer__blurb">
                        "Making HR simple, compliant, and efficient for Malaysian \
                         businesses of all sizes since 2018."
                    </p>
                </div>
                {LINK_COLUMNS
                    .iter()
                    .map(|(title, links)| {
                        view! {
                            <div class="footer__column">
                                <h4 class="footer__heading">{*title}</h4>
                                <ul class="footer__links">
                                    {links
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <li>
                                                    <a href="#" class="footer__link">{*link}</a>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="footer__legal">
                <p>"© 2024 Smart HR 4U Sdn Bhd. All rights reserved."</p>
            </div>
        </footer>
    }
}
