//! Trust bar: the compliance partners the product is built around.

use leptos::prelude::*;

use crate::content::TRUST_MARKS;

#[component]
pub fn TrustBar() -> impl IntoView {
    view! {
        <section class="trust-bar">
            <p class="trust-bar__caption">
                "Trusted by 500+ Malaysian SMEs & Compliant With"
            </p>
            <div class="trust-bar__marks">
                {TRUST_MARKS
                    .iter()
                    .map(|mark| {
                        view! {
                            <span class="trust-bar__mark">
                                <span class="material-symbols-outlined">{mark.icon}</span>
                                {mark.name}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
