//! Contact section: reachout details and a demo-request form.
//!
//! The form is presentational — submission is intentionally a no-op.

use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="contact__panel">
                <div class="contact__details">
                    <h2 class="contact__title">"Ready for a Demo?"</h2>
                    <p class="contact__subtitle">
                        "Our team will walk you through the integration process in 15 minutes."
                    </p>
                    <div class="contact__channels">
                        <div class="contact__channel">
                            <span class="material-symbols-outlined">"mail"</span>
                            <span>"hello@smarthr4u.my"</span>
                        </div>
                        <div class="contact__channel">
                            <span class="material-symbols-outlined">"call"</span>
                            <span>"+60 3-8888 9999"</span>
                        </div>
                    </div>
                </div>

                <form class="contact__form" on:submit=move |ev| ev.prevent_default()>
                    <input class="contact__field" placeholder="Company Name"/>
                    <input class="contact__field" placeholder="Work Email"/>
                    <textarea
                        class="contact__field contact__field--area"
                        placeholder="Tell us about your team"
                    ></textarea>
                    <button type="button" class="btn btn--primary contact__submit">
                        "Send Demo Request"
                    </button>
                </form>
            </div>
        </section>
    }
}
