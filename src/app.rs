//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::contact::Contact;
use crate::components::feature_section::FeatureSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::pricing::Pricing;
use crate::components::trust_bar::TrustBar;
use crate::components::wave_host::WaveHost;
use crate::content::{ADVANCED_FEATURES, CORE_FEATURES};
use crate::util::theme_store;

/// Root component.
///
/// Owns the theme flag and provides it as context; composes the section
/// stack over the animated background.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Apply the persisted theme before the first paint so themed elements
    // never flash the wrong variant.
    let initial = theme_store::read_preference();
    theme_store::apply(initial);

    let theme = RwSignal::new(initial);
    provide_context(theme);

    view! {
        <Title text="Smart HR 4U | HR software for Malaysian SMEs"/>

        <WaveHost/>
        <Navbar/>
        <main class="page">
            <Hero/>
            <TrustBar/>
            <FeatureSection
                id="features"
                title="The Core HR Pillars"
                subtitle="Master the essentials of workforce management with tools designed for accuracy and compliance."
                features=CORE_FEATURES
            />
            <Pricing/>
            <FeatureSection
                id="advanced"
                title="Nurturing Your Workforce"
                subtitle="Go beyond the basics with tools designed to develop talent and streamline operations."
                features=ADVANCED_FEATURES
                inverted=true
            />
            <Contact/>
        </main>
        <Footer/>
    }
}
