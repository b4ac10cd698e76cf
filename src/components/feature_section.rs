//! Feature grid, instantiated once per pillar group.

use leptos::prelude::*;

use crate::content::Feature;

/// A titled grid of feature cards.
///
/// `id` must match the nav entry pointing at this section. The inverted
/// variant renders on a filled panel for the "advancing your skills"
/// block.
#[component]
pub fn FeatureSection(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    features: &'static [Feature],
    #[prop(optional)] inverted: bool,
) -> impl IntoView {
    let section_class = if inverted {
        "feature-section feature-section--inverted"
    } else {
        "feature-section"
    };

    view! {
        <section id=id class=section_class>
            <div class="feature-section__intro">
                <h2 class="feature-section__title">{title}</h2>
                <p class="feature-section__subtitle">{subtitle}</p>
            </div>
            <div class="feature-section__grid">
                {features
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="feature-card">
                                <div class="feature-card__icon">
                                    <span class="material-symbols-outlined">{feature.icon}</span>
                                </div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__description">{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
