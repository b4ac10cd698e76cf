//! Pricing section with the monthly/yearly billing toggle.

use leptos::prelude::*;

use crate::content::PRICING_PLANS;
use crate::state::pricing::PricingPeriod;

#[component]
pub fn Pricing() -> impl IntoView {
    let (period, set_period) = signal(PricingPeriod::default());

    let period_label_class = move |for_period: PricingPeriod| {
        if period.get() == for_period {
            "pricing__period pricing__period--selected"
        } else {
            "pricing__period"
        }
    };
    let toggle_class = move || {
        if period.get() == PricingPeriod::Yearly {
            "pricing__toggle pricing__toggle--yearly"
        } else {
            "pricing__toggle"
        }
    };

    view! {
        <section id="pricing" class="pricing">
            <div class="pricing__intro">
                <h2 class="pricing__title">"Simple, Transparent Pricing"</h2>
                <p class="pricing__subtitle">"Choose the plan that fits your business size."</p>
            </div>

            <div class="pricing__toggle-row">
                <span class=move || period_label_class(PricingPeriod::Monthly)>"Monthly"</span>
                <button
                    class=toggle_class
                    on:click=move |_| set_period.update(|p| *p = p.toggled())
                    aria-label="Toggle billing period"
                >
                    <span class="pricing__toggle-knob"></span>
                </button>
                <span class=move || period_label_class(PricingPeriod::Yearly)>
                    "Yearly " <span class="pricing__save-tag">"Save 20%"</span>
                </span>
            </div>

            <div class="pricing__grid">
                {PRICING_PLANS
                    .iter()
                    .map(|plan| {
                        let card_class = if plan.most_popular {
                            "plan-card plan-card--popular"
                        } else {
                            "plan-card"
                        };
                        let amount = move || {
                            period
                                .get()
                                .monthly_price(plan)
                                .map_or_else(|| "Custom".to_owned(), |price| format!("RM {price}"))
                        };
                        let per_unit = move || {
                            period
                                .get()
                                .monthly_price(plan)
                                .map(|_| view! { <span class="plan-card__per">"staff/month"</span> })
                        };
                        view! {
                            <div class=card_class>
                                {plan
                                    .most_popular
                                    .then(|| {
                                        view! { <div class="plan-card__ribbon">"Most Popular"</div> }
                                    })}
                                <h3 class="plan-card__name">{plan.name}</h3>
                                <p class="plan-card__description">{plan.description}</p>
                                <div class="plan-card__price">
                                    <span class="plan-card__amount">{amount}</span>
                                    {per_unit}
                                </div>
                                <ul class="plan-card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| {
                                            view! {
                                                <li class="plan-card__feature">
                                                    <span class="material-symbols-outlined">
                                                        "check_circle"
                                                    </span>
                                                    {*feature}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <button class="btn plan-card__cta">{plan.cta}</button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
