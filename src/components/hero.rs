//! Hero section: badge, typewriter headline, CTAs, compliance checklist,
//! and the floating dashboard mockup.

use leptos::prelude::*;

use crate::components::typewriter_text::TypewriterText;
use crate::content::{HERO_PHRASES, PAYROLL_TREND};

#[component]
pub fn Hero() -> impl IntoView {
    let phrases = HERO_PHRASES.iter().map(|p| (*p).to_owned()).collect::<Vec<_>>();

    view! {
        <section id="hero" class="hero">
            <div class="hero__content">
                <div class="hero__badge">
                    <span class="hero__badge-dot"></span>
                    "#1 HR Solution in Malaysia"
                </div>

                <h1 class="hero__headline">"Simplify HR for"</h1>
                <div class="hero__typewriter-line">
                    <TypewriterText phrases=phrases/>
                </div>

                <p class="hero__subcopy">
                    "Manage Payroll, Leave, Claims, and Attendance in one secure cloud \
                     platform specifically compliant with LHDN, KWSP, and PERKESO \
                     regulations."
                </p>

                <div class="hero__actions">
                    <a href="#pricing" class="btn btn--primary">
                        "Get Started Free"
                        <span class="material-symbols-outlined">"arrow_forward"</span>
                    </a>
                    <a href="#contact" class="btn btn--ghost">
                        <span class="material-symbols-outlined">"play_circle"</span>
                        "View Demo"
                    </a>
                </div>

                <div class="hero__checks">
                    <span class="hero__check">
                        <span class="material-symbols-outlined">"check_circle"</span>
                        "LHDN Compliant"
                    </span>
                    <span class="hero__check">
                        <span class="material-symbols-outlined">"check_circle"</span>
                        "KWSP Ready"
                    </span>
                    <span class="hero__check">
                        <span class="material-symbols-outlined">"check_circle"</span>
                        "SOCSO/EIS"
                    </span>
                </div>
            </div>

            <div class="hero__mockup">
                <div class="mockup-card">
                    <div class="mockup-card__header">
                        <div>
                            <span class="mockup-card__label">"Payroll Trend"</span>
                            <span class="mockup-card__amount">"RM 42,500.00"</span>
                        </div>
                        <div class="mockup-card__icon">
                            <span class="material-symbols-outlined">"trending_up"</span>
                        </div>
                    </div>
                    <div class="mockup-card__chart">
                        {PAYROLL_TREND
                            .iter()
                            .map(|value| {
                                view! {
                                    <div
                                        class="mockup-card__bar"
                                        style:height=format!("{value}%")
                                    ></div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="mockup-card__stats">
                        <div class="mockup-card__stat">
                            <span class="mockup-card__stat-label">"Staff Count"</span>
                            <span class="mockup-card__stat-value">"128"</span>
                        </div>
                        <div class="mockup-card__stat mockup-card__stat--good">
                            <span class="mockup-card__stat-label">"Compliance"</span>
                            <span class="mockup-card__stat-value">"100%"</span>
                        </div>
                    </div>
                </div>
                <div class="hero__mockup-tag">
                    <span class="material-symbols-outlined">"verified"</span>
                    "LHDN Ready"
                </div>
            </div>
        </section>
    }
}
