use leptos::prelude::*;

use super::Icon;
use crate::config::NavLink;
use crate::content::{CTA_COPY, CTA_HEADING, IconRef};

/// Closing banner. Hover/press scaling lives in CSS (`.cta-press`).
#[component]
pub fn CallToAction(cta: NavLink) -> impl IntoView {
    let target = cta.target();
    let rel = cta.rel();

    view! {
        <section id="get-started" class="section section-cta">
            <div class="container">
                <h2 class="section-title">{CTA_HEADING}</h2>
                <p class="cta-copy">{CTA_COPY}</p>
                <a href=cta.href class="cta-button cta-press" target=target rel=rel>
                    {cta.label}
                    <Icon icon=IconRef::MousePointer />
                </a>
            </div>
        </section>
    }
}
