use leptos::prelude::*;

use super::{Icon, use_reveal};
use crate::config::NavLink;
use crate::content::{HERO_SUBTITLE, HERO_TITLE, IconRef};
use crate::motion::Entrance;

#[component]
pub fn Hero(
    /// Call-to-action link to the hosted app
    cta: NavLink,
) -> impl IntoView {
    let title_style = use_reveal(Entrance::rise(0));
    let subtitle_style = use_reveal(Entrance::rise(1));
    let cta_style = use_reveal(Entrance::rise(2));
    let target = cta.target();
    let rel = cta.rel();

    view! {
        <section class="hero">
            <div class="container">
                <h1 class="hero-title reveal" style=move || title_style.get()>
                    {HERO_TITLE}
                </h1>
                <p class="hero-subtitle reveal" style=move || subtitle_style.get()>
                    {HERO_SUBTITLE}
                </p>
                <a
                    href=cta.href
                    class="cta-button reveal"
                    target=target
                    rel=rel
                    style=move || cta_style.get()
                >
                    {cta.label}
                    <Icon icon=IconRef::ChevronRight />
                </a>
            </div>
        </section>
    }
}
