use leptos::prelude::*;

use super::{Icon, use_reveal};
use crate::content::{FEATURES, FEATURES_HEADING, Feature};
use crate::motion::Entrance;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="section section-features">
            <div class="container">
                <h2 class="section-title">{FEATURES_HEADING}</h2>
                <div class="grid grid-features">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard feature=*feature index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card `index` of the grid; the index drives the entrance stagger.
#[component]
fn FeatureCard(feature: Feature, index: usize) -> impl IntoView {
    let style = use_reveal(Entrance::rise(index));

    view! {
        <article class="feature-card reveal" style=move || style.get()>
            <Icon icon=feature.icon class="feature-icon" />
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
