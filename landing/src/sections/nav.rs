use leptos::prelude::*;

use crate::config::NavLink;

/// Fixed top bar: brand on the left, static links on the right.
#[component]
pub fn Header(brand: String, links: Vec<NavLink>) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-nav container">
                <a href="/" class="brand">{brand}</a>
                <div class="nav-links">
                    <LinkList links=links />
                </div>
            </nav>
        </header>
    }
}

/// Plain anchors; external ones open in a new tab without opener or referrer.
#[component]
pub fn LinkList(links: Vec<NavLink>) -> impl IntoView {
    links
        .into_iter()
        .map(|link| {
            let target = link.target();
            let rel = link.rel();
            view! {
                <a href=link.href class="nav-link" target=target rel=rel>
                    {link.label}
                </a>
            }
        })
        .collect_view()
}
