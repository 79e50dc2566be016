use leptos::prelude::*;

use super::LinkList;
use crate::config::NavLink;

#[component]
pub fn Footer(brand: String, links: Vec<NavLink>, year: i32) -> impl IntoView {
    let copyright = format!("\u{a9} {year} {brand}. All rights reserved.");

    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-row">
                    <a href="/" class="brand">{brand}</a>
                    <div class="footer-links">
                        <LinkList links=links />
                    </div>
                </div>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
