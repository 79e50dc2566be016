use leptos::prelude::*;

use super::{CallToAction, CursorOverlay, Features, Footer, Header, Hero, Testimonials};
use crate::config::{NavLink, SiteConfig};
use crate::content::{CTA_LABEL, HERO_CTA};
use crate::styles::{LANDING_CSS, NOSCRIPT_CSS};

/// The whole page: hero, features, testimonials, call-to-action and footer
/// under a fixed header, with the cursor overlay on top.
#[component]
pub fn LandingPage(config: SiteConfig) -> impl IntoView {
    let hero_cta = NavLink::external(HERO_CTA, &config.app_url);
    let closing_cta = NavLink::external(CTA_LABEL, &config.app_url);
    let header_links = config.header_links();
    let footer_links = config.footer_links();
    let year = config.year();
    let header_brand = config.brand.clone();
    let footer_brand = config.brand;

    view! {
        <div class="page">
            <div class="tint"></div>
            <CursorOverlay />
            <Header brand=header_brand links=header_links />
            <main>
                <Hero cta=hero_cta />
                <Features />
                <Testimonials />
                <CallToAction cta=closing_cta />
            </main>
            <Footer brand=footer_brand links=footer_links year=year />
        </div>
    }
}

/// Complete HTML document for static serving.
#[component]
pub fn Document(config: SiteConfig) -> impl IntoView {
    let title = format!("{} - Build Atomic Habits", config.brand);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style inner_html=LANDING_CSS></style>
                <noscript>
                    <style inner_html=NOSCRIPT_CSS></style>
                </noscript>
            </head>
            <body>
                <LandingPage config=config />
            </body>
        </html>
    }
}
