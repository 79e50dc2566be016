//! Static rendering of the landing page.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use pretty_assertions::assert_eq;
use zhabits_landing::config::{NavLink, SiteConfig};
use zhabits_landing::content::{FEATURES, TESTIMONIALS};
use zhabits_landing::render_page;
use zhabits_landing::sections::{Features, Testimonials};

fn config() -> SiteConfig {
    SiteConfig {
        social: vec![NavLink::external("GitHub", "https://github.com/zhabits")],
        copyright_year: Some(2025),
        ..Default::default()
    }
}

/// Opening `<a ...>` tags whose `href` is exactly `href`.
fn anchors<'a>(html: &'a str, href: &str) -> Vec<&'a str> {
    let needle = format!("href=\"{href}\"");
    html.match_indices("<a ")
        .filter_map(|(start, _)| {
            let end = start + html[start..].find('>')?;
            Some(&html[start..=end])
        })
        .filter(|tag| tag.contains(&needle))
        .collect()
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| html.find(n).unwrap_or_else(|| panic!("missing {n:?}")))
        .collect()
}

#[test]
fn renders_all_sections_in_funnel_order() {
    let html = render_page(&config());

    let order = positions(
        &html,
        &[
            "class=\"site-header\"",
            "class=\"hero\"",
            "id=\"features\"",
            "id=\"testimonials\"",
            "id=\"get-started\"",
            "class=\"site-footer\"",
        ],
    );
    let mut sorted = order.clone();
    sorted.sort_unstable();
    assert_eq!(order, sorted);
}

#[test]
fn hero_title_renders_inside_body() {
    let html = render_page(&config());

    let body = html.find("<body").expect("no body");
    let hero = html.find("class=\"hero\"").expect("no hero");
    assert!(body < hero);
    assert!(html[hero..].contains("Build Atomic Habits"));
}

#[test]
fn feature_cards_are_staggered_in_declared_order() {
    let html = Owner::new().with(|| view! { <Features /> }.to_html());

    let delays = positions(
        &html,
        &["ease-out 0.00s", "ease-out 0.20s", "ease-out 0.40s", "ease-out 0.60s"],
    );
    let mut sorted = delays.clone();
    sorted.sort_unstable();
    assert_eq!(delays, sorted);
}

#[test]
fn feature_grid_has_one_card_per_feature_in_order() {
    let html = Owner::new().with(|| view! { <Features /> }.to_html());

    let cards: Vec<&str> = html.split("<article class=\"feature-card reveal\"").skip(1).collect();
    assert_eq!(cards.len(), FEATURES.len());

    for (card, feature) in cards.iter().zip(FEATURES) {
        assert!(card.contains(&format!("data-icon=\"{}\"", feature.icon.name())));
        assert!(card.contains(feature.title), "{} missing", feature.title);
        assert!(card.contains(feature.description));
    }
}

#[test]
fn testimonials_attribute_quotes_in_order() {
    let html = Owner::new().with(|| view! { <Testimonials /> }.to_html());

    let cards: Vec<&str> = html.split("<figure class=\"testimonial-card reveal\"").skip(1).collect();
    assert_eq!(cards.len(), TESTIMONIALS.len());

    for (card, testimonial) in cards.iter().zip(TESTIMONIALS) {
        assert!(card.contains(testimonial.quote));
        assert!(card.contains(&format!("- {}", testimonial.name)));
    }
}

#[test]
fn header_and_footer_links_resolve_to_declared_targets() {
    let html = render_page(&config());

    for href in [
        "/",
        "/roadmap.html",
        "/about.html",
        "mailto:team@zhabits.com",
        "/terms.html",
        "/privacy.html",
        "/about",
        "/terms",
        "/privacy",
        "https://github.com/zhabits",
    ] {
        assert!(!anchors(&html, href).is_empty(), "no link to {href}");
    }
}

#[test]
fn external_links_do_not_leak_opener_or_referrer() {
    let html = render_page(&config());

    let app_links = anchors(&html, "https://zhabits.app");
    // header, hero, closing call-to-action, footer
    assert_eq!(app_links.len(), 4);

    for tag in app_links
        .iter()
        .chain(anchors(&html, "https://github.com/zhabits").iter())
    {
        assert!(tag.contains("target=\"_blank\""), "{tag}");
        assert!(tag.contains("rel=\"noopener noreferrer\""), "{tag}");
    }

    for tag in anchors(&html, "/about.html") {
        assert!(!tag.contains("target="), "{tag}");
    }
}

#[test]
fn cursor_overlay_starts_at_default_target() {
    let html = render_page(&config());

    assert!(html.contains("class=\"custom-cursor\""));
    assert!(html.contains("translate3d(-12px, -12px, 0)"));
}

#[test]
fn entrance_animations_render_initial_state_with_noscript_fallback() {
    let html = render_page(&config());

    assert!(html.contains("; opacity: 0; transform: translate3d(0, 20px, 0)"));
    assert!(html.contains("; opacity: 0; transform: translate3d(-20px, 0, 0)"));
    assert!(!html.contains("; opacity: 1; transform: none"));
    assert!(html.contains("<noscript>"));
    assert!(html.contains(".reveal { opacity: 1 !important"));
}

#[test]
fn footer_shows_configured_year() {
    let html = render_page(&config());
    assert!(html.contains("2025 zhabits. All rights reserved."));
}
