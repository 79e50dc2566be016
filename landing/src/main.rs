// zhabits landing page - browser entry
// Mounts the page client-side; see `render_page` for the static document.

use leptos::prelude::*;
use zhabits_landing::config::SiteConfig;
use zhabits_landing::sections::LandingPage;
use zhabits_landing::styles::LANDING_CSS;

/// Id of the optional inline JSON block overriding [`SiteConfig`] defaults.
const CONFIG_ELEMENT_ID: &str = "site-config";

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    let config = load_config();
    leptos::mount::mount_to_body(move || {
        view! {
            <style inner_html=LANDING_CSS></style>
            <LandingPage config=config />
        }
    });
}

/// Reads `<script id="site-config" type="application/json">` if present.
/// A malformed block is logged and ignored.
fn load_config() -> SiteConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(raw) = raw else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        log::warn!("using default site config: {err}");
        SiteConfig::default()
    })
}
