//! # zhabits-landing
//!
//! Marketing landing page for zhabits, written as Leptos 0.8 components.
//!
//! The same component tree is mounted in the browser by the `csr` binary and
//! rendered to a static document by [`render_page`]:
//!
//! ```rust,ignore
//! use zhabits_landing::{config::SiteConfig, render_page};
//!
//! let html = render_page(&SiteConfig::default());
//! std::fs::write("index.html", html)?;
//! ```
//!
//! ## Modules
//!
//! - [`content`] - feature cards, testimonials, icons
//! - [`config`] - brand, URLs and the navigation tables
//! - [`pointer`] - cursor overlay tracking and spring
//! - [`motion`] - one-shot entrance animations
//! - [`sections`] - Leptos components
//! - [`styles`] - CSS constants

pub mod config;
pub mod content;
pub mod error;
pub mod motion;
pub mod pointer;
pub mod sections;
pub mod styles;

pub use error::{LandingError, Result};

use config::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::Document;

/// Render the page as a complete HTML document, including `<!DOCTYPE html>`.
///
/// Entrance animations are left in their initial state; the inlined
/// `<noscript>` stylesheet shows everything when script is unavailable.
pub fn render_page(config: &SiteConfig) -> String {
    let config = config.clone();
    let html = Owner::new().with(move || view! { <Document config=config /> }.to_html());

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_complete_document() {
        let html = render_page(&SiteConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("zhabits"));
        assert!(html.contains("<noscript>"));
    }
}
