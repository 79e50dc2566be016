//! Site configuration and the navigation tables derived from it.
//!
//! Defaults are the production values. A deployment can override any field
//! with a JSON object; missing fields keep their default.
//!
//! ```rust
//! use zhabits_landing::config::SiteConfig;
//!
//! let cfg = SiteConfig::from_json(r#"{ "copyright_year": 2030 }"#).unwrap();
//! assert_eq!(cfg.app_url, "https://zhabits.app");
//! assert_eq!(cfg.year(), 2030);
//! ```

use chrono::Datelike;
use serde::Deserialize;

use crate::error::Result;

/// A plain hyperlink in the header or footer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Opens in a new browsing context with `noopener noreferrer`.
    #[serde(default)]
    pub external: bool,
}

impl NavLink {
    pub fn internal(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
        }
    }

    pub fn external(label: &str, href: &str) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
        }
    }

    /// `target` attribute, present only for external links.
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    /// `rel` attribute, present only for external links.
    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// Hosted instance of the app; target of every call-to-action.
    pub app_url: String,
    pub contact_email: String,
    /// Appended to the footer links.
    pub social: Vec<NavLink>,
    /// `None` means the current year.
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "zhabits".into(),
            app_url: "https://zhabits.app".into(),
            contact_email: "team@zhabits.com".into(),
            social: Vec::new(),
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn year(&self) -> i32 {
        self.copyright_year.unwrap_or_else(|| chrono::Utc::now().year())
    }

    pub fn header_links(&self) -> Vec<NavLink> {
        vec![
            NavLink::external("Launch App", &self.app_url),
            NavLink::internal("Roadmap", "/roadmap.html"),
            NavLink::internal("About", "/about.html"),
            NavLink::internal("Contact", &format!("mailto:{}", self.contact_email)),
            NavLink::internal("Terms", "/terms.html"),
            NavLink::internal("Privacy", "/privacy.html"),
        ]
    }

    pub fn footer_links(&self) -> Vec<NavLink> {
        let mut links = vec![
            NavLink::external("Launch App", &self.app_url),
            NavLink::internal("About", "/about"),
            NavLink::internal("Terms", "/terms"),
            NavLink::internal("Privacy", "/privacy"),
        ];
        links.extend(self.social.iter().cloned());
        links
    }
}
