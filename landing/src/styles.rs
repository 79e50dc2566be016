//! CSS for the landing page.
//!
//! Mobile first; the `md` breakpoint (768px) widens type and switches the
//! grids to multiple columns.

/// Page stylesheet, inlined into the document head.
pub const LANDING_CSS: &str = r#"
:root {
    --accent: #20c9d8;
    --accent-hover: #1ab7c5;
    --purple: #581c87;
    --purple-soft: #c084fc;
    --text: #ffffff;
    --text-muted: #d1d5db;
    --text-dim: #9ca3af;
    --bg: #000000;
}

*, *::before, *::after { box-sizing: border-box; }

body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
}

a { color: inherit; text-decoration: none; }

.page {
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    overflow: hidden;
}

.tint {
    position: fixed;
    inset: 0;
    background: var(--purple);
    opacity: 0.5;
    mix-blend-mode: multiply;
    pointer-events: none;
}

.custom-cursor {
    position: fixed;
    top: 0;
    left: 0;
    width: 24px;
    height: 24px;
    border-radius: 9999px;
    background: var(--accent);
    mix-blend-mode: difference;
    pointer-events: none;
    z-index: 50;
    will-change: transform;
}

.container {
    max-width: 1280px;
    margin: 0 auto;
    padding: 0 24px;
}

/* Header */
.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    background: rgba(0, 0, 0, 0.5);
    backdrop-filter: blur(12px);
}

.site-nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding-top: 16px;
    padding-bottom: 16px;
}

.brand {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--accent);
}

.nav-links { display: flex; flex-wrap: wrap; gap: 16px; }

.nav-link { color: var(--text); transition: color 150ms ease; }
.nav-link:hover { color: var(--accent); }

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.hero-title {
    font-size: 3rem;
    font-weight: 700;
    margin: 0 0 32px;
    background: linear-gradient(to right, var(--purple-soft), var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-subtitle {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 0 auto 48px;
}

.cta-button {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    background: var(--accent);
    color: #000000;
    font-weight: 700;
    padding: 12px 32px;
    border-radius: 9999px;
    transition: background-color 150ms ease;
}
.cta-button:hover { background: var(--accent-hover); }
.cta-button .icon { width: 24px; height: 24px; }

/* Sections */
.section { padding: 80px 0; }
.section-features { background: rgba(88, 28, 135, 0.2); }
.section-cta {
    text-align: center;
    background: linear-gradient(to right, var(--purple), var(--accent-hover));
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
    margin: 0 0 48px;
}
.section-cta .section-title { margin-bottom: 32px; }

.grid { display: grid; grid-template-columns: 1fr; gap: 48px; }

.feature-card {
    background: rgba(0, 0, 0, 0.5);
    padding: 24px;
    border-radius: 8px;
}
.feature-icon { width: 48px; height: 48px; color: var(--accent); margin-bottom: 16px; }
.feature-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 8px; }
.feature-description { color: var(--text-muted); margin: 0; }

.testimonial-card {
    background: rgba(88, 28, 135, 0.2);
    padding: 24px;
    border-radius: 8px;
}
.testimonial-quote { font-size: 1.125rem; margin: 0 0 16px; }
.testimonial-name { font-weight: 700; color: var(--accent); margin: 0; }

.cta-copy {
    font-size: 1.25rem;
    max-width: 42rem;
    margin: 0 auto 48px;
}

/* Press feedback on the closing call-to-action */
.cta-press {
    transition: transform 200ms cubic-bezier(0.34, 1.56, 0.64, 1), background-color 150ms ease;
}
.cta-press:hover { transform: scale(1.05); }
.cta-press:active { transform: scale(0.95); }

/* Footer */
.site-footer { background: var(--bg); padding: 32px 0; }
.footer-row {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
}
.footer-links { display: flex; flex-wrap: wrap; gap: 16px; }
.footer-copyright {
    margin-top: 32px;
    text-align: center;
    color: var(--text-dim);
    font-size: 0.875rem;
}

@media (min-width: 768px) {
    .hero-title { font-size: 4.5rem; }
    .hero-subtitle { font-size: 1.5rem; }
    .grid-features { grid-template-columns: repeat(3, 1fr); }
    .grid-testimonials { grid-template-columns: repeat(2, 1fr); }
    .footer-row { flex-direction: row; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal { transition: none !important; }
}
"#;

/// Applied when scripting is unavailable so entrance animations never hide
/// content.
pub const NOSCRIPT_CSS: &str =
    ".reveal { opacity: 1 !important; transform: none !important; } .custom-cursor { display: none; }";
