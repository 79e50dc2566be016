//! Error type for the few environmental failures the page can hit.
//!
//! None of these reach the visitor. Callers log them and fall back to
//! static content.

use thiserror::Error;

/// Errors raised while bootstrapping the page.
#[derive(Debug, Error)]
pub enum LandingError {
    /// The inline site configuration block is not valid JSON.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    /// No browser window is available (non-browser host or worker).
    #[error("no window available for pointer tracking")]
    NoWindow,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LandingError>;
