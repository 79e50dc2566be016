//! Inline SVG icons (Lucide, 24x24 stroke).

use leptos::prelude::*;

use crate::content::IconRef;

/// Renders `icon` as an inline stroke SVG inheriting `currentColor`.
///
/// ```rust,ignore
/// view! { <Icon icon=IconRef::Star class="feature-icon" /> }
/// ```
#[component]
pub fn Icon(
    icon: IconRef,
    /// CSS class names for sizing and color
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            data-icon=icon.name()
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
