use leptos::prelude::*;

use crate::motion::{Entrance, RevealState};

/// Inline style for an element that plays `entrance` once after mount.
///
/// Renders the initial (offset, transparent) style first and settles two
/// frames later so the browser paints the starting point before the CSS
/// transition runs. Server-rendered output keeps the initial style; the
/// `reveal` class plus the noscript stylesheet make it visible without script.
pub fn use_reveal(entrance: Entrance) -> Signal<String> {
    let state = RwSignal::new(RevealState::Initial);

    Effect::new(move || {
        request_animation_frame(move || {
            request_animation_frame(move || state.update(RevealState::settle));
        });
    });

    Signal::derive(move || entrance.style(state.get()))
}
