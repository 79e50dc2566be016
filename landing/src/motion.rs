//! One-shot entrance animations.
//!
//! Every animated element starts [`RevealState::Initial`] (offset and
//! transparent) and moves once to [`RevealState::Settled`] after mount. The
//! transition itself is CSS; this module decides offsets, delays and the
//! inline style for each state.

/// Seconds each entrance takes.
pub const DURATION_S: f64 = 0.8;
/// Seconds between consecutive items of a list.
pub const STAGGER_S: f64 = 0.2;
/// Slide distance in CSS pixels.
pub const OFFSET_PX: f64 = 20.0;

/// Where an element starts relative to its resting place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    /// Vertical offset in px, positive is below.
    Y(f64),
    /// Horizontal offset in px, negative is left.
    X(f64),
}

impl Offset {
    fn translate(self) -> String {
        match self {
            Offset::Y(px) => format!("translate3d(0, {px}px, 0)"),
            Offset::X(px) => format!("translate3d({px}px, 0, 0)"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Initial,
    Settled,
}

impl RevealState {
    /// One-way: `Settled` never goes back.
    pub fn settle(&mut self) {
        *self = RevealState::Settled;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub offset: Offset,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Entrance {
    /// Fade in while rising `OFFSET_PX`, delayed by `index` stagger steps.
    pub fn rise(index: usize) -> Self {
        Self {
            offset: Offset::Y(OFFSET_PX),
            duration_s: DURATION_S,
            delay_s: stagger_delay(index),
        }
    }

    /// Fade in sliding horizontally: even items from the left, odd from the
    /// right.
    pub fn slide_alternating(index: usize) -> Self {
        let px = if index % 2 == 0 { -OFFSET_PX } else { OFFSET_PX };
        Self {
            offset: Offset::X(px),
            duration_s: DURATION_S,
            delay_s: stagger_delay(index),
        }
    }

    /// Seconds after mount at which the element is fully settled.
    pub fn settles_at(&self) -> f64 {
        self.delay_s + self.duration_s
    }

    /// Inline style for `state`.
    pub fn style(&self, state: RevealState) -> String {
        let transition = format!(
            "transition: opacity {d:.2}s ease-out {delay:.2}s, transform {d:.2}s ease-out {delay:.2}s",
            d = self.duration_s,
            delay = self.delay_s,
        );
        match state {
            RevealState::Initial => format!(
                "{transition}; opacity: 0; transform: {}",
                self.offset.translate()
            ),
            RevealState::Settled => format!("{transition}; opacity: 1; transform: none"),
        }
    }
}

pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_S
}
