//! Decorative cursor that follows the pointer with a spring.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::error::Result;
use crate::pointer::{
    BrowserPointer, CursorSpring, PointerPosition, PointerSource, PointerTracker, Unsubscribe,
};

/// Assumed delta for the first frame after the loop wakes up.
const FIRST_FRAME_DT: f64 = 1.0 / 60.0;

#[component]
pub fn CursorOverlay() -> impl IntoView {
    let resting = CursorSpring::resting_at(PointerPosition::default());
    let (offset, set_offset) = signal(resting.position());

    Effect::new(move || {
        let frames = Rc::new(FrameLoop::new(resting, set_offset));
        let alive = frames.alive.clone();
        let binding = OverlayBinding::bind(BrowserPointer::new(), alive, move |pos| {
            frames.chase(pos)
        });

        if let Some(binding) = binding {
            on_cleanup(move || binding.release());
        }
    });

    view! {
        <div
            class="custom-cursor"
            aria-hidden="true"
            style=move || {
                let (x, y) = offset.get();
                format!("transform: translate3d({x}px, {y}px, 0)")
            }
        ></div>
    }
}

/// Pointer subscription plus the frame loop's liveness flag, released together
/// when the overlay unmounts.
struct OverlayBinding<S: Unsubscribe> {
    tracker: PointerTracker<S>,
    alive: Arc<AtomicBool>,
}

impl<S: Unsubscribe> OverlayBinding<S> {
    /// `None` when no pointer source is available; the overlay then stays at
    /// its resting position.
    fn bind<P>(
        source: Result<P>,
        alive: Arc<AtomicBool>,
        on_move: impl Fn(PointerPosition) + 'static,
    ) -> Option<Self>
    where
        P: PointerSource<Subscription = S>,
    {
        match source {
            Ok(source) => Some(Self {
                tracker: PointerTracker::mount(&source, on_move),
                alive,
            }),
            Err(err) => {
                log::warn!("cursor overlay stays static: {err}");
                alive.store(false, Ordering::Relaxed);
                None
            }
        }
    }

    fn release(self) {
        self.alive.store(false, Ordering::Relaxed);
        self.tracker.unmount();
    }
}

/// requestAnimationFrame loop stepping the cursor spring.
///
/// Runs only while the spring is moving; a pointer move wakes it up again.
/// `alive` is cleared on unmount and stops the loop for good.
struct FrameLoop {
    spring: Cell<CursorSpring>,
    pointer: Cell<PointerPosition>,
    last_frame_ms: Cell<Option<f64>>,
    running: Cell<bool>,
    alive: Arc<AtomicBool>,
    out: WriteSignal<(f64, f64)>,
}

impl FrameLoop {
    fn new(spring: CursorSpring, out: WriteSignal<(f64, f64)>) -> Self {
        Self {
            spring: Cell::new(spring),
            pointer: Cell::new(PointerPosition::default()),
            last_frame_ms: Cell::new(None),
            running: Cell::new(false),
            alive: Arc::new(AtomicBool::new(true)),
            out,
        }
    }

    fn chase(self: &Rc<Self>, pos: PointerPosition) {
        self.pointer.set(pos);
        if !self.running.replace(true) {
            self.last_frame_ms.set(None);
            Self::schedule(self.clone());
        }
    }

    fn schedule(this: Rc<Self>) {
        request_animation_frame(move || this.tick());
    }

    fn tick(self: Rc<Self>) {
        if !self.alive.load(Ordering::Relaxed) {
            self.running.set(false);
            return;
        }

        let now = monotonic_now_ms();
        let prev = self.last_frame_ms.replace(now);
        let dt = match (prev, now) {
            (Some(prev), Some(now)) => (now - prev) / 1000.0,
            _ => FIRST_FRAME_DT,
        };

        let mut spring = self.spring.get();
        let at_rest = spring.step(self.pointer.get(), dt);
        self.spring.set(spring);
        self.out.set(spring.position());

        if at_rest {
            self.running.set(false);
        } else {
            Self::schedule(self);
        }
    }
}

/// `performance.now()`, if the host has a performance timeline.
fn monotonic_now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}
