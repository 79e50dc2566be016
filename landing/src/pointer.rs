//! Pointer tracking for the cursor overlay.
//!
//! The overlay is a 24px circle centred on the pointer. Pointer moves update a
//! [`PointerPosition`]; a per-axis [`Spring`] chases the derived
//! [`cursor_target`] once per animation frame.
//!
//! Event delivery is behind [`PointerSource`] so the subscription lifecycle can
//! be exercised without a browser. [`PointerTracker`] owns exactly one
//! subscription and releases it on unmount or drop.

use leptos::ev;
use leptos::prelude::{WindowListenerHandle, window_event_listener};

use crate::error::{LandingError, Result};

/// Overlay diameter in CSS pixels.
pub const CURSOR_DIAMETER: f64 = 24.0;
/// Half the diameter; the overlay is offset by this much to centre it.
pub const CURSOR_RADIUS: f64 = CURSOR_DIAMETER / 2.0;

pub const SPRING_STIFFNESS: f64 = 500.0;
pub const SPRING_DAMPING: f64 = 28.0;
pub const SPRING_MASS: f64 = 1.0;

/// Largest integration step, in seconds.
const MAX_SUBSTEP: f64 = 1.0 / 120.0;
/// Frame deltas above this are clamped (background tabs, debugger pauses).
const MAX_FRAME_DT: f64 = 1.0 / 15.0;
const REST_EPSILON: f64 = 0.01;

/// Last known pointer coordinates, relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_event(event: &web_sys::MouseEvent) -> Self {
        Self::new(f64::from(event.client_x()), f64::from(event.client_y()))
    }
}

/// Top-left corner the overlay should move to so it is centred on `pos`.
pub fn cursor_target(pos: PointerPosition) -> (f64, f64) {
    (pos.x - CURSOR_RADIUS, pos.y - CURSOR_RADIUS)
}

/// Damped spring along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Spring at rest at `position`, tuned for the cursor overlay.
    pub fn at(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }

    /// Advance by `dt` seconds toward `target`. Returns `true` once at rest.
    pub fn step(&mut self, target: f64, dt: f64) -> bool {
        let mut remaining = dt.clamp(0.0, MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force = -self.stiffness * (self.position - target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.settle(target)
    }

    fn settle(&mut self, target: f64) -> bool {
        let at_rest =
            (self.position - target).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON;
        if at_rest {
            self.position = target;
            self.velocity = 0.0;
        }
        at_rest
    }
}

/// Two springs driving the overlay's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorSpring {
    pub x: Spring,
    pub y: Spring,
}

impl CursorSpring {
    /// Resting where the overlay sits before any pointer event.
    pub fn resting_at(pos: PointerPosition) -> Self {
        let (x, y) = cursor_target(pos);
        Self {
            x: Spring::at(x),
            y: Spring::at(y),
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x.position, self.y.position)
    }

    /// Advance both axes toward the target for `pointer`. Returns `true` once
    /// both are at rest.
    pub fn step(&mut self, pointer: PointerPosition, dt: f64) -> bool {
        let (tx, ty) = cursor_target(pointer);
        let x_done = self.x.step(tx, dt);
        let y_done = self.y.step(ty, dt);
        x_done && y_done
    }
}

/// Releases a subscription.
pub trait Unsubscribe {
    fn unsubscribe(self);
}

impl Unsubscribe for WindowListenerHandle {
    fn unsubscribe(self) {
        self.remove();
    }
}

/// Something that delivers pointer-move events.
pub trait PointerSource {
    type Subscription: Unsubscribe;

    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> Self::Subscription;
}

impl<P: PointerSource + ?Sized> PointerSource for &P {
    type Subscription = P::Subscription;

    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> Self::Subscription {
        (**self).subscribe(handler)
    }
}

/// `mousemove` on the browser window.
#[derive(Clone, Copy, Debug)]
pub struct BrowserPointer(());

impl BrowserPointer {
    pub fn new() -> Result<Self> {
        web_sys::window()
            .map(|_| Self(()))
            .ok_or(LandingError::NoWindow)
    }
}

impl PointerSource for BrowserPointer {
    type Subscription = WindowListenerHandle;

    fn subscribe(&self, handler: Box<dyn Fn(PointerPosition)>) -> Self::Subscription {
        window_event_listener(ev::mousemove, move |event| {
            handler(PointerPosition::from_event(&event))
        })
    }
}

/// Scoped pointer subscription: attached by [`PointerTracker::mount`],
/// released by [`PointerTracker::unmount`] or on drop.
pub struct PointerTracker<S: Unsubscribe> {
    subscription: Option<S>,
}

impl<S: Unsubscribe> PointerTracker<S> {
    pub fn mount<P>(source: &P, on_move: impl Fn(PointerPosition) + 'static) -> Self
    where
        P: PointerSource<Subscription = S>,
    {
        let subscription = source.subscribe(Box::new(on_move));
        log::debug!("pointer tracker mounted");
        Self {
            subscription: Some(subscription),
        }
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            log::debug!("pointer tracker released");
        }
    }
}

impl<S: Unsubscribe> Drop for PointerTracker<S> {
    fn drop(&mut self) {
        self.release();
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeSurface;
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn target_is_offset_by_radius() {
        for (x, y) in [(0.0, 0.0), (100.0, 50.0), (-3.5, 1e4), (12.0, 12.0)] {
            let (tx, ty) = cursor_target(PointerPosition::new(x, y));
            assert_eq!(tx, x - CURSOR_RADIUS);
            assert_eq!(ty, y - CURSOR_RADIUS);
        }
    }

    #[test]
    fn pointer_move_updates_target() {
        let surface = FakeSurface::default();
        let latest = Rc::new(RefCell::new(PointerPosition::default()));
        assert_eq!(cursor_target(*latest.borrow()), (-12.0, -12.0));

        let sink = latest.clone();
        let _tracker = PointerTracker::mount(&surface, move |pos| *sink.borrow_mut() = pos);
        surface.move_to(100.0, 50.0);

        assert_eq!(cursor_target(*latest.borrow()), (88.0, 38.0));
    }

    #[test]
    fn one_listener_per_mount_and_none_after_unmount() {
        let surface = FakeSurface::default();
        for _ in 0..5 {
            let tracker = PointerTracker::mount(&surface, |_| {});
            assert_eq!(surface.listeners(), 1);
            tracker.unmount();
            assert_eq!(surface.listeners(), 0);
        }
    }

    #[test]
    fn dropping_tracker_releases_listener() {
        let surface = FakeSurface::default();
        {
            let _tracker = PointerTracker::mount(&surface, |_| {});
            assert_eq!(surface.listeners(), 1);
        }
        assert_eq!(surface.listeners(), 0);
    }

    #[test]
    fn unmounted_tracker_stops_receiving_moves() {
        let surface = FakeSurface::default();
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        let tracker = PointerTracker::mount(&surface, move |_| *counter.borrow_mut() += 1);
        surface.move_to(1.0, 1.0);
        tracker.unmount();
        surface.move_to(2.0, 2.0);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn spring_converges_without_overshooting_far() {
        let mut spring = Spring::at(0.0);
        let mut peak: f64 = 0.0;
        let mut settled = false;
        for _ in 0..240 {
            settled = spring.step(100.0, 1.0 / 60.0);
            peak = peak.max(spring.position);
            if settled {
                break;
            }
        }
        assert!(settled, "spring did not settle within 4s");
        assert_eq!(spring.position, 100.0);
        assert!(peak < 115.0, "overshoot too large: {peak}");
    }

    #[test]
    fn spring_moves_toward_target_every_frame_at_start() {
        let mut spring = Spring::at(0.0);
        spring.step(50.0, 1.0 / 60.0);
        let first = spring.position;
        spring.step(50.0, 1.0 / 60.0);
        assert!(first > 0.0 && spring.position > first);
    }

    #[test]
    fn huge_frame_gap_is_clamped() {
        let mut spring = Spring::at(0.0);
        spring.step(100.0, 30.0);
        assert!(spring.position.is_finite());
        assert!(spring.position < 100.0 * 1.5);
    }

    #[test]
    fn cursor_spring_starts_at_default_target() {
        let spring = CursorSpring::resting_at(PointerPosition::default());
        assert_eq!(spring.position(), (-12.0, -12.0));
    }

    #[test]
    fn cursor_spring_reaches_scenario_target() {
        let mut spring = CursorSpring::resting_at(PointerPosition::default());
        let pointer = PointerPosition::new(100.0, 50.0);
        let mut done = false;
        for _ in 0..600 {
            if spring.step(pointer, 1.0 / 60.0) {
                done = true;
                break;
            }
        }
        assert!(done);
        assert_eq!(spring.position(), (88.0, 38.0));
    }
}
