//! Wheel-driven carousel state machine.
//!
//! The experience section hijacks the mouse wheel while it sits across the
//! viewport's vertical midline: wheel steps move the active card instead of
//! scrolling the page, and scrolling past either end hands control back to
//! the browser. All decisions live here; the web layer only measures the
//! DOM, forwards one [`WheelInput`] per event and applies the returned
//! [`WheelAction`].

use crate::constants::*;

/// What the event handler should do with one wheel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelAction {
    /// Leave the event alone and let the page scroll natively.
    Pass,
    /// Consume the event without navigating.
    Suppress,
    /// Consume the event and slide the track to `index`.
    Move { index: usize },
}

/// One wheel event plus the measurements the decision needs.
#[derive(Clone, Copy, Debug)]
pub struct WheelInput {
    pub delta_y: f64,
    /// Fallback axis, used only when `delta_y` is exactly zero.
    pub delta_x: f64,
    pub now_ms: f64,
    /// Carousel section bounds in viewport coordinates.
    pub section_top: f64,
    pub section_bottom: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl WheelInput {
    fn delta(&self) -> f64 {
        if self.delta_y != 0.0 {
            self.delta_y
        } else {
            self.delta_x
        }
    }
}

#[derive(Clone, Debug)]
pub struct Carousel {
    card_count: usize,
    current: usize,
    /// `Some(entry time)` while wheel events are captured.
    locked_since_ms: Option<f64>,
    cooldown_until_ms: Option<f64>,
}

impl Carousel {
    /// Returns `None` when there are no cards to navigate.
    pub fn new(card_count: usize) -> Option<Self> {
        (card_count > 0).then_some(Self {
            card_count,
            current: 0,
            locked_since_ms: None,
            cooldown_until_ms: None,
        })
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_locked(&self) -> bool {
        self.locked_since_ms.is_some()
    }

    /// True while the slide transition from the last move is still running.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        matches!(self.cooldown_until_ms, Some(until) if now_ms < until)
    }

    /// Clamp the active index after layout changes.
    pub fn reclamp(&mut self) {
        self.current = self.current.min(self.card_count - 1);
    }

    /// Decide what to do with one wheel event. Mutates lock and index state.
    pub fn on_wheel(&mut self, input: WheelInput) -> WheelAction {
        // Stacked layout below the breakpoint scrolls natively.
        if input.viewport_width < CAROUSEL_BREAKPOINT_PX {
            return WheelAction::Pass;
        }
        let delta = input.delta();
        if delta.abs() < WHEEL_DELTA_MIN {
            return WheelAction::Pass;
        }

        if section_centered(input.section_top, input.section_bottom, input.viewport_height) {
            if self.locked_since_ms.is_none() {
                self.locked_since_ms = Some(input.now_ms);
                log::debug!("[carousel] captured wheel at card {}", self.current);
            }
        } else if self.locked_since_ms.take().is_some() {
            log::debug!("[carousel] released wheel, section left centre");
        }
        let Some(locked_since) = self.locked_since_ms else {
            return WheelAction::Pass;
        };

        // Swallow leftover momentum from the scroll that brought the
        // section into place.
        if input.now_ms - locked_since < LOCK_SETTLE_MS {
            return WheelAction::Suppress;
        }

        // Scrolling past either end releases the lock so the page keeps
        // moving in the same gesture.
        let dir: isize = if delta > 0.0 { 1 } else { -1 };
        let at_start = self.current == 0 && dir < 0;
        let at_end = self.current + 1 == self.card_count && dir > 0;
        if at_start || at_end {
            self.locked_since_ms = None;
            log::debug!("[carousel] released wheel at card {}", self.current);
            return WheelAction::Pass;
        }

        if self.is_animating(input.now_ms) {
            return WheelAction::Suppress;
        }

        let next = (self.current as isize + dir).clamp(0, self.card_count as isize - 1) as usize;
        if next == self.current {
            return WheelAction::Suppress;
        }
        self.current = next;
        self.cooldown_until_ms = Some(input.now_ms + MOVE_COOLDOWN_MS);
        log::debug!("[carousel] move to card {}", self.current);
        WheelAction::Move { index: self.current }
    }
}

/// True when the section straddles the viewport's vertical midline.
/// Both comparisons are strict, so a section whose edge sits exactly on
/// the midline does not capture the wheel.
pub fn section_centered(top: f64, bottom: f64, viewport_height: f64) -> bool {
    let mid = viewport_height / 2.0;
    top < mid && bottom > mid
}

/// Horizontal layout of the card track, measured by the web layer.
#[derive(Clone, Copy, Debug)]
pub struct TrackMetrics {
    /// CSS gap between neighbouring cards.
    pub gap: f64,
    pub card_width: f64,
    /// Left edge of the track's untranslated box, i.e. its parent's
    /// content edge in viewport coordinates.
    pub track_left: f64,
    pub viewport_width: f64,
}

impl TrackMetrics {
    /// Translation that centres card `index` in the viewport.
    pub fn translate_x(&self, index: usize) -> f64 {
        let card_centre = index as f64 * (self.card_width + self.gap) + self.card_width / 2.0;
        self.viewport_width / 2.0 - self.track_left - card_centre
    }
}
