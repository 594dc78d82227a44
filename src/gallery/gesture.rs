// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch input on the lightbox.

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
}

/// Classifies the displacement `start_x - end_x`. Non-finite input is ignored.
#[must_use]
pub fn classify(delta: f32) -> Option<Swipe> {
    if !delta.is_finite() || delta.abs() <= SWIPE_THRESHOLD {
        None
    } else if delta > 0.0 {
        Some(Swipe::Left)
    } else {
        Some(Swipe::Right)
    }
}

/// Tracks a single touch gesture from press to lift.
///
/// Reset after every lift so a stray lift without a press is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn press(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn lift(&mut self, x: f32) -> Option<Swipe> {
        let start = self.start_x.take()?;
        classify(start - x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}

/// Result of feeding one half of a backdrop gesture to [`BackdropTap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Not a tap, or not decided yet.
    Ignored,
    /// The gesture was a tap on the backdrop.
    Tapped,
}

/// Tells a tap on the lightbox backdrop apart from a swipe that starts there.
///
/// A touch reports the backdrop release and the finger lift separately and
/// in no fixed order. A release seen while a finger is still tracked waits
/// for the lift; a lift classified as a swipe vetoes the tap either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackdropTap {
    armed: bool,
    released: bool,
    swiped: bool,
}

impl BackdropTap {
    /// The backdrop was pressed; starts a new gesture.
    pub fn press(&mut self) {
        *self = Self {
            armed: true,
            ..Self::default()
        };
    }

    /// The backdrop was released. `finger_down` is whether a touch is still
    /// being tracked for swipe detection.
    pub fn release(&mut self, finger_down: bool) -> TapOutcome {
        if !self.armed || self.swiped {
            self.cancel();
            return TapOutcome::Ignored;
        }
        if finger_down {
            self.released = true;
            return TapOutcome::Ignored;
        }
        self.cancel();
        TapOutcome::Tapped
    }

    /// The finger was lifted. `swiped` is whether the lift completed a swipe.
    pub fn lift(&mut self, swiped: bool) -> TapOutcome {
        if !self.armed {
            return TapOutcome::Ignored;
        }
        match (swiped, self.released) {
            (true, true) => {
                self.cancel();
                TapOutcome::Ignored
            }
            (true, false) => {
                self.swiped = true;
                TapOutcome::Ignored
            }
            (false, true) => {
                self.cancel();
                TapOutcome::Tapped
            }
            (false, false) => TapOutcome::Ignored,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_moves_are_ignored() {
        assert_eq!(classify(49.0), None);
        assert_eq!(classify(-49.0), None);
        assert_eq!(classify(SWIPE_THRESHOLD), None);
        assert_eq!(classify(-SWIPE_THRESHOLD), None);
    }

    #[test]
    fn non_finite_displacement_is_ignored() {
        assert_eq!(classify(f32::NAN), None);
        assert_eq!(classify(f32::INFINITY), None);
        assert_eq!(classify(f32::NEG_INFINITY), None);
        let mut tracker = SwipeTracker::default();
        tracker.press(f32::NAN);
        assert_eq!(tracker.lift(10.0), None);
    }

    #[test]
    fn long_moves_are_classified_by_sign() {
        assert_eq!(classify(51.0), Some(Swipe::Left));
        assert_eq!(classify(-51.0), Some(Swipe::Right));
    }

    #[test]
    fn tracker_uses_press_and_lift_positions() {
        let mut tracker = SwipeTracker::default();
        tracker.press(300.0);
        assert_eq!(tracker.lift(249.0), Some(Swipe::Left));

        tracker.press(100.0);
        assert_eq!(tracker.lift(151.0), Some(Swipe::Right));

        tracker.press(100.0);
        assert_eq!(tracker.lift(149.0), None);
    }

    #[test]
    fn lift_without_press_is_ignored() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.lift(0.0), None);
    }

    #[test]
    fn tracker_resets_after_each_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.press(500.0);
        assert!(tracker.is_tracking());
        tracker.lift(0.0);
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.lift(0.0), None);
    }

    #[test]
    fn cancel_discards_pending_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.press(500.0);
        tracker.cancel();
        assert_eq!(tracker.lift(0.0), None);
    }

    #[test]
    fn mouse_click_on_backdrop_is_a_tap() {
        let mut tap = BackdropTap::default();
        tap.press();
        assert_eq!(tap.release(false), TapOutcome::Tapped);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tap = BackdropTap::default();
        assert_eq!(tap.release(false), TapOutcome::Ignored);
        assert_eq!(tap.lift(false), TapOutcome::Ignored);
    }

    #[test]
    fn touch_tap_is_detected_in_either_order() {
        let mut tap = BackdropTap::default();
        tap.press();
        assert_eq!(tap.release(true), TapOutcome::Ignored);
        assert_eq!(tap.lift(false), TapOutcome::Tapped);

        tap.press();
        assert_eq!(tap.lift(false), TapOutcome::Ignored);
        assert_eq!(tap.release(false), TapOutcome::Tapped);
    }

    #[test]
    fn swipe_vetoes_tap_in_either_order() {
        let mut tap = BackdropTap::default();
        tap.press();
        assert_eq!(tap.release(true), TapOutcome::Ignored);
        assert_eq!(tap.lift(true), TapOutcome::Ignored);
        assert_eq!(tap.release(false), TapOutcome::Ignored);

        tap.press();
        assert_eq!(tap.lift(true), TapOutcome::Ignored);
        assert_eq!(tap.release(false), TapOutcome::Ignored);
    }

    #[test]
    fn new_press_clears_previous_swipe() {
        let mut tap = BackdropTap::default();
        tap.press();
        tap.lift(true);
        tap.press();
        assert_eq!(tap.release(false), TapOutcome::Tapped);
    }
}
