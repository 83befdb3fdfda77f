// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition.
//!
//! A tap is a down/up pair whose movement never left the touch slop. A
//! double tap is confirmed on the *second* down, when it lands within the
//! double-tap slop of the first tap's down position and within the timeout
//! after the first tap's release.

use kurbo::Point;

/// Minimum time between the first release and the second press.
///
/// Faster sequences are treated as contact bounce rather than a double tap.
pub const DOUBLE_TAP_MIN_TIME_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Tap {
    down_position: Point,
    up_ms: u64,
}

/// Tracks taps across pointer sequences.
#[derive(Clone, Debug)]
pub struct TapState {
    timeout_ms: u64,
    slop: f64,
    down: Option<Point>,
    previous_tap: Option<Tap>,
    in_tap_region: bool,
    double_tapping: bool,
}

impl TapState {
    /// Creates a tracker with the given double-tap timeout and slop.
    #[must_use]
    pub fn new(timeout_ms: u64, slop: f64) -> Self {
        Self {
            timeout_ms,
            slop,
            down: None,
            previous_tap: None,
            in_tap_region: false,
            double_tapping: false,
        }
    }

    /// Records a first-pointer press. Returns `true` if it completes a double
    /// tap.
    pub fn on_down(&mut self, position: Point, timestamp_ms: u64) -> bool {
        let is_double = self.previous_tap.take().is_some_and(|tap| {
            let elapsed = timestamp_ms.saturating_sub(tap.up_ms);
            (DOUBLE_TAP_MIN_TIME_MS..=self.timeout_ms).contains(&elapsed)
                && (position - tap.down_position).hypot2() <= self.slop * self.slop
        });
        self.down = Some(position);
        self.in_tap_region = true;
        self.double_tapping = is_double;
        is_double
    }

    /// Marks the current press as no longer a tap candidate.
    pub fn leave_tap_region(&mut self) {
        self.in_tap_region = false;
    }

    /// Records the release of the last pointer.
    pub fn on_up(&mut self, timestamp_ms: u64) {
        self.previous_tap = if self.double_tapping || !self.in_tap_region {
            None
        } else {
            self.down.map(|down_position| Tap {
                down_position,
                up_ms: timestamp_ms,
            })
        };
        self.down = None;
        self.in_tap_region = false;
        self.double_tapping = false;
    }

    /// Forgets the current press and any pending first tap.
    pub fn cancel(&mut self) {
        self.down = None;
        self.previous_tap = None;
        self.in_tap_region = false;
        self.double_tapping = false;
    }

    /// Returns `true` between the second press of a double tap and its release.
    #[must_use]
    pub fn is_double_tapping(&self) -> bool {
        self.double_tapping
    }

    /// Returns `true` while the current press is still a tap candidate.
    #[must_use]
    pub fn is_in_tap_region(&self) -> bool {
        self.in_tap_region
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::TapState;

    fn tap(state: &mut TapState, position: Point, down_ms: u64, up_ms: u64) -> bool {
        let double = state.on_down(position, down_ms);
        state.on_up(up_ms);
        double
    }

    #[test]
    fn two_quick_taps_make_a_double_tap() {
        let mut state = TapState::new(300, 100.0);
        assert!(!tap(&mut state, Point::new(50.0, 50.0), 0, 60));
        assert!(state.on_down(Point::new(60.0, 55.0), 200));
        assert!(state.is_double_tapping());
        state.on_up(260);
        assert!(!state.is_double_tapping());
    }

    #[test]
    fn third_tap_does_not_chain() {
        let mut state = TapState::new(300, 100.0);
        tap(&mut state, Point::new(50.0, 50.0), 0, 60);
        assert!(tap(&mut state, Point::new(50.0, 50.0), 150, 200));
        assert!(!state.on_down(Point::new(50.0, 50.0), 300));
    }

    #[test]
    fn slow_or_distant_second_tap_is_single() {
        let mut state = TapState::new(300, 100.0);
        tap(&mut state, Point::new(50.0, 50.0), 0, 60);
        assert!(!state.on_down(Point::new(50.0, 50.0), 500));
        state.on_up(550);

        assert!(!state.on_down(Point::new(400.0, 50.0), 650));
    }

    #[test]
    fn bounce_is_ignored() {
        let mut state = TapState::new(300, 100.0);
        tap(&mut state, Point::new(50.0, 50.0), 0, 60);
        assert!(!state.on_down(Point::new(50.0, 50.0), 70));
    }

    #[test]
    fn moved_press_is_not_a_tap() {
        let mut state = TapState::new(300, 100.0);
        state.on_down(Point::new(50.0, 50.0), 0);
        state.leave_tap_region();
        state.on_up(60);
        assert!(!state.on_down(Point::new(50.0, 50.0), 150));
    }

    #[test]
    fn cancel_forgets_pending_tap() {
        let mut state = TapState::new(300, 100.0);
        tap(&mut state, Point::new(50.0, 50.0), 0, 60);
        state.cancel();
        assert!(!state.on_down(Point::new(50.0, 50.0), 150));
    }
}
