// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: turn focus movement into scroll distances once the touch
//! slop has been exceeded.
//!
//! ## Usage
//!
//! 1) Start tracking with [`DragState::start`] at the pointer-down focus.
//! 2) On each move call [`DragState::update`]; it returns `None` while the
//!    focus is still within the slop, and the scroll distance since the last
//!    reported position afterwards.
//! 3) When the number of contacts changes, call [`DragState::rebase`] so the
//!    focus jump is not reported as movement.
//! 4) End with [`DragState::end`].
//!
//! Scroll distances point the way content should scroll, i.e. they are the
//! previous position minus the current one.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use zoompan_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(100.0, 100.0));
//!
//! // Within an 8px slop nothing is reported.
//! assert_eq!(drag.update(Point::new(104.0, 100.0), 8.0), None);
//!
//! // Leaving the slop reports the full distance from the start.
//! assert_eq!(drag.update(Point::new(90.0, 100.0), 8.0), Some(Vec2::new(10.0, 0.0)));
//! assert!(drag.has_left_slop());
//! ```

use kurbo::{Point, Vec2};

/// Tracks drag state for move event processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the drag operation.
    pub start_pos: Option<Point>,
    /// Last position reported as movement (or the start position).
    pub last_pos: Option<Point>,
    /// Whether movement has exceeded the slop since [`DragState::start`].
    pub left_slop: bool,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.left_slop = false;
    }

    /// Move the reference position without reporting movement.
    pub fn rebase(&mut self, pos: Point) {
        if self.is_tracking() {
            self.start_pos = Some(pos);
            self.last_pos = Some(pos);
        }
    }

    /// Update with a new position, returning the scroll distance since the
    /// last reported position once the slop has been exceeded.
    pub fn update(&mut self, pos: Point, slop: f64) -> Option<Vec2> {
        let offset = self.total_offset(pos)?;
        let last = self.last_pos?;
        if !self.left_slop {
            if offset.hypot2() <= slop * slop {
                return None;
            }
            self.left_slop = true;
        }
        let distance = last - pos;
        self.last_pos = Some(pos);
        if distance == Vec2::ZERO {
            return None;
        }
        Some(distance)
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while positions are being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once movement exceeded the slop.
    pub fn has_left_slop(&self) -> bool {
        self.left_slop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_not_tracking() {
        let drag = DragState::default();
        assert!(!drag.is_tracking());
        assert!(!drag.has_left_slop());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(50.0, 50.0), 0.0), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn movement_inside_slop_is_swallowed() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        assert_eq!(drag.update(Point::new(3.0, 4.0), 5.0), None);
        assert!(!drag.has_left_slop());
        assert_eq!(drag.last_pos, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn incremental_distances_after_slop() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 100.0));

        let first = drag.update(Point::new(80.0, 100.0), 8.0);
        assert_eq!(first, Some(Vec2::new(20.0, 0.0)));

        let second = drag.update(Point::new(75.0, 110.0), 8.0);
        assert_eq!(second, Some(Vec2::new(5.0, -10.0)));

        // Coming back inside the original slop still reports movement.
        let third = drag.update(Point::new(100.0, 100.0), 8.0);
        assert_eq!(third, Some(Vec2::new(-25.0, 10.0)));
    }

    #[test]
    fn zero_movement_after_slop_is_not_reported() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(20.0, 0.0), 8.0);
        assert_eq!(drag.update(Point::new(20.0, 0.0), 8.0), None);
    }

    #[test]
    fn rebase_moves_reference_without_reporting() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(20.0, 0.0), 8.0);

        drag.rebase(Point::new(200.0, 200.0));
        let delta = drag.update(Point::new(195.0, 200.0), 8.0);
        assert_eq!(delta, Some(Vec2::new(5.0, 0.0)));
        assert_eq!(
            drag.total_offset(Point::new(195.0, 200.0)),
            Some(Vec2::new(-5.0, 0.0))
        );
    }

    #[test]
    fn slop_is_measured_from_rebased_start() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.rebase(Point::new(50.0, 0.0));
        // 50px from the original start but only 4px from the rebased one.
        assert_eq!(drag.update(Point::new(54.0, 0.0), 8.0), None);
        assert!(!drag.has_left_slop());
        assert_eq!(
            drag.update(Point::new(60.0, 0.0), 8.0),
            Some(Vec2::new(-10.0, 0.0))
        );
    }

    #[test]
    fn rebase_without_start_is_ignored() {
        let mut drag = DragState::default();
        drag.rebase(Point::new(10.0, 10.0));
        assert!(!drag.is_tracking());
    }

    #[test]
    fn end_resets_drag_state() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(50.0, 25.0), 8.0);

        drag.end();

        assert!(drag.start_pos.is_none());
        assert!(drag.last_pos.is_none());
        assert!(!drag.has_left_slop());
        assert_eq!(drag.total_offset(Point::new(0.0, 0.0)), None);
    }
}
