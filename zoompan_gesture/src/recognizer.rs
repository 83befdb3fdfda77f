// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer stream to semantic gestures.
//!
//! [`GestureRecognizer`] composes the single-purpose trackers of this crate:
//! [`DragState`] for slop handling, [`VelocityTracker`] for release velocity
//! and [`TapState`] for double taps. With several contacts down it follows
//! their centroid; when a contact joins or leaves, the drag reference is
//! rebased and the velocity history dropped so the centroid jump is neither
//! scrolled nor flung.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::GestureConfig;
use crate::drag::DragState;
use crate::pointer::{PointerEvent, PointerId, PointerPhase};
use crate::scale::centroid;
use crate::tap::TapState;
use crate::velocity::{VelocityTracker, cap_velocity};

/// A semantic gesture derived from raw pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// The first contact of a sequence went down.
    Down {
        /// Press position.
        position: Point,
    },
    /// The focus moved after leaving the touch slop.
    Drag {
        /// Current focus.
        position: Point,
        /// Scroll distance: previous focus minus current focus.
        delta: Vec2,
    },
    /// The last contact was released fast enough to fling.
    ///
    /// Always followed by [`Gesture::Up`] in the same batch.
    Fling {
        /// Capped touch velocity in pixels per second.
        velocity: Vec2,
    },
    /// The second press of a double tap. Follows [`Gesture::Down`] in the
    /// same batch.
    DoubleTap {
        /// Position of the second press.
        position: Point,
    },
    /// The last contact was released.
    Up {
        /// Release position.
        position: Point,
    },
    /// The host aborted the sequence.
    Cancel,
}

/// Gestures produced by one pointer event.
pub type Gestures = SmallVec<[Gesture; 4]>;

/// Turns [`PointerEvent`]s into [`Gesture`]s.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    pointers: SmallVec<[(PointerId, Point); 4]>,
    drag: DragState,
    velocity: VelocityTracker,
    taps: TapState,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pointers: SmallVec::new(),
            drag: DragState::default(),
            velocity: VelocityTracker::new(config.velocity_window_ms),
            taps: TapState::new(config.double_tap_timeout_ms, config.double_tap_slop),
        }
    }

    /// Returns the active thresholds.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` while at least one contact is down.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Returns the number of contacts currently down.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Returns `true` once the current sequence has moved beyond the slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.has_left_slop()
    }

    /// Feeds one pointer event.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> Gestures {
        let mut out = Gestures::new();
        match event.phase {
            PointerPhase::Down => self.on_down(event, &mut out),
            PointerPhase::Move => self.on_move(event, &mut out),
            PointerPhase::Up => self.on_up(event, &mut out),
            PointerPhase::Cancel => {
                if self.is_tracking() {
                    out.push(Gesture::Cancel);
                }
                self.reset();
            }
        }
        out
    }

    /// Drops all per-sequence state, including a pending first tap.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.drag.end();
        self.velocity.clear();
        self.taps.cancel();
    }

    fn on_down(&mut self, event: &PointerEvent, out: &mut Gestures) {
        if let Some(entry) = self.entry_mut(event.pointer_id) {
            // Duplicate press for a known contact; treat it as a move.
            entry.1 = event.position;
            return;
        }
        self.pointers.push((event.pointer_id, event.position));
        let focus = self.focus().unwrap_or(event.position);

        if self.pointers.len() == 1 {
            self.velocity.clear();
            self.velocity.add(focus, event.timestamp_ms);
            self.drag.start(focus);
            out.push(Gesture::Down {
                position: event.position,
            });
            if self.taps.on_down(event.position, event.timestamp_ms) {
                out.push(Gesture::DoubleTap {
                    position: event.position,
                });
            }
        } else {
            self.drag.rebase(focus);
            self.velocity.clear();
            self.velocity.add(focus, event.timestamp_ms);
            self.taps.leave_tap_region();
        }
    }

    fn on_move(&mut self, event: &PointerEvent, out: &mut Gestures) {
        let Some(entry) = self.entry_mut(event.pointer_id) else {
            return;
        };
        entry.1 = event.position;
        let Some(focus) = self.focus() else {
            return;
        };
        self.velocity.add(focus, event.timestamp_ms);
        if self.taps.is_double_tapping() {
            return;
        }
        if let Some(delta) = self.drag.update(focus, self.config.touch_slop) {
            out.push(Gesture::Drag {
                position: focus,
                delta,
            });
        }
        if self.drag.has_left_slop() {
            self.taps.leave_tap_region();
        }
    }

    fn on_up(&mut self, event: &PointerEvent, out: &mut Gestures) {
        if self.entry_mut(event.pointer_id).is_none() {
            return;
        }
        self.pointers.retain(|(id, _)| *id != event.pointer_id);

        if let Some(focus) = self.focus() {
            self.drag.rebase(focus);
            self.velocity.clear();
            self.velocity.add(focus, event.timestamp_ms);
            return;
        }

        self.velocity.add(event.position, event.timestamp_ms);
        if self.drag.has_left_slop() && !self.taps.is_double_tapping() {
            let velocity = self.velocity.velocity();
            let min = self.config.min_fling_velocity;
            if velocity.x.abs() > min || velocity.y.abs() > min {
                let velocity = cap_velocity(velocity, self.config.max_fling_velocity);
                log::trace!("fling released at {velocity:?} px/s");
                out.push(Gesture::Fling { velocity });
            }
        }
        self.taps.on_up(event.timestamp_ms);
        self.drag.end();
        self.velocity.clear();
        out.push(Gesture::Up {
            position: event.position,
        });
    }

    fn entry_mut(&mut self, id: PointerId) -> Option<&mut (PointerId, Point)> {
        self.pointers.iter_mut().find(|(pid, _)| *pid == id)
    }

    fn focus(&self) -> Option<Point> {
        centroid(self.pointers.iter().map(|(_, p)| *p))
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::DEFAULT)
    }
}
