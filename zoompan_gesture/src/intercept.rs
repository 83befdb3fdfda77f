// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture-ownership interception.
//!
//! While an ancestor surface still routes a touch sequence, the zoomable
//! surface only watches it. [`InterceptTracker`] remembers where the sequence
//! started and reports the first move that strays further than the threshold
//! on either axis; from that event on the surface claims the sequence.

use kurbo::Point;

use crate::pointer::{PointerEvent, PointerPhase};

/// Watches a pointer sequence for the move that should claim it.
#[derive(Clone, Debug)]
pub struct InterceptTracker {
    threshold: f64,
    start: Option<Point>,
    claimed: bool,
}

impl InterceptTracker {
    /// Creates a tracker with a threshold in viewport pixels.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
            claimed: false,
        }
    }

    /// Creates a tracker from a threshold in density-independent units.
    #[must_use]
    pub fn with_density(threshold_dp: f64, density: f64) -> Self {
        Self::new(threshold_dp * density)
    }

    /// Returns the threshold in viewport pixels.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Observes an event. Returns `true` exactly once per sequence, on the
    /// move that exceeds the threshold.
    pub fn observe(&mut self, event: &PointerEvent) -> bool {
        match event.phase {
            PointerPhase::Down => {
                // A press after a claim starts a new sequence; the release of
                // a claimed sequence is not routed through the tracker.
                if self.start.is_none() || self.claimed {
                    self.start = Some(event.position);
                    self.claimed = false;
                }
                false
            }
            PointerPhase::Move => {
                if self.claimed {
                    return false;
                }
                let Some(start) = self.start else {
                    return false;
                };
                let offset = event.position - start;
                if offset.x.abs() > self.threshold || offset.y.abs() > self.threshold {
                    self.claimed = true;
                    return true;
                }
                false
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.reset();
                false
            }
        }
    }

    /// Returns `true` once the current sequence has been claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Forgets the current sequence.
    pub fn reset(&mut self) {
        self.start = None;
        self.claimed = false;
    }
}
