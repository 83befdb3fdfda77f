// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity estimation from recent pointer samples.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
struct Sample {
    position: Point,
    timestamp_ms: u64,
}

/// Estimates pointer velocity over a sliding time window.
///
/// Samples older than the window (relative to the newest sample) are dropped
/// as new ones arrive. The estimate is the displacement between the oldest and
/// newest retained samples divided by their time difference, in pixels per
/// second.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 16]>,
    window_ms: u64,
}

impl VelocityTracker {
    /// Creates a tracker that considers the last `window_ms` milliseconds.
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            samples: SmallVec::new(),
            window_ms,
        }
    }

    /// Records a position.
    ///
    /// Samples that go back in time reset the tracker.
    pub fn add(&mut self, position: Point, timestamp_ms: u64) {
        if self
            .samples
            .last()
            .is_some_and(|last| timestamp_ms < last.timestamp_ms)
        {
            self.samples.clear();
        }
        self.samples.push(Sample {
            position,
            timestamp_ms,
        });
        let horizon = timestamp_ms.saturating_sub(self.window_ms);
        let stale = self
            .samples
            .iter()
            .take_while(|s| s.timestamp_ms < horizon)
            .count();
        if stale > 0 {
            self.samples.drain(..stale);
        }
    }

    /// Returns the current velocity estimate in pixels per second.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return Vec2::ZERO;
        };
        let dt_ms = last.timestamp_ms - first.timestamp_ms;
        if dt_ms == 0 {
            return Vec2::ZERO;
        }
        (last.position - first.position) * (1000.0 / dt_ms as f64)
    }

    /// Forgets all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Returns the number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Clamps each component of `velocity` to `[-max, max]`.
#[must_use]
pub fn cap_velocity(velocity: Vec2, max: f64) -> Vec2 {
    Vec2::new(velocity.x.clamp(-max, max), velocity.y.clamp(-max, max))
}
