// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer tuning.

/// Thresholds used by [`GestureRecognizer`](crate::GestureRecognizer).
///
/// Distances are in viewport pixels, velocities in pixels per second.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GestureConfig {
    /// Distance the focus must travel before movement counts as a drag.
    pub touch_slop: f64,
    /// Release speed on either axis above which a drag becomes a fling.
    pub min_fling_velocity: f64,
    /// Per-axis cap applied to fling velocities.
    pub max_fling_velocity: f64,
    /// Longest gap between the first release and the second press of a
    /// double tap.
    pub double_tap_timeout_ms: u64,
    /// Largest distance between the two presses of a double tap.
    pub double_tap_slop: f64,
    /// Time window used for release velocity estimation.
    pub velocity_window_ms: u64,
}

impl GestureConfig {
    /// Default thresholds.
    pub const DEFAULT: Self = Self {
        touch_slop: 8.0,
        min_fling_velocity: 50.0,
        max_fling_velocity: 8000.0,
        double_tap_timeout_ms: 300,
        double_tap_slop: 100.0,
        velocity_window_ms: 100,
    };

    /// Sets [`Self::touch_slop`].
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets the fling velocity range.
    #[must_use]
    pub fn with_fling_velocity(mut self, min: f64, max: f64) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    /// Sets the double-tap timeout and slop.
    #[must_use]
    pub fn with_double_tap(mut self, timeout_ms: u64, slop: f64) -> Self {
        self.double_tap_timeout_ms = timeout_ms;
        self.double_tap_slop = slop;
        self
    }

    /// Sets [`Self::velocity_window_ms`].
    #[must_use]
    pub fn with_velocity_window_ms(mut self, window_ms: u64) -> Self {
        self.velocity_window_ms = window_ms;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
