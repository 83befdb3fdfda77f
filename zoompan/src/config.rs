// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use zoompan_gesture::GestureConfig;
use zoompan_motion::{FlingConfig, TransitionAnimator};

/// Tunables of a [`ZoomPanController`](crate::ZoomPanController).
///
/// Defaults describe an unsized surface at scale `1.0` that fits its content
/// to the viewport width once sized.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ZoomPanConfig {
    /// Lower scale bound. Advisory while [`Self::scale_to_fit`] is set.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Derive the minimum scale from the viewport/content width ratio.
    pub scale_to_fit: bool,
    /// Double tap at the maximum scale returns to the minimum.
    pub loop_scale: bool,
    /// Multiplier applied to the minimum scale to derive the maximum during
    /// layout.
    pub max_scale_factor: f64,
    /// Duration of programmatic transitions.
    pub animation_duration_ms: u64,
    /// Interception threshold in density-independent units.
    pub move_threshold_dp: f64,
    /// Pixels per density-independent unit.
    pub display_density: f64,
    /// Gesture recognition thresholds.
    pub gesture: GestureConfig,
    /// Fling deceleration.
    pub fling: FlingConfig,
}

impl ZoomPanConfig {
    /// Default configuration.
    pub const DEFAULT: Self = Self {
        min_scale: 1.0,
        max_scale: 1.0,
        scale_to_fit: true,
        loop_scale: true,
        max_scale_factor: 1.0,
        animation_duration_ms: TransitionAnimator::DEFAULT_DURATION_MS,
        move_threshold_dp: 12.0,
        display_density: 1.0,
        gesture: GestureConfig::DEFAULT,
        fling: FlingConfig::DEFAULT,
    };

    /// Sets the scale limits.
    #[must_use]
    pub fn with_scale_limits(mut self, min_scale: f64, max_scale: f64) -> Self {
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self
    }

    /// Sets [`Self::scale_to_fit`].
    #[must_use]
    pub fn with_scale_to_fit(mut self, scale_to_fit: bool) -> Self {
        self.scale_to_fit = scale_to_fit;
        self
    }

    /// Sets [`Self::loop_scale`].
    #[must_use]
    pub fn with_loop_scale(mut self, loop_scale: bool) -> Self {
        self.loop_scale = loop_scale;
        self
    }

    /// Sets [`Self::max_scale_factor`].
    #[must_use]
    pub fn with_max_scale_factor(mut self, factor: f64) -> Self {
        self.max_scale_factor = factor;
        self
    }

    /// Sets [`Self::animation_duration_ms`].
    #[must_use]
    pub fn with_animation_duration_ms(mut self, duration_ms: u64) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    /// Sets [`Self::display_density`].
    #[must_use]
    pub fn with_display_density(mut self, density: f64) -> Self {
        self.display_density = density;
        self
    }

    /// Sets [`Self::gesture`].
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Sets [`Self::fling`].
    #[must_use]
    pub fn with_fling(mut self, fling: FlingConfig) -> Self {
        self.fling = fling;
        self
    }

    /// Interception threshold in viewport pixels.
    #[must_use]
    pub fn move_threshold(&self) -> f64 {
        self.move_threshold_dp * self.display_density
    }

    /// Checks the caller preconditions.
    ///
    /// The controller accepts any configuration; out-of-range values produce
    /// unspecified (but memory-safe) clamping behavior.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("max_scale_factor", self.max_scale_factor),
            ("move_threshold_dp", self.move_threshold_dp),
            ("display_density", self.display_density),
            ("gesture.touch_slop", self.gesture.touch_slop),
            ("gesture.min_fling_velocity", self.gesture.min_fling_velocity),
            ("gesture.max_fling_velocity", self.gesture.max_fling_velocity),
            ("gesture.double_tap_slop", self.gesture.double_tap_slop),
            ("fling.decay_rate", self.fling.decay_rate),
            ("fling.min_velocity", self.fling.min_velocity),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFiniteValue { field });
        }
        for (field, value) in [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("max_scale_factor", self.max_scale_factor),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveScale { field, value });
            }
        }
        if !self.scale_to_fit && self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if self.display_density <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(self.display_density));
        }
        if self.animation_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        for (field, value) in [
            ("move_threshold_dp", self.move_threshold_dp),
            ("gesture.touch_slop", self.gesture.touch_slop),
            ("gesture.min_fling_velocity", self.gesture.min_fling_velocity),
            ("gesture.double_tap_slop", self.gesture.double_tap_slop),
            ("fling.decay_rate", self.fling.decay_rate),
            ("fling.min_velocity", self.fling.min_velocity),
        ] {
            if value < 0.0 {
                return Err(ConfigError::NegativeThreshold { field, value });
            }
        }
        if self.gesture.max_fling_velocity < self.gesture.min_fling_velocity {
            return Err(ConfigError::InvertedFlingRange {
                min: self.gesture.min_fling_velocity,
                max: self.gesture.max_fling_velocity,
            });
        }
        Ok(())
    }
}

impl Default for ZoomPanConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A [`ZoomPanConfig`] precondition violation.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A value is NaN or infinite.
    #[error("`{field}` must be finite")]
    NonFiniteValue {
        /// Offending field.
        field: &'static str,
    },
    /// A scale bound or factor is zero or negative.
    #[error("`{field}` must be positive, got {value}")]
    NonPositiveScale {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The minimum scale exceeds the maximum with scale-to-fit disabled.
    #[error("minimum scale {min} exceeds maximum scale {max}")]
    InvertedScaleRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// The display density is zero or negative.
    #[error("display density must be positive, got {0}")]
    NonPositiveDensity(f64),
    /// Transitions would have no duration.
    #[error("animation duration must be non-zero")]
    ZeroDuration,
    /// A distance, velocity, or rate is negative.
    #[error("`{field}` must not be negative, got {value}")]
    NegativeThreshold {
        /// Offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The fling velocity cap is below the fling trigger.
    #[error("maximum fling velocity {max} is below minimum {min}")]
    InvertedFlingRange {
        /// Configured trigger.
        min: f64,
        /// Configured cap.
        max: f64,
    },
}
