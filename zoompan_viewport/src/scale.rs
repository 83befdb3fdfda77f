// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Configured and derived scale limits.
///
/// With `scale_to_fit` enabled the enforced minimum is the derived
/// [`ScaleBounds::effective_min_scale`]; otherwise it is the configured
/// [`ScaleBounds::min_scale`].
///
/// `max_scale < minimum` is a caller precondition violation. [`ScaleBounds::constrain`]
/// raises to the minimum first and then caps at the maximum, so such a
/// configuration always yields `max_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
    /// Configured minimum scale.
    pub min_scale: f64,
    /// Configured maximum scale.
    pub max_scale: f64,
    /// Minimum derived from the viewport/content ratio.
    pub effective_min_scale: f64,
    /// Whether [`ScaleBounds::effective_min_scale`] is the enforced minimum.
    pub scale_to_fit: bool,
}

impl ScaleBounds {
    /// Bounds of a freshly created or reset viewport.
    pub const DEFAULT: Self = Self {
        min_scale: 1.0,
        max_scale: 1.0,
        effective_min_scale: 0.0,
        scale_to_fit: true,
    };

    /// Returns the currently enforced lower bound.
    #[must_use]
    pub fn minimum(&self) -> f64 {
        if self.scale_to_fit {
            self.effective_min_scale
        } else {
            self.min_scale
        }
    }

    /// Clamps `scale` into `[minimum, max_scale]`.
    #[must_use]
    pub fn constrain(&self, scale: f64) -> f64 {
        scale.max(self.minimum()).min(self.max_scale)
    }

    /// Returns `true` if `scale` already lies within the enforced bounds.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.minimum() && scale <= self.max_scale
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Computes the scale at which `base_width` exactly fills `viewport_width`.
///
/// Returns `None` while the content has no width yet.
#[must_use]
pub fn fit_scale(viewport_width: f64, base_width: f64) -> Option<f64> {
    if base_width <= 0.0 {
        return None;
    }
    Some(viewport_width / base_width)
}
