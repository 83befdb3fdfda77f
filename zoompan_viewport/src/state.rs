// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Size, Vec2};

use crate::scale::{ScaleBounds, fit_scale};
use crate::scroll::{Axis, clamp_scroll, focal_scroll, scroll_limit};

/// Scale and scroll state of a zoomable surface.
///
/// `ViewportState` owns the base content size, the viewport size, the current
/// scale with its bounds, and the scroll offset. Every mutator re-establishes
/// the invariants:
/// - `minimum ≤ scale ≤ max_scale` (see [`ScaleBounds`]).
/// - `0 ≤ scroll ≤ max(0, scaled − viewport)` per axis.
///
/// The state does not broadcast anything; callers inspect the return values of
/// the mutators to decide which events to emit.
#[derive(Clone, Debug)]
pub struct ViewportState {
    base_size: Size,
    scaled_size: Size,
    viewport_size: Size,
    scale: f64,
    bounds: ScaleBounds,
    max_scale_factor: f64,
    scroll: Vec2,
}

impl ViewportState {
    /// Creates an unsized state at scale `1.0` with scale-to-fit enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_size: Size::ZERO,
            scaled_size: Size::ZERO,
            viewport_size: Size::ZERO,
            scale: 1.0,
            bounds: ScaleBounds::DEFAULT,
            max_scale_factor: 1.0,
            scroll: Vec2::ZERO,
        }
    }

    /// Reinitializes sizes, scale, and scale bounds to their defaults.
    ///
    /// The viewport size and the scale-to-fit mode are kept.
    pub fn reset(&mut self) {
        let scale_to_fit = self.bounds.scale_to_fit;
        self.base_size = Size::ZERO;
        self.scaled_size = Size::ZERO;
        self.scale = 1.0;
        self.bounds = ScaleBounds {
            scale_to_fit,
            ..ScaleBounds::DEFAULT
        };
        self.max_scale_factor = 1.0;
        self.constrain_scroll();
    }

    /// Returns the content size at scale `1.0`.
    #[must_use]
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    /// Sets the content size at scale `1.0`.
    ///
    /// Scaled dimensions are recomputed and scroll is re-clamped. Scale bounds
    /// are not re-evaluated here; that is the job of the layout pass.
    pub fn set_base_size(&mut self, size: Size) {
        self.base_size = size;
        self.update_scaled_size();
        self.constrain_scroll();
    }

    /// Returns the content size at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.scaled_size
    }

    /// Returns the visible surface size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Sets the visible surface size and re-clamps scroll.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
        self.constrain_scroll();
    }

    /// Returns half the viewport, rounded to whole pixels.
    #[must_use]
    pub fn half_viewport(&self) -> Vec2 {
        Vec2::new(
            (self.viewport_size.width * 0.5).round(),
            (self.viewport_size.height * 0.5).round(),
        )
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current scale bounds.
    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    /// Returns the configured minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.bounds.min_scale
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.bounds.max_scale
    }

    /// Returns the minimum derived from the viewport/content ratio.
    #[must_use]
    pub fn effective_min_scale(&self) -> f64 {
        self.bounds.effective_min_scale
    }

    /// Returns the enforced lower scale bound.
    #[must_use]
    pub fn current_min_scale(&self) -> f64 {
        self.bounds.minimum()
    }

    /// Returns whether the minimum scale is derived from the viewport size.
    #[must_use]
    pub fn scale_to_fit(&self) -> bool {
        self.bounds.scale_to_fit
    }

    /// Enables or disables the derived minimum scale.
    ///
    /// This only toggles the mode; call
    /// [`ViewportState::calculate_effective_min_scale`] to re-derive it.
    pub fn set_scale_to_fit(&mut self, scale_to_fit: bool) {
        self.bounds.scale_to_fit = scale_to_fit;
    }

    /// Stores new scale limits without touching the current scale.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        self.bounds.min_scale = min_scale;
        self.bounds.max_scale = max_scale;
    }

    /// Stores a new maximum scale without touching the current scale.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        self.bounds.max_scale = max_scale;
    }

    /// Returns the multiplier applied to the minimum scale to derive the
    /// maximum during layout.
    #[must_use]
    pub fn max_scale_factor(&self) -> f64 {
        self.max_scale_factor
    }

    /// Sets the multiplier applied to the minimum scale during layout.
    pub fn set_max_scale_factor(&mut self, factor: f64) {
        self.max_scale_factor = factor;
    }

    /// Clamps a requested scale into the current bounds.
    #[must_use]
    pub fn constrain_scale(&self, scale: f64) -> f64 {
        self.bounds.constrain(scale)
    }

    /// Applies a scale request.
    ///
    /// The request is clamped first. If the clamped value differs from the
    /// current scale, scaled dimensions are recomputed, scroll is re-clamped,
    /// and the previous scale is returned. Non-finite and non-positive requests
    /// are ignored.
    pub fn apply_scale(&mut self, scale: f64) -> Option<f64> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let scale = self.constrain_scale(scale);
        if scale == self.scale {
            return None;
        }
        let previous = self.scale;
        self.scale = scale;
        self.update_scaled_size();
        self.constrain_scroll();
        Some(previous)
    }

    /// Re-derives the scale-to-fit minimum from the current sizes.
    ///
    /// Skipped while scale-to-fit is disabled or the content has no width.
    /// When the derived value changes it replaces both the effective and the
    /// configured minimum, and a scale below it is raised to it. Returns `true`
    /// if the current scale changed.
    pub fn calculate_effective_min_scale(&mut self) -> bool {
        if !self.bounds.scale_to_fit {
            return false;
        }
        let Some(fit) = fit_scale(self.viewport_size.width, self.base_size.width) else {
            return false;
        };
        if fit == self.bounds.effective_min_scale {
            return false;
        }
        log::debug!(
            "effective minimum scale {} -> {}",
            self.bounds.effective_min_scale,
            fit
        );
        self.bounds.effective_min_scale = fit;
        self.bounds.min_scale = fit;
        self.scale < fit && self.apply_scale(fit).is_some()
    }

    /// Returns `true` when the scale is above the effective minimum.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > self.bounds.effective_min_scale
    }

    /// Returns the current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    /// Returns the largest legal scroll offset per axis.
    #[must_use]
    pub fn scroll_limit(&self) -> Vec2 {
        scroll_limit(self.scaled_size, self.viewport_size)
    }

    /// Rounds and clamps `scroll` into the legal range.
    #[must_use]
    pub fn clamp_scroll(&self, scroll: Vec2) -> Vec2 {
        clamp_scroll(scroll, self.scroll_limit())
    }

    /// Clamps and stores a scroll offset, returning the applied value.
    pub fn set_scroll(&mut self, scroll: Vec2) -> Vec2 {
        self.scroll = self.clamp_scroll(scroll);
        self.scroll
    }

    /// Re-clamps the current scroll offset. Returns `true` if it moved.
    pub fn constrain_scroll(&mut self) -> bool {
        let clamped = self.clamp_scroll(self.scroll);
        if clamped == self.scroll {
            return false;
        }
        self.scroll = clamped;
        true
    }

    /// Computes the (unclamped) scroll offset that keeps the content under
    /// `focal` fixed when changing to `target_scale`.
    #[must_use]
    pub fn focal_scroll(&self, focal: Point, target_scale: f64) -> Vec2 {
        if self.scale <= 0.0 {
            return self.scroll;
        }
        focal_scroll(self.scroll, focal, target_scale / self.scale)
    }

    /// Returns whether the offset can move along `axis` in the sign of
    /// `direction`.
    #[must_use]
    pub fn can_scroll(&self, axis: Axis, direction: i32) -> bool {
        let limit = self.scroll_limit();
        let (position, limit) = match axis {
            Axis::Horizontal => (self.scroll.x, limit.x),
            Axis::Vertical => (self.scroll.y, limit.y),
        };
        if direction > 0 {
            position < limit
        } else {
            direction < 0 && position > 0.0
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportStateDebugInfo {
        ViewportStateDebugInfo {
            base_size: self.base_size,
            scaled_size: self.scaled_size,
            viewport_size: self.viewport_size,
            scale: self.scale,
            bounds: self.bounds,
            max_scale_factor: self.max_scale_factor,
            scroll: self.scroll,
            scroll_limit: self.scroll_limit(),
        }
    }

    fn update_scaled_size(&mut self) {
        self.scaled_size = Size::new(
            (self.base_size.width * self.scale).round(),
            (self.base_size.height * self.scale).round(),
        );
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportStateDebugInfo {
    /// Content size at scale `1.0`.
    pub base_size: Size,
    /// Content size at the current scale.
    pub scaled_size: Size,
    /// Visible surface size.
    pub viewport_size: Size,
    /// Current scale.
    pub scale: f64,
    /// Configured and derived scale limits.
    pub bounds: ScaleBounds,
    /// Multiplier used to derive the maximum scale during layout.
    pub max_scale_factor: f64,
    /// Current scroll offset.
    pub scroll: Vec2,
    /// Largest legal scroll offset.
    pub scroll_limit: Vec2,
}
