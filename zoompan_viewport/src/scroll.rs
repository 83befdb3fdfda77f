// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Size, Vec2};

/// A scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    Horizontal,
    /// Vertical axis.
    Vertical,
}

/// Returns the largest legal scroll offset per axis.
///
/// Content smaller than the viewport yields a limit of zero on that axis.
#[must_use]
pub fn scroll_limit(scaled: Size, viewport: Size) -> Vec2 {
    Vec2::new(
        (scaled.width - viewport.width).max(0.0),
        (scaled.height - viewport.height).max(0.0),
    )
}

/// Rounds `scroll` to whole pixels and clamps each axis into `[0, limit]`.
#[must_use]
pub fn clamp_scroll(scroll: Vec2, limit: Vec2) -> Vec2 {
    Vec2::new(clamp_axis(scroll.x, limit.x), clamp_axis(scroll.y, limit.y))
}

fn clamp_axis(value: f64, limit: f64) -> f64 {
    value.round().min(limit).max(0.0)
}

/// Remaps a scroll offset so the content under `focal` stays put across a
/// scale change by `ratio` (`target / current`).
///
/// `focal` is relative to the viewport origin and is snapped to whole pixels.
/// The result is not clamped.
#[must_use]
pub fn focal_scroll(scroll: Vec2, focal: Point, ratio: f64) -> Vec2 {
    let fx = focal.x.round();
    let fy = focal.y.round();
    Vec2::new(
        ((scroll.x + fx) * ratio).round() - fx,
        ((scroll.y + fy) * ratio).round() - fy,
    )
}
