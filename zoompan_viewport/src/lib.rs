// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompan Viewport: headless state for a pannable, zoomable surface.
//!
//! This crate models a content plane of a fixed base size that is displayed
//! through a viewport at some scale. It focuses on:
//! - Scale bounds, including a derived "scale to fit" minimum.
//! - Scroll clamping against the scaled content size.
//! - Focal-point preserving scale changes (pinch, double-tap, anchored zoom).
//!
//! It does **not** know about input events, animation, or listeners. Those
//! live in `zoompan_gesture`, `zoompan_motion`, and the `zoompan` controller,
//! which drive a [`ViewportState`] and broadcast its changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoompan_viewport::ViewportState;
//!
//! let mut state = ViewportState::new();
//! state.set_viewport_size(Size::new(500.0, 500.0));
//! state.set_base_size(Size::new(1000.0, 1000.0));
//! state.set_scale_to_fit(false);
//! state.set_scale_limits(1.0, 4.0);
//!
//! // Zoom 2x about the viewport center: the content pixel under the
//! // center stays under it.
//! let target = state.focal_scroll(Point::new(250.0, 250.0), 2.0);
//! state.apply_scale(2.0);
//! state.set_scroll(target);
//! assert_eq!(state.scroll(), Vec2::new(250.0, 250.0));
//! ```
//!
//! ## Conventions
//!
//! - Scroll offsets are expressed in content pixels at the current scale and
//!   are always whole numbers.
//! - Scaled dimensions are `round(base × scale)`, computed per axis.
//! - Scroll is kept within `[0, max(0, scaled − viewport)]` on both axes;
//!   content smaller than the viewport never scrolls.
//!
//! This crate is `no_std`.

#![no_std]

mod scale;
mod scroll;
mod state;

pub use scale::{ScaleBounds, fit_scale};
pub use scroll::{Axis, clamp_scroll, focal_scroll, scroll_limit};
pub use state::{ViewportState, ViewportStateDebugInfo};
