// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompan: a headless controller for pannable, zoomable surfaces.
//!
//! [`ZoomPanController`] keeps a rectangular content area of a known size
//! positioned inside a smaller or larger viewport. It owns the scale, the
//! scroll offset and the bounds of both, and moves them in response to:
//! - raw pointer input: one-finger drags, flings on release, double taps;
//! - scale (pinch) events, either from the host platform or derived from raw
//!   pointers by the built-in detector;
//! - programmatic calls, applied at once or as eased transitions.
//!
//! The controller draws nothing and reads no clock. The host forwards input,
//! calls [`ZoomPanController::tick`] once per frame while motion is pending,
//! and renders its content translated by `-scroll` and scaled by `scale`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use zoompan::{ScaleEvent, ZoomPanConfig, ZoomPanController};
//!
//! let config = ZoomPanConfig::DEFAULT
//!     .with_scale_to_fit(false)
//!     .with_scale_limits(1.0, 4.0);
//! let mut controller = ZoomPanController::new(config);
//! controller.set_viewport_size(Size::new(500.0, 500.0));
//! controller.set_size(Size::new(500.0, 500.0));
//!
//! // Pinch out around the viewport center.
//! let focus = Point::new(250.0, 250.0);
//! controller.handle_scale(&ScaleEvent::begin(focus));
//! controller.handle_scale(&ScaleEvent::update(focus, 2.0));
//! controller.handle_scale(&ScaleEvent::end(focus));
//!
//! assert_eq!(controller.scale(), 2.0);
//! // The content under the focus stayed put.
//! assert_eq!(controller.scroll(), Vec2::new(250.0, 250.0));
//! ```
//!
//! ## Observing changes
//!
//! Implement [`ZoomListener`] or [`PanListener`] and register it with
//! [`ZoomPanController::add_zoom_listener`] or
//! [`ZoomPanController::add_pan_listener`]. Every gesture produces a
//! well-formed begin/update/end sequence tagged with its [`Origination`].
//! One-shot callbacks can be queued with
//! [`ZoomPanController::execute_on_zoom_end`] and friends.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ZoomPanConfig`] and the
//!   nested gesture and fling configurations.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod listener;
mod surface;

pub use config::{ConfigError, ZoomPanConfig};
pub use controller::ZoomPanController;
pub use listener::{ListenerId, Origination, PanListener, Phase, ZoomListener};
pub use surface::GestureSession;

pub use zoompan_gesture::{
    GestureConfig, PointerEvent, PointerId, PointerPhase, ScaleEvent, ScalePhase,
};
pub use zoompan_motion::FlingConfig;
pub use zoompan_viewport::{Axis, ViewportState, ViewportStateDebugInfo};
