// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompan Motion: frame-driven motion for zoomable surfaces.
//!
//! - [`BallisticScroll`] decelerates a released fling toward rest without
//!   ever leaving its bounds.
//! - [`TransitionAnimator`] eases the scroll offset and scale toward a target
//!   over a fixed duration.
//!
//! Both are driven by host timestamps in milliseconds; neither reads a clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use zoompan_motion::{BallisticScroll, FlingConfig};
//!
//! let mut fling = BallisticScroll::new(
//!     Vec2::ZERO,
//!     Vec2::new(3000.0, 0.0),
//!     Vec2::ZERO,
//!     Vec2::new(500.0, 0.0),
//!     0,
//!     FlingConfig::DEFAULT,
//! );
//! let mut now = 0;
//! while fling.update(now) {
//!     assert!(fling.position().x <= 500.0);
//!     now += 16;
//! }
//! assert_eq!(fling.final_position(), Vec2::new(500.0, 0.0));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`FlingConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod ballistic;
mod easing;
mod transition;

pub use ballistic::{BallisticScroll, FlingConfig};
pub use easing::Easing;
pub use transition::{ActiveDimensions, AnimationRequest, TransitionAnimator, TransitionTarget};
