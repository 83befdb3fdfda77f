// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoompan Gesture: turn raw pointer streams into the gestures a zoomable
//! surface reacts to.
//!
//! This crate provides small, focused trackers, each handling one part of
//! touch interpretation:
//!
//! - [`drag`]: slop handling and incremental scroll distances
//! - [`velocity`]: release velocity over a sliding window
//! - [`tap`]: double-tap detection across sequences
//! - [`intercept`]: deciding when a nested surface should claim a sequence
//! - [`scale`]: pinch detection for hosts without a platform recognizer
//!
//! [`GestureRecognizer`] composes the first three into a stream of
//! [`Gesture`]s. It knows nothing about scroll offsets or scale: the `zoompan`
//! controller interprets gestures against its viewport state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use zoompan_gesture::{Gesture, GestureRecognizer, PointerEvent, PointerId};
//!
//! let mut recognizer = GestureRecognizer::default();
//! let id = PointerId(0);
//!
//! recognizer.on_pointer(&PointerEvent::down(id, Point::new(100.0, 100.0), 0));
//! let gestures = recognizer.on_pointer(&PointerEvent::moved(id, Point::new(70.0, 100.0), 16));
//!
//! // Moving left scrolls content to the right.
//! assert_eq!(
//!     gestures.as_slice(),
//!     &[Gesture::Drag { position: Point::new(70.0, 100.0), delta: Vec2::new(30.0, 0.0) }]
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`].
//!
//! This crate is `no_std`.

#![no_std]

mod config;
pub mod drag;
pub mod intercept;
mod pointer;
mod recognizer;
pub mod scale;
pub mod tap;
pub mod velocity;

pub use config::GestureConfig;
pub use intercept::InterceptTracker;
pub use pointer::{PointerEvent, PointerId, PointerPhase, ScaleEvent, ScalePhase};
pub use recognizer::{Gesture, GestureRecognizer, Gestures};
pub use scale::ScaleDetector;
