// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input consumed by the recognizers.

use kurbo::Point;

/// Identifier of one contact in a multi-pointer stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// Phase of a raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// A contact went down.
    Down,
    /// A tracked contact moved.
    Move,
    /// A contact was lifted.
    Up,
    /// The host aborted the whole sequence.
    Cancel,
}

/// A raw pointer event in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub phase: PointerPhase,
    /// Contact the event refers to.
    pub pointer_id: PointerId,
    /// Position relative to the viewport origin.
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(
        phase: PointerPhase,
        pointer_id: PointerId,
        position: Point,
        timestamp_ms: u64,
    ) -> Self {
        Self {
            phase,
            pointer_id,
            position,
            timestamp_ms,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(pointer_id: PointerId, position: Point, timestamp_ms: u64) -> Self {
        Self::new(PointerPhase::Down, pointer_id, position, timestamp_ms)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(pointer_id: PointerId, position: Point, timestamp_ms: u64) -> Self {
        Self::new(PointerPhase::Move, pointer_id, position, timestamp_ms)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(pointer_id: PointerId, position: Point, timestamp_ms: u64) -> Self {
        Self::new(PointerPhase::Up, pointer_id, position, timestamp_ms)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(pointer_id: PointerId, position: Point, timestamp_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, pointer_id, position, timestamp_ms)
    }

    /// Returns a copy of this event with a different phase.
    #[must_use]
    pub fn with_phase(self, phase: PointerPhase) -> Self {
        Self { phase, ..self }
    }
}

/// Phase of a scale (pinch) gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalePhase {
    /// Two or more contacts started scaling.
    Begin,
    /// The span between contacts changed.
    Update,
    /// Scaling ended.
    End,
}

/// A scale gesture step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleEvent {
    /// Event phase.
    pub phase: ScalePhase,
    /// Focal point between the contacts, relative to the viewport origin.
    pub focus: Point,
    /// Scale change since the previous step (`1.0` on begin and end).
    pub factor: f64,
}

impl ScaleEvent {
    /// Shorthand for a [`ScalePhase::Begin`] event.
    #[must_use]
    pub fn begin(focus: Point) -> Self {
        Self {
            phase: ScalePhase::Begin,
            focus,
            factor: 1.0,
        }
    }

    /// Shorthand for a [`ScalePhase::Update`] event.
    #[must_use]
    pub fn update(focus: Point, factor: f64) -> Self {
        Self {
            phase: ScalePhase::Update,
            focus,
            factor,
        }
    }

    /// Shorthand for a [`ScalePhase::End`] event.
    #[must_use]
    pub fn end(focus: Point) -> Self {
        Self {
            phase: ScalePhase::End,
            focus,
            factor: 1.0,
        }
    }
}
