// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch detection from a raw multi-pointer stream.
//!
//! Hosts with a platform scale recognizer feed its output straight into the
//! controller. [`ScaleDetector`] covers hosts that only deliver raw pointers:
//! it derives [`ScaleEvent`]s from the average distance of the contacts to
//! their centroid.

use kurbo::Point;
use smallvec::SmallVec;

use crate::pointer::{PointerEvent, PointerId, PointerPhase, ScaleEvent};

/// Derives scale gestures from two or more contacts.
#[derive(Clone, Debug)]
pub struct ScaleDetector {
    min_span: f64,
    pointers: SmallVec<[(PointerId, Point); 4]>,
    previous_span: Option<f64>,
    in_progress: bool,
}

impl ScaleDetector {
    /// Creates a detector that starts scaling once the contact span reaches
    /// `min_span` pixels.
    #[must_use]
    pub fn new(min_span: f64) -> Self {
        Self {
            min_span,
            pointers: SmallVec::new(),
            previous_span: None,
            in_progress: false,
        }
    }

    /// Returns `true` between a begin and an end event.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Forgets all contacts without emitting an end event.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.previous_span = None;
        self.in_progress = false;
    }

    /// Feeds one pointer event, returning the scale step it produced.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> Option<ScaleEvent> {
        let count_before = self.pointers.len();
        match event.phase {
            PointerPhase::Down => self.upsert(event.pointer_id, event.position),
            PointerPhase::Move => {
                if let Some(entry) = self
                    .pointers
                    .iter_mut()
                    .find(|(id, _)| *id == event.pointer_id)
                {
                    entry.1 = event.position;
                }
            }
            PointerPhase::Up => self.pointers.retain(|(id, _)| *id != event.pointer_id),
            PointerPhase::Cancel => self.pointers.clear(),
        }

        let focus = self.focus();
        if self.pointers.len() < 2 {
            self.previous_span = None;
            if self.in_progress {
                self.in_progress = false;
                return Some(ScaleEvent::end(focus.unwrap_or(event.position)));
            }
            return None;
        }

        let focus = focus?;
        let span = self.span(focus);
        if !self.in_progress {
            if span >= self.min_span && span > 0.0 {
                self.in_progress = true;
                self.previous_span = Some(span);
                return Some(ScaleEvent::begin(focus));
            }
            return None;
        }

        if self.pointers.len() != count_before {
            // A contact joined or left; rebase so the span jump is not a step.
            self.previous_span = Some(span);
            return None;
        }
        let previous = self.previous_span.replace(span)?;
        if previous <= 0.0 || span == previous {
            return None;
        }
        Some(ScaleEvent::update(focus, span / previous))
    }

    fn upsert(&mut self, id: PointerId, position: Point) {
        if let Some(entry) = self.pointers.iter_mut().find(|(pid, _)| *pid == id) {
            entry.1 = position;
        } else {
            self.pointers.push((id, position));
        }
    }

    fn focus(&self) -> Option<Point> {
        centroid(self.pointers.iter().map(|(_, p)| *p))
    }

    /// Twice the average contact distance from `focus`.
    fn span(&self, focus: Point) -> f64 {
        let mut total = 0.0;
        let mut count = 0_u32;
        for (_, p) in &self.pointers {
            total += (*p - focus).hypot();
            count += 1;
        }
        if count == 0 {
            return 0.0;
        }
        2.0 * total / f64::from(count)
    }
}

/// Returns the centroid of a set of points.
pub(crate) fn centroid(points: impl Iterator<Item = Point>) -> Option<Point> {
    let mut sum = kurbo::Vec2::ZERO;
    let mut count = 0_u32;
    for p in points {
        sum += p.to_vec2();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some((sum / f64::from(count)).to_point())
}
