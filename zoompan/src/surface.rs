// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use zoompan_motion::{ActiveDimensions, TransitionTarget};
use zoompan_viewport::ViewportState;

use crate::listener::{ListenerBus, Origination, Phase};

/// Interaction flags of the current touch sequence and transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GestureSession {
    /// A drag is moving the content.
    pub dragging: bool,
    /// Ballistic motion is moving the content.
    pub flinging: bool,
    /// A pinch or an animated zoom is changing the scale.
    pub scaling: bool,
    /// An animated pan is moving the content.
    pub sliding: bool,
}

/// The viewport state together with everything that observes it.
///
/// Mutators here never broadcast zoom or pan events; callers decide which
/// events a change produces. Scroll-change notifications are sent for every
/// change of the offset, whatever caused it.
#[derive(Debug)]
pub(crate) struct Surface {
    pub(crate) state: ViewportState,
    pub(crate) bus: ListenerBus,
    pub(crate) session: GestureSession,
}

impl Surface {
    pub(crate) fn new(state: ViewportState) -> Self {
        Self {
            state,
            bus: ListenerBus::new(),
            session: GestureSession::default(),
        }
    }

    /// Clamps and applies a scroll offset. Returns `true` if it moved.
    pub(crate) fn update_scroll(&mut self, scroll: Vec2) -> bool {
        let before = self.state.scroll();
        self.state.set_scroll(scroll);
        self.notify_scroll(before)
    }

    /// Clamps and applies a scale. Returns `true` if it changed.
    pub(crate) fn update_scale(&mut self, scale: f64) -> bool {
        let before = self.state.scroll();
        let changed = self.state.apply_scale(scale).is_some();
        self.notify_scroll(before);
        changed
    }

    /// Changes the scale while keeping the content under `focal` in place.
    /// Returns `true` if the scale changed.
    pub(crate) fn scale_about(&mut self, focal: Point, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            return false;
        }
        let scale = self.state.constrain_scale(scale);
        if scale == self.state.scale() {
            return false;
        }
        let target = self.state.focal_scroll(focal, scale);
        let before = self.state.scroll();
        self.state.apply_scale(scale);
        self.state.set_scroll(target);
        self.notify_scroll(before);
        true
    }

    /// Sends the scroll-change notification if the offset differs from
    /// `before`.
    pub(crate) fn notify_scroll(&mut self, before: Vec2) -> bool {
        let after = self.state.scroll();
        if after == before {
            return false;
        }
        self.bus.scroll_changed(after);
        true
    }

    pub(crate) fn zoom(&mut self, phase: Phase, origin: Option<Origination>) {
        let scale = self.state.scale();
        self.bus.broadcast_zoom(phase, scale, origin);
    }

    pub(crate) fn pan(&mut self, phase: Phase, origin: Option<Origination>) {
        let scroll = self.state.scroll();
        self.bus.broadcast_pan(phase, scroll, origin);
    }
}

impl TransitionTarget for Surface {
    fn scroll(&self) -> Vec2 {
        self.state.scroll()
    }

    fn scale(&self) -> f64 {
        self.state.scale()
    }

    fn apply_scale(&mut self, scale: f64) {
        self.update_scale(scale);
    }

    fn apply_scroll(&mut self, scroll: Vec2) {
        self.update_scroll(scroll);
    }

    fn transition_began(&mut self, active: ActiveDimensions) {
        if active.zoom {
            self.session.scaling = true;
            self.zoom(Phase::Begin, None);
        }
        if active.pan {
            self.session.sliding = true;
            self.pan(Phase::Begin, None);
        }
    }

    fn transition_updated(&mut self, active: ActiveDimensions) {
        if active.zoom {
            self.zoom(Phase::Update, None);
        }
        if active.pan {
            self.pan(Phase::Update, None);
        }
    }

    fn transition_ended(&mut self, active: ActiveDimensions) {
        if active.zoom {
            self.session.scaling = false;
            self.zoom(Phase::End, None);
        }
        if active.pan {
            self.session.sliding = false;
            self.pan(Phase::End, None);
        }
    }
}
