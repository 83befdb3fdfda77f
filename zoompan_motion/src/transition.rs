// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased pan/zoom transitions.
//!
//! A [`TransitionAnimator`] interpolates from a snapshot of the current
//! `(scroll, scale)` to a target pair. It never owns what it animates: the
//! [`TransitionTarget`] is passed in on every call, so the owner can hold the
//! animator and the target side by side.

use kurbo::Vec2;

use crate::easing::Easing;

/// Which dimensions of a transition change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveDimensions {
    /// Scroll offset is animated.
    pub pan: bool,
    /// Scale is animated.
    pub zoom: bool,
}

impl ActiveDimensions {
    /// Returns `true` if neither dimension changes.
    #[must_use]
    pub fn is_empty(self) -> bool {
        !self.pan && !self.zoom
    }
}

/// The surface a transition drives.
///
/// Lifecycle callbacks fire in a well-formed order: one
/// [`began`](Self::transition_began), any number of
/// [`updated`](Self::transition_updated), then one
/// [`ended`](Self::transition_ended), whether the transition completes or is
/// cancelled.
pub trait TransitionTarget {
    /// Current scroll offset.
    fn scroll(&self) -> Vec2;
    /// Current scale.
    fn scale(&self) -> f64;
    /// Applies an interpolated scale. Must not start another transition.
    fn apply_scale(&mut self, scale: f64);
    /// Applies an interpolated scroll offset.
    fn apply_scroll(&mut self, scroll: Vec2);
    /// A transition started.
    fn transition_began(&mut self, active: ActiveDimensions);
    /// A frame was applied.
    fn transition_updated(&mut self, active: ActiveDimensions);
    /// The transition completed or was cancelled.
    fn transition_ended(&mut self, active: ActiveDimensions);
}

/// Start and end snapshots of one transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Scroll offset when the transition started.
    pub start_scroll: Vec2,
    /// Target scroll offset.
    pub end_scroll: Vec2,
    /// Scale when the transition started.
    pub start_scale: f64,
    /// Target scale.
    pub end_scale: f64,
    /// Dimensions that change.
    pub active: ActiveDimensions,
    /// Start timestamp in milliseconds, pinned by the first frame.
    pub start_ms: Option<u64>,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

impl AnimationRequest {
    /// Linear progress at `now_ms`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let Some(start_ms) = self.start_ms else {
            return 0.0;
        };
        let elapsed = now_ms.saturating_sub(start_ms).min(self.duration_ms);
        elapsed as f64 / self.duration_ms as f64
    }

    /// Interpolated `(scroll, scale)` for eased progress `f`.
    #[must_use]
    pub fn sample(&self, f: f64) -> (Vec2, f64) {
        let scroll = self.start_scroll + (self.end_scroll - self.start_scroll) * f;
        let scale = self.start_scale + (self.end_scale - self.start_scale) * f;
        (scroll, scale)
    }
}

/// Drives at most one [`AnimationRequest`] at a time.
#[derive(Clone, Debug)]
pub struct TransitionAnimator {
    duration_ms: u64,
    easing: Easing,
    active: Option<AnimationRequest>,
}

impl TransitionAnimator {
    /// Default transition duration.
    pub const DEFAULT_DURATION_MS: u64 = 400;

    /// Creates an idle animator.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            easing: Easing::Decelerate,
            active: None,
        }
    }

    /// Replaces the easing curve for subsequent transitions.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns the duration used for new transitions.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Sets the duration used for new transitions. A running one keeps its
    /// own.
    pub fn set_duration_ms(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }

    /// Returns the easing curve.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Returns the in-flight transition, if any.
    #[must_use]
    pub fn request(&self) -> Option<&AnimationRequest> {
        self.active.as_ref()
    }

    /// Starts a transition toward `(end_scroll, end_scale)`.
    ///
    /// An in-flight transition is cancelled first. Dimensions already at their
    /// target are left alone; if nothing changes no transition starts and
    /// `false` is returned. The clock starts at the first [`tick`](Self::tick).
    pub fn start<T: TransitionTarget + ?Sized>(
        &mut self,
        target: &mut T,
        end_scroll: Vec2,
        end_scale: f64,
    ) -> bool {
        self.cancel(target);
        let start_scroll = target.scroll();
        let start_scale = target.scale();
        let active = ActiveDimensions {
            pan: end_scroll != start_scroll,
            zoom: end_scale != start_scale,
        };
        if active.is_empty() {
            return false;
        }
        log::debug!(
            "transition start: scroll {start_scroll:?} -> {end_scroll:?}, \
             scale {start_scale} -> {end_scale} over {} ms",
            self.duration_ms
        );
        self.active = Some(AnimationRequest {
            start_scroll,
            end_scroll,
            start_scale,
            end_scale,
            active,
            start_ms: None,
            duration_ms: self.duration_ms,
        });
        target.transition_began(active);
        true
    }

    /// Applies the frame for `now_ms`. Returns `true` while still running.
    ///
    /// Scale is applied before scroll so the scroll is clamped against the
    /// new scaled size. The final frame lands exactly on the target and is
    /// followed by the end callback.
    pub fn tick<T: TransitionTarget + ?Sized>(&mut self, target: &mut T, now_ms: u64) -> bool {
        let Some(request) = self.active.as_mut() else {
            return false;
        };
        request.start_ms.get_or_insert(now_ms);
        let request = *request;
        let progress = request.progress(now_ms);
        let (scroll, scale) = request.sample(self.easing.apply(progress));
        log::trace!("transition frame at {progress:.3}: scroll {scroll:?}, scale {scale}");
        if request.active.zoom {
            target.apply_scale(scale);
        }
        if request.active.pan {
            target.apply_scroll(scroll);
        }
        target.transition_updated(request.active);
        if progress >= 1.0 {
            self.active = None;
            target.transition_ended(request.active);
            return false;
        }
        true
    }

    /// Stops the in-flight transition where it is. Returns `true` if one was
    /// running.
    pub fn cancel<T: TransitionTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        let Some(request) = self.active.take() else {
            return false;
        };
        log::debug!("transition cancelled");
        target.transition_ended(request.active);
        true
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION_MS)
    }
}
