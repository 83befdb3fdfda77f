// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use kurbo::{Point, Size, Vec2};
use zoompan_gesture::{
    Gesture, GestureRecognizer, InterceptTracker, PointerEvent, PointerPhase, ScaleDetector,
    ScaleEvent, ScalePhase,
};
use zoompan_motion::{BallisticScroll, TransitionAnimator};
use zoompan_viewport::{Axis, ViewportState, ViewportStateDebugInfo};

use crate::config::ZoomPanConfig;
use crate::listener::{ListenerId, Origination, PanListener, Phase, ZoomListener};
use crate::surface::{GestureSession, Surface};

/// Headless controller of a pannable, zoomable surface.
///
/// The controller owns the viewport state and turns three kinds of input into
/// scale and scroll changes:
/// - pointer events ([`handle_pointer`](Self::handle_pointer)), recognized as
///   drags, flings and double taps;
/// - scale events ([`handle_scale`](Self::handle_scale)) from a pinch
///   recognizer;
/// - direct and animated API calls.
///
/// Motion is frame driven: call [`tick`](Self::tick) once per frame while it
/// returns `true`. Pointer timestamps and frame timestamps must come from the
/// same millisecond clock.
///
/// Every change is reported to the registered [`ZoomListener`]s and
/// [`PanListener`]s as begin/update/end sequences tagged with an
/// [`Origination`]. Direct setters, transitions and layout corrections are
/// reported without an origination.
///
/// Calling direct setters ([`set_scale`](Self::set_scale),
/// [`scroll_to`](Self::scroll_to), ...) while a transition is running does not
/// cancel it: the next frame overwrites the change.
#[derive(Debug)]
pub struct ZoomPanController {
    config: ZoomPanConfig,
    surface: Surface,
    recognizer: GestureRecognizer,
    intercept: InterceptTracker,
    scale_detector: Option<ScaleDetector>,
    fling: Option<BallisticScroll>,
    animator: TransitionAnimator,
    pinching: bool,
}

impl ZoomPanController {
    /// Creates a controller.
    ///
    /// An invalid configuration is logged and used as-is.
    #[must_use]
    pub fn new(config: ZoomPanConfig) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("invalid zoom/pan configuration: {err}");
        }
        let mut state = ViewportState::new();
        state.set_scale_to_fit(config.scale_to_fit);
        state.set_scale_limits(config.min_scale, config.max_scale);
        state.set_max_scale_factor(config.max_scale_factor);
        state.apply_scale(1.0);
        Self {
            config,
            surface: Surface::new(state),
            recognizer: GestureRecognizer::new(config.gesture),
            intercept: InterceptTracker::new(config.move_threshold()),
            scale_detector: None,
            fling: None,
            animator: TransitionAnimator::new(config.animation_duration_ms),
            pinching: false,
        }
    }

    /// Returns the configuration, including changes made through setters.
    #[must_use]
    pub fn config(&self) -> &ZoomPanConfig {
        &self.config
    }

    /// Returns the underlying viewport state.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.surface.state
    }

    /// Snapshot of the viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportStateDebugInfo {
        self.surface.state.debug_info()
    }

    // --- sizes and layout ---

    /// Sets the content size at scale `1.0` and runs a layout pass.
    pub fn set_size(&mut self, size: Size) {
        self.surface.state.set_base_size(size);
        self.layout();
    }

    /// Sets the visible surface size and runs a layout pass.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.surface.state.set_viewport_size(size);
        self.layout();
    }

    /// Re-evaluates scale bounds against the current sizes.
    ///
    /// While zoomed in or animating, the scale is only re-clamped. Otherwise
    /// the scale-to-fit minimum is re-derived, the maximum becomes
    /// `max_scale_factor × minimum` (scale-to-fit mode only) and the scale
    /// snaps to the minimum. A resulting scale change is broadcast as a zoom
    /// update without origination.
    pub fn layout(&mut self) {
        let state = &mut self.surface.state;
        let before_scale = state.scale();
        let before_scroll = state.scroll();
        if self.animator.is_running() || state.scale() > state.min_scale() {
            let current = state.scale();
            state.apply_scale(current);
        } else {
            state.calculate_effective_min_scale();
            if state.scale_to_fit() && state.effective_min_scale() > 0.0 {
                let max = state.max_scale_factor() * state.min_scale();
                state.set_max_scale(max);
            }
            let minimum = state.current_min_scale();
            state.apply_scale(minimum);
        }
        state.constrain_scroll();
        let after_scale = state.scale();
        self.surface.notify_scroll(before_scroll);
        if after_scale != before_scale {
            log::debug!("layout corrected scale {before_scale} -> {after_scale}");
            self.surface.zoom(Phase::Update, None);
        }
    }

    /// Returns the content size at scale `1.0`.
    #[must_use]
    pub fn base_size(&self) -> Size {
        self.surface.state.base_size()
    }

    /// Returns the content size at the current scale.
    #[must_use]
    pub fn scaled_size(&self) -> Size {
        self.surface.state.scaled_size()
    }

    /// Returns the visible surface size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.surface.state.viewport_size()
    }

    // --- scale ---

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.surface.state.scale()
    }

    /// Returns the configured (or derived) minimum scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.surface.state.min_scale()
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.surface.state.max_scale()
    }

    /// Returns the scale-to-fit minimum (`0.0` until derived).
    #[must_use]
    pub fn effective_min_scale(&self) -> f64 {
        self.surface.state.effective_min_scale()
    }

    /// Returns `true` when the scale is above the effective minimum.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.surface.state.is_zoomed()
    }

    /// Sets the scale limits and requests the new minimum as the scale.
    ///
    /// With scale-to-fit enabled the minimum is advisory. With `max < min` the
    /// scale resolves to `max`.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        self.config.min_scale = min;
        self.config.max_scale = max;
        self.surface.state.set_scale_limits(min, max);
        self.set_scale(min);
    }

    /// Clamps and applies a scale, broadcasting a zoom update if it changed.
    pub fn set_scale(&mut self, scale: f64) {
        if self.surface.update_scale(scale) {
            self.surface.zoom(Phase::Update, None);
        }
    }

    /// Changes the scale while keeping the content under `focal` (viewport
    /// coordinates) in place.
    pub fn set_scale_from_position(&mut self, focal: Point, scale: f64) {
        if self.surface.scale_about(focal, scale) {
            self.surface.zoom(Phase::Update, None);
        }
    }

    /// Changes the scale about the viewport center.
    pub fn set_scale_from_center(&mut self, scale: f64) {
        let center = self.surface.state.half_viewport().to_point();
        self.set_scale_from_position(center, scale);
    }

    /// Sets the multiplier used to derive the maximum scale on the next
    /// layout pass.
    pub fn set_max_scale_factor(&mut self, factor: f64) {
        self.config.max_scale_factor = factor;
        self.surface.state.set_max_scale_factor(factor);
    }

    /// Enables or disables the viewport-derived minimum scale and re-derives
    /// it immediately.
    pub fn set_scale_to_fit(&mut self, scale_to_fit: bool) {
        self.config.scale_to_fit = scale_to_fit;
        let before = self.surface.state.scroll();
        self.surface.state.set_scale_to_fit(scale_to_fit);
        let changed = self.surface.state.calculate_effective_min_scale();
        self.surface.notify_scroll(before);
        if changed {
            self.surface.zoom(Phase::Update, None);
        }
    }

    /// Returns whether the minimum scale is derived from the viewport size.
    #[must_use]
    pub fn scale_to_fit(&self) -> bool {
        self.surface.state.scale_to_fit()
    }

    /// Controls whether a double tap at the maximum scale returns to the
    /// minimum.
    pub fn set_loop_scale(&mut self, loop_scale: bool) {
        self.config.loop_scale = loop_scale;
    }

    /// Returns whether double taps loop back to the minimum scale.
    #[must_use]
    pub fn loop_scale(&self) -> bool {
        self.config.loop_scale
    }

    // --- scroll ---

    /// Returns the scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Vec2 {
        self.surface.state.scroll()
    }

    /// Returns the largest legal scroll offset per axis.
    #[must_use]
    pub fn scroll_limit(&self) -> Vec2 {
        self.surface.state.scroll_limit()
    }

    /// Clamps, rounds and applies a scroll offset.
    pub fn scroll_to(&mut self, scroll: Vec2) {
        self.surface.update_scroll(scroll);
    }

    /// Scrolls so that `point` (scaled content coordinates) sits at the
    /// viewport center, as far as the limits allow.
    pub fn scroll_to_and_center(&mut self, point: Point) {
        let half = self.surface.state.half_viewport();
        self.scroll_to(point.to_vec2() - half);
    }

    /// Returns whether the offset can move horizontally in the sign of
    /// `direction`.
    #[must_use]
    pub fn can_scroll_horizontally(&self, direction: i32) -> bool {
        self.surface.state.can_scroll(Axis::Horizontal, direction)
    }

    /// Returns whether the offset can move vertically in the sign of
    /// `direction`.
    #[must_use]
    pub fn can_scroll_vertically(&self, direction: i32) -> bool {
        self.surface.state.can_scroll(Axis::Vertical, direction)
    }

    // --- transitions ---

    /// Animates the scroll offset to `scroll`.
    pub fn slide_to(&mut self, scroll: Vec2) {
        let end = self.surface.state.clamp_scroll(scroll);
        let scale = self.surface.state.scale();
        self.animator.start(&mut self.surface, end, scale);
    }

    /// Animates so that `point` ends up at the viewport center.
    pub fn slide_to_and_center(&mut self, point: Point) {
        let half = self.surface.state.half_viewport();
        self.slide_to(point.to_vec2() - half);
    }

    /// Animates scale and scroll together so that `point` (content
    /// coordinates at the target scale) ends up at the viewport center.
    pub fn slide_to_and_center_with_scale(&mut self, point: Point, scale: f64) {
        let half = self.surface.state.half_viewport();
        let scale = self.surface.state.constrain_scale(scale);
        self.animator
            .start(&mut self.surface, point.to_vec2() - half, scale);
    }

    /// Animates the scale without compensating the scroll offset.
    pub fn smooth_scale_to(&mut self, scale: f64) {
        let scale = self.surface.state.constrain_scale(scale);
        let scroll = self.surface.state.scroll();
        self.animator.start(&mut self.surface, scroll, scale);
    }

    /// Animates the scale while keeping the content under `focal` in place.
    pub fn smooth_scale_from_focal_point(&mut self, focal: Point, scale: f64) {
        let state = &self.surface.state;
        let scale = state.constrain_scale(scale);
        if scale == state.scale() {
            return;
        }
        let end = state.focal_scroll(focal, scale);
        self.animator.start(&mut self.surface, end, scale);
    }

    /// Animates the scale about the viewport center.
    pub fn smooth_scale_from_center(&mut self, scale: f64) {
        let center = self.surface.state.half_viewport().to_point();
        self.smooth_scale_from_focal_point(center, scale);
    }

    /// Animates back to the effective minimum scale, anchored at `focal`.
    pub fn reset_zoom_on_focal_point(&mut self, focal: Point) {
        let minimum = self.surface.state.effective_min_scale();
        self.smooth_scale_from_focal_point(focal, minimum);
    }

    /// Stops the running transition where it is. Returns `true` if one was
    /// running.
    pub fn cancel_transition(&mut self) -> bool {
        self.animator.cancel(&mut self.surface)
    }

    /// Sets the duration of subsequent transitions.
    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.config.animation_duration_ms = duration_ms;
        self.animator.set_duration_ms(duration_ms);
    }

    /// Returns the duration of new transitions.
    #[must_use]
    pub fn animation_duration_ms(&self) -> u64 {
        self.animator.duration_ms()
    }

    // --- input ---

    /// Derives scale events from raw pointers, for hosts without a pinch
    /// recognizer. Scaling starts once the contacts span `min_span` pixels.
    pub fn enable_pinch_detection(&mut self, min_span: f64) {
        self.scale_detector = Some(ScaleDetector::new(min_span));
    }

    /// Stops deriving scale events from raw pointers.
    pub fn disable_pinch_detection(&mut self) {
        self.scale_detector = None;
    }

    /// Feeds a raw pointer event.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        for gesture in self.recognizer.on_pointer(event) {
            self.apply_gesture(gesture, event.timestamp_ms);
        }
        if let Some(scale) = self
            .scale_detector
            .as_mut()
            .and_then(|detector| detector.on_pointer(event))
        {
            self.handle_scale(&scale);
        }
        if !self.recognizer.is_tracking() {
            self.intercept.reset();
        }
    }

    /// Observes an event routed to a descendant. Returns `true` once the
    /// sequence moved far enough for this surface to claim it; the claiming
    /// event is replayed as a press, and the host should route the rest of
    /// the sequence to [`handle_pointer`](Self::handle_pointer).
    pub fn intercept_pointer(&mut self, event: &PointerEvent) -> bool {
        if !self.intercept.observe(event) {
            return false;
        }
        log::debug!("claiming pointer sequence at {:?}", event.position);
        self.handle_pointer(&event.with_phase(PointerPhase::Down));
        true
    }

    /// Feeds a scale (pinch) event.
    pub fn handle_scale(&mut self, event: &ScaleEvent) {
        match event.phase {
            ScalePhase::Begin => {
                if self.pinching {
                    return;
                }
                self.animator.cancel(&mut self.surface);
                self.pinching = true;
                self.surface.session.scaling = true;
                self.surface.zoom(Phase::Begin, Some(Origination::Pinch));
            }
            ScalePhase::Update => {
                if !self.pinching {
                    return;
                }
                let target = self.surface.state.scale() * event.factor;
                self.surface.scale_about(event.focus, target);
                log::trace!(
                    "pinch at {:?}: scale {}",
                    event.focus,
                    self.surface.state.scale()
                );
                self.surface.zoom(Phase::Update, Some(Origination::Pinch));
            }
            ScalePhase::End => self.end_pinch(),
        }
    }

    /// Advances flings and transitions to `now_ms`. Returns `true` while
    /// anything is still moving.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut running = false;
        if let Some(fling) = self.fling.as_mut() {
            let moving = fling.update(now_ms);
            let position = fling.position();
            let rest = fling.final_position();
            if self.surface.update_scroll(position) {
                log::trace!("fling frame at {position:?}");
                self.surface.pan(Phase::Update, Some(Origination::Fling));
            }
            if moving {
                running = true;
            } else {
                self.fling = None;
                self.surface.update_scroll(rest);
                self.finish_fling();
            }
        }
        running |= self.animator.tick(&mut self.surface, now_ms);
        running
    }

    /// Stops all motion, closes open sequences and restores default scale
    /// bounds and sizes. Listeners, the viewport size and the fit setting are
    /// kept; [`Self::config`] reports the restored limits afterwards.
    pub fn reset(&mut self) {
        self.stop_fling();
        self.animator.cancel(&mut self.surface);
        self.end_pinch();
        self.end_drag();
        self.recognizer.reset();
        self.intercept.reset();
        if let Some(detector) = self.scale_detector.as_mut() {
            detector.reset();
        }
        let before = self.surface.state.scroll();
        self.surface.state.reset();
        self.config.min_scale = ZoomPanConfig::DEFAULT.min_scale;
        self.config.max_scale = ZoomPanConfig::DEFAULT.max_scale;
        self.config.max_scale_factor = ZoomPanConfig::DEFAULT.max_scale_factor;
        self.surface.notify_scroll(before);
    }

    // --- state queries ---

    /// Returns the interaction flags.
    #[must_use]
    pub fn session(&self) -> GestureSession {
        self.surface.session
    }

    /// Returns `true` while a drag moves the content.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.surface.session.dragging
    }

    /// Returns `true` while a fling moves the content.
    #[must_use]
    pub fn is_flinging(&self) -> bool {
        self.surface.session.flinging
    }

    /// Returns `true` while a pinch or an animated zoom changes the scale.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.surface.session.scaling
    }

    /// Returns `true` while an animated pan moves the content.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.surface.session.sliding
    }

    // --- listeners ---

    /// Registers a zoom listener.
    pub fn add_zoom_listener(&mut self, listener: impl ZoomListener + 'static) -> ListenerId {
        self.surface.bus.add_zoom_listener(listener)
    }

    /// Registers a pan listener.
    pub fn add_pan_listener(&mut self, listener: impl PanListener + 'static) -> ListenerId {
        self.surface.bus.add_pan_listener(listener)
    }

    /// Removes a zoom listener, returning it.
    pub fn remove_zoom_listener(&mut self, id: ListenerId) -> Option<Box<dyn ZoomListener>> {
        self.surface.bus.remove_zoom_listener(id)
    }

    /// Removes a pan listener, returning it.
    pub fn remove_pan_listener(&mut self, id: ListenerId) -> Option<Box<dyn PanListener>> {
        self.surface.bus.remove_pan_listener(id)
    }

    /// Runs `callback` once after the next zoom begin broadcast.
    pub fn execute_on_zoom_begin(&mut self, callback: impl FnOnce(f64) + 'static) {
        self.surface.bus.defer(Phase::Begin, callback);
    }

    /// Runs `callback` once after the next zoom update broadcast.
    pub fn execute_on_zoom_update(&mut self, callback: impl FnOnce(f64) + 'static) {
        self.surface.bus.defer(Phase::Update, callback);
    }

    /// Runs `callback` once after the next zoom end broadcast.
    pub fn execute_on_zoom_end(&mut self, callback: impl FnOnce(f64) + 'static) {
        self.surface.bus.defer(Phase::End, callback);
    }

    /// Installs an observer called with every new scroll offset.
    pub fn set_on_scroll_change(&mut self, observer: impl FnMut(Vec2) + 'static) {
        self.surface.bus.set_on_scroll_change(Some(Box::new(observer)));
    }

    /// Removes the scroll-change observer.
    pub fn clear_on_scroll_change(&mut self) {
        self.surface.bus.set_on_scroll_change(None);
    }

    // --- gesture handling ---

    fn apply_gesture(&mut self, gesture: Gesture, now_ms: u64) {
        match gesture {
            Gesture::Down { .. } => {
                self.stop_fling();
                self.animator.cancel(&mut self.surface);
            }
            Gesture::Drag { delta, .. } => {
                let target = self.surface.state.scroll() + delta;
                self.surface.update_scroll(target);
                if self.surface.session.dragging {
                    self.surface.pan(Phase::Update, Some(Origination::Drag));
                } else {
                    self.surface.session.dragging = true;
                    self.surface.pan(Phase::Begin, Some(Origination::Drag));
                }
            }
            Gesture::Fling { velocity } => self.start_fling(-velocity, now_ms),
            Gesture::DoubleTap { position } => self.double_tap(position),
            Gesture::Up { .. } | Gesture::Cancel => self.end_drag(),
        }
    }

    fn double_tap(&mut self, position: Point) {
        let state = &self.surface.state;
        let destination = if self.config.loop_scale && state.scale() >= state.max_scale() {
            state.min_scale()
        } else {
            state.max_scale()
        };
        let destination = state.constrain_scale(destination);
        self.smooth_scale_from_focal_point(position, destination);
    }

    /// Closes a drag. The drag end is not reported when a fling took over the
    /// sequence on the same release.
    fn end_drag(&mut self) {
        if !self.surface.session.dragging {
            return;
        }
        self.surface.session.dragging = false;
        if !self.surface.session.flinging {
            self.surface.pan(Phase::End, Some(Origination::Drag));
        }
    }

    fn end_pinch(&mut self) {
        if !self.pinching {
            return;
        }
        self.pinching = false;
        self.surface.session.scaling = false;
        self.surface.zoom(Phase::End, Some(Origination::Pinch));
    }

    fn start_fling(&mut self, velocity: Vec2, now_ms: u64) {
        self.stop_fling();
        let state = &self.surface.state;
        let fling = BallisticScroll::new(
            state.scroll(),
            velocity,
            Vec2::ZERO,
            state.scroll_limit(),
            now_ms,
            self.config.fling,
        );
        log::debug!(
            "fling from {:?} at {velocity:?} px/s, resting at {:?}",
            fling.start_position(),
            fling.final_position()
        );
        self.fling = Some(fling);
        self.surface.session.flinging = true;
        self.surface.pan(Phase::Begin, Some(Origination::Fling));
    }

    /// Interrupts a fling where it is.
    fn stop_fling(&mut self) {
        if let Some(mut fling) = self.fling.take() {
            fling.force_finish();
            log::debug!("fling interrupted at {:?}", fling.final_position());
            self.finish_fling();
        }
    }

    fn finish_fling(&mut self) {
        if !self.surface.session.flinging {
            return;
        }
        log::debug!("fling finished at {:?}", self.surface.state.scroll());
        self.surface.session.flinging = false;
        self.surface.pan(Phase::End, Some(Origination::Fling));
    }
}

impl Default for ZoomPanController {
    fn default() -> Self {
        Self::new(ZoomPanConfig::DEFAULT)
    }
}
