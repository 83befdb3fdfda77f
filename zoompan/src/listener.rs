// Copyright 2025 the Zoompan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom and pan observers.
//!
//! Listeners are called synchronously, in registration order, from inside the
//! controller call that caused the change. The bus is borrowed mutably for the
//! whole broadcast, so listeners cannot register or remove listeners while
//! being notified.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Vec2;

/// What caused a zoom or pan event.
///
/// Programmatic changes (direct setters, transitions, layout corrections) are
/// reported with no origination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origination {
    /// A pointer drag.
    Drag,
    /// Ballistic motion after a released drag.
    Fling,
    /// A multi-pointer scale gesture.
    Pinch,
}

/// Lifecycle phase of a zoom or pan sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The sequence started.
    Begin,
    /// The value changed.
    Update,
    /// The sequence finished or was interrupted.
    End,
}

/// Observer of scale changes.
pub trait ZoomListener {
    /// A zoom sequence started at `scale`.
    fn on_zoom_begin(&mut self, scale: f64, origin: Option<Origination>) {
        let _ = (scale, origin);
    }
    /// The scale changed.
    fn on_zoom_update(&mut self, scale: f64, origin: Option<Origination>) {
        let _ = (scale, origin);
    }
    /// A zoom sequence finished at `scale`.
    fn on_zoom_end(&mut self, scale: f64, origin: Option<Origination>) {
        let _ = (scale, origin);
    }
}

/// Observer of scroll changes.
pub trait PanListener {
    /// A pan sequence started at `scroll`.
    fn on_pan_begin(&mut self, scroll: Vec2, origin: Option<Origination>) {
        let _ = (scroll, origin);
    }
    /// The scroll offset changed.
    fn on_pan_update(&mut self, scroll: Vec2, origin: Option<Origination>) {
        let _ = (scroll, origin);
    }
    /// A pan sequence finished at `scroll`.
    fn on_pan_end(&mut self, scroll: Vec2, origin: Option<Origination>) {
        let _ = (scroll, origin);
    }
}

/// Handle returned when registering a listener, used to remove it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// One-shot callback run after the next zoom broadcast of a given phase.
pub type DeferredCallback = Box<dyn FnOnce(f64)>;

/// Ordered zoom and pan listener lists plus one-shot zoom callbacks.
#[derive(Default)]
pub struct ListenerBus {
    next_id: u64,
    zoom: Vec<(ListenerId, Box<dyn ZoomListener>)>,
    pan: Vec<(ListenerId, Box<dyn PanListener>)>,
    on_zoom_begin: Vec<DeferredCallback>,
    on_zoom_update: Vec<DeferredCallback>,
    on_zoom_end: Vec<DeferredCallback>,
    on_scroll_change: Option<Box<dyn FnMut(Vec2)>>,
}

impl ListenerBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Appends a zoom listener. The same listener type may be added twice.
    pub fn add_zoom_listener(&mut self, listener: impl ZoomListener + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.zoom.push((id, Box::new(listener)));
        id
    }

    /// Appends a pan listener.
    pub fn add_pan_listener(&mut self, listener: impl PanListener + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.pan.push((id, Box::new(listener)));
        id
    }

    /// Removes a zoom listener, returning it.
    pub fn remove_zoom_listener(&mut self, id: ListenerId) -> Option<Box<dyn ZoomListener>> {
        let index = self.zoom.iter().position(|(lid, _)| *lid == id)?;
        Some(self.zoom.remove(index).1)
    }

    /// Removes a pan listener, returning it.
    pub fn remove_pan_listener(&mut self, id: ListenerId) -> Option<Box<dyn PanListener>> {
        let index = self.pan.iter().position(|(lid, _)| *lid == id)?;
        Some(self.pan.remove(index).1)
    }

    /// Number of registered zoom listeners.
    #[must_use]
    pub fn zoom_listener_count(&self) -> usize {
        self.zoom.len()
    }

    /// Number of registered pan listeners.
    #[must_use]
    pub fn pan_listener_count(&self) -> usize {
        self.pan.len()
    }

    /// Queues `callback` to run once, after the next zoom broadcast of
    /// `phase`. It receives the broadcast scale.
    pub fn defer(&mut self, phase: Phase, callback: impl FnOnce(f64) + 'static) {
        let queue = match phase {
            Phase::Begin => &mut self.on_zoom_begin,
            Phase::Update => &mut self.on_zoom_update,
            Phase::End => &mut self.on_zoom_end,
        };
        queue.push(Box::new(callback));
    }

    /// Installs the scroll-change observer, replacing any previous one.
    pub fn set_on_scroll_change(&mut self, observer: Option<Box<dyn FnMut(Vec2)>>) {
        self.on_scroll_change = observer;
    }

    /// Notifies listeners of a zoom event, then drains the matching deferred
    /// callbacks.
    pub fn broadcast_zoom(&mut self, phase: Phase, scale: f64, origin: Option<Origination>) {
        for (_, listener) in &mut self.zoom {
            match phase {
                Phase::Begin => listener.on_zoom_begin(scale, origin),
                Phase::Update => listener.on_zoom_update(scale, origin),
                Phase::End => listener.on_zoom_end(scale, origin),
            }
        }
        let queue = match phase {
            Phase::Begin => &mut self.on_zoom_begin,
            Phase::Update => &mut self.on_zoom_update,
            Phase::End => &mut self.on_zoom_end,
        };
        for callback in core::mem::take(queue) {
            callback(scale);
        }
    }

    /// Notifies listeners of a pan event.
    pub fn broadcast_pan(&mut self, phase: Phase, scroll: Vec2, origin: Option<Origination>) {
        for (_, listener) in &mut self.pan {
            match phase {
                Phase::Begin => listener.on_pan_begin(scroll, origin),
                Phase::Update => listener.on_pan_update(scroll, origin),
                Phase::End => listener.on_pan_end(scroll, origin),
            }
        }
    }

    /// Notifies the scroll-change observer.
    pub fn scroll_changed(&mut self, scroll: Vec2) {
        if let Some(observer) = self.on_scroll_change.as_mut() {
            observer(scroll);
        }
    }
}

impl fmt::Debug for ListenerBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerBus")
            .field("zoom_listeners", &self.zoom.len())
            .field("pan_listeners", &self.pan.len())
            .field(
                "deferred",
                &(
                    self.on_zoom_begin.len(),
                    self.on_zoom_update.len(),
                    self.on_zoom_end.len(),
                ),
            )
            .field("has_scroll_observer", &self.on_scroll_change.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::Vec2;

    use super::{ListenerBus, Origination, PanListener, Phase, ZoomListener};

    struct Tagged(u32, Rc<RefCell<Vec<u32>>>);

    impl ZoomListener for Tagged {
        fn on_zoom_update(&mut self, _: f64, _: Option<Origination>) {
            self.1.borrow_mut().push(self.0);
        }
    }

    impl PanListener for Tagged {
        fn on_pan_end(&mut self, _: Vec2, _: Option<Origination>) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn broadcasts_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        bus.add_zoom_listener(Tagged(1, log.clone()));
        bus.add_zoom_listener(Tagged(2, log.clone()));
        bus.add_zoom_listener(Tagged(1, log.clone()));
        bus.broadcast_zoom(Phase::Update, 2.0, None);
        assert_eq!(*log.borrow(), [1, 2, 1]);
        // Begin is a no-op by default.
        bus.broadcast_zoom(Phase::Begin, 2.0, None);
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn removal_by_id() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        let first = bus.add_pan_listener(Tagged(1, log.clone()));
        bus.add_pan_listener(Tagged(2, log.clone()));
        assert!(bus.remove_pan_listener(first).is_some());
        assert!(bus.remove_pan_listener(first).is_none());
        bus.broadcast_pan(Phase::End, Vec2::ZERO, Some(Origination::Drag));
        assert_eq!(*log.borrow(), [2]);
        assert_eq!(bus.pan_listener_count(), 1);
    }

    #[test]
    fn deferred_callbacks_fire_once_after_listeners() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        bus.add_zoom_listener(Tagged(1, log.clone()));
        let deferred = log.clone();
        bus.defer(Phase::Update, move |scale| {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "test scales are small whole numbers"
            )]
            deferred.borrow_mut().push(scale as u32 * 100);
        });
        let untouched = log.clone();
        bus.defer(Phase::End, move |_| untouched.borrow_mut().push(999));

        bus.broadcast_zoom(Phase::Update, 3.0, None);
        bus.broadcast_zoom(Phase::Update, 4.0, None);
        assert_eq!(*log.borrow(), [1, 300, 1]);
    }

    #[test]
    fn scroll_observer_is_replaceable() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = ListenerBus::new();
        bus.scroll_changed(Vec2::new(1.0, 1.0));
        let sink = seen.clone();
        bus.set_on_scroll_change(Some(alloc::boxed::Box::new(move |s| {
            sink.borrow_mut().push(s);
        })));
        bus.scroll_changed(Vec2::new(2.0, 3.0));
        bus.set_on_scroll_change(None);
        bus.scroll_changed(Vec2::new(4.0, 5.0));
        assert_eq!(*seen.borrow(), [Vec2::new(2.0, 3.0)]);
    }
}
