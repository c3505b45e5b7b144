// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Publish/subscribe channel for slider notifications.
//!
//! ## Usage
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_slider::emitter::Emitter;
//! use understory_slider::{EventKind, SliderEvent};
//!
//! let changes = Rc::new(Cell::new(0));
//! let mut emitter = Emitter::new();
//! let seen = changes.clone();
//! let id = emitter.on(EventKind::Change, move |_| seen.set(seen.get() + 1));
//!
//! emitter.emit(&SliderEvent::Change);
//! emitter.off(id);
//! emitter.emit(&SliderEvent::Change);
//! assert_eq!(changes.get(), 1);
//! ```
//!
//! Listeners only receive the event, never the slider, so a listener cannot
//! re-enter a handle while the slider is mid-update.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::types::{EventKind, SliderEvent};

/// Identifier returned by [`Emitter::on`] and friends, used to unsubscribe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    kind: Option<EventKind>,
    once: bool,
    callback: Box<dyn FnMut(&SliderEvent)>,
}

/// An ordered list of listeners.
///
/// Listeners run in subscription order. A listener registered with
/// [`Emitter::once`] is removed after its first delivery.
#[derive(Default)]
pub struct Emitter {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl core::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Emitter {
    /// Create an emitter without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events of `kind`.
    pub fn on(&mut self, kind: EventKind, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.push(Some(kind), false, Box::new(f))
    }

    /// Subscribe to every event.
    pub fn on_any(&mut self, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.push(None, false, Box::new(f))
    }

    /// Subscribe to the next event of `kind` only.
    pub fn once(&mut self, kind: EventKind, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.push(Some(kind), true, Box::new(f))
    }

    /// Unsubscribe. Returns false if `id` was not subscribed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Remove every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    /// Returns true if any listener would receive events of `kind`.
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|l| l.kind.is_none_or(|k| k == kind))
    }

    /// Total number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every matching listener.
    pub fn emit(&mut self, event: &SliderEvent) {
        let kind = event.kind();
        self.listeners.retain_mut(|l| {
            if l.kind.is_some_and(|k| k != kind) {
                return true;
            }
            (l.callback)(event);
            !l.once
        });
    }

    fn push(
        &mut self,
        kind: Option<EventKind>,
        once: bool,
        callback: Box<dyn FnMut(&SliderEvent)>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            kind,
            once,
            callback,
        });
        id
    }
}
