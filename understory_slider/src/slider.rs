// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider container: configuration, handle collection, range bar, notifications.

use alloc::vec::Vec;

use crate::config::SliderConfig;
use crate::emitter::{Emitter, ListenerId};
use crate::handle::{Handle, HandleMut, HandleRef};
use crate::root::RootFlags;
use crate::surface::{Surface, Track};
use crate::types::{EventKind, HandleId, RangeBar, SliderEvent, SliderValue};

/// A range-input slider with one or more handles along a track.
///
/// ## Usage
///
/// - Construct with [`Slider::new`], or [`Slider::with_root`] to share a
///   document-level [`RootFlags`] between sliders.
/// - Configure with [`Slider::min`], [`Slider::max`] and [`Slider::step`]
///   (defaults `0`, `100`, `1`).
/// - Add handles with [`Slider::handle`] or [`Slider::handle_with`].
/// - Forward pointer and key input to [`Slider::handle_mut`].
/// - Subscribe with [`Slider::on`] to hear about drags and changes.
///
/// With exactly two handles, handle `0` is the low end and handle `1` the
/// high end of a range: they never cross, and the range bar spanning them is
/// pushed to the [`Track`] after every mutation.
pub struct Slider<T, S> {
    track: T,
    config: SliderConfig,
    handles: Vec<Handle<S>>,
    range: Option<RangeBar>,
    emitter: Emitter,
    root: RootFlags,
}

impl<T: core::fmt::Debug, S> core::fmt::Debug for Slider<T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slider")
            .field("track", &self.track)
            .field("config", &self.config)
            .field("handles", &self.handles.len())
            .field("range", &self.range)
            .field("emitter", &self.emitter)
            .finish_non_exhaustive()
    }
}

impl<T: Track, S: Surface> Slider<T, S> {
    /// Create a slider on `track` with default bounds and no handles.
    pub fn new(track: T) -> Self {
        Self::with_root(track, RootFlags::new())
    }

    /// Create a slider that reports drag state to a shared `root`.
    pub fn with_root(track: T, root: RootFlags) -> Self {
        Self {
            track,
            config: SliderConfig::default(),
            handles: Vec::new(),
            range: None,
            emitter: Emitter::new(),
            root,
        }
    }

    /// Set the lower bound. Not validated.
    pub fn min(&mut self, min: f64) -> &mut Self {
        self.config.min = min;
        self
    }

    /// Set the upper bound. Not validated.
    pub fn max(&mut self, max: f64) -> &mut Self {
        self.config.max = max;
        self
    }

    /// Set the step size. Not validated.
    pub fn step(&mut self, step: f64) -> &mut Self {
        self.config.step = step;
        self
    }

    /// Replace bounds and step at once.
    pub fn configure(&mut self, config: SliderConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Current bounds and step.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Append a handle drawn by `surface` and set it to `value`.
    ///
    /// On a slider that already has one handle, the new high handle is
    /// clamped so it does not start below the low handle.
    pub fn handle(&mut self, surface: S, value: f64) -> &mut Self {
        self.handle_with(surface, |mut h| {
            h.set_value(value);
        })
    }

    /// Append a handle drawn by `surface` and pass it to `init` for setup.
    ///
    /// The handle starts at position `0`; `init` runs before the range bar is
    /// recomputed. Pass `|_| {}` to leave the handle at the minimum.
    pub fn handle_with(
        &mut self,
        surface: S,
        init: impl FnOnce(HandleMut<'_, T, S>),
    ) -> &mut Self {
        let id = HandleId::new(self.handles.len());
        self.handles.push(Handle::new(surface, &self.track));
        init(HandleMut::new(self, id));
        log::debug!("slider: added handle {:?} at {}", id, self.handle_ref(id).value());
        self.update_range();
        self
    }

    /// Number of handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if no handle was added yet.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Identifiers of all handles, in order.
    pub fn handle_ids(&self) -> impl Iterator<Item = HandleId> + use<T, S> {
        (0..self.handles.len()).map(HandleId::new)
    }

    /// Identifier of the handle at `index`, if it exists.
    pub fn handle_id(&self, index: usize) -> Option<HandleId> {
        (index < self.handles.len()).then(|| HandleId::new(index))
    }

    /// Read-only view of a handle.
    ///
    /// Accessors on the view panic if `id`'s index is out of range. An id
    /// taken from another slider is not detected when its index is in range.
    pub fn handle_ref(&self, id: HandleId) -> HandleRef<'_, T, S> {
        HandleRef::new(self, id)
    }

    /// Mutable view of a handle, used to set values and forward input.
    ///
    /// Accessors on the view panic if `id`'s index is out of range.
    pub fn handle_mut(&mut self, id: HandleId) -> HandleMut<'_, T, S> {
        HandleMut::new(self, id)
    }

    /// Current value: a single number for one handle, otherwise one per handle.
    pub fn value(&self) -> SliderValue {
        let mut values: Vec<f64> = self
            .handle_ids()
            .map(|id| self.handle_ref(id).value())
            .collect();
        if values.len() == 1 {
            SliderValue::Single(values.remove(0))
        } else {
            SliderValue::Many(values)
        }
    }

    /// Re-derive every handle position from the current geometry, then the range bar.
    ///
    /// Call after the track or a handle was resized.
    pub fn refresh(&mut self) -> &mut Self {
        for id in self.handle_ids() {
            self.handle_mut(id).refresh();
        }
        self
    }

    /// Last range bar pushed to the track; `None` unless there are exactly two handles.
    pub fn range_bar(&self) -> Option<RangeBar> {
        self.range
    }

    /// The track element.
    pub fn track(&self) -> &T {
        &self.track
    }

    /// Mutable access to the track element.
    pub fn track_mut(&mut self) -> &mut T {
        &mut self.track
    }

    /// The document-level flags this slider reports drag state to.
    pub fn root_flags(&self) -> &RootFlags {
        &self.root
    }

    /// Returns true while any handle is in a drag session.
    pub fn is_dragging(&self) -> bool {
        self.handle_ids().any(|id| self.handle_ref(id).is_dragging())
    }

    /// Subscribe to notifications of `kind`.
    pub fn on(&mut self, kind: EventKind, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.emitter.on(kind, f)
    }

    /// Subscribe to the next notification of `kind` only.
    pub fn once(&mut self, kind: EventKind, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.emitter.once(kind, f)
    }

    /// Subscribe to every notification.
    pub fn on_any(&mut self, f: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.emitter.on_any(f)
    }

    /// Unsubscribe a listener. Returns false if it was not subscribed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        self.emitter.off(id)
    }

    /// The notification channel.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// Mutable access to the notification channel.
    pub fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }

    pub(crate) fn handle_storage(&self, id: HandleId) -> &Handle<S> {
        &self.handles[id.index()]
    }

    pub(crate) fn handle_storage_mut(&mut self, id: HandleId) -> &mut Handle<S> {
        &mut self.handles[id.index()]
    }

    pub(crate) fn emit(&mut self, event: SliderEvent) {
        self.emitter.emit(&event);
    }

    /// Stretch the range bar between the low and high handle.
    ///
    /// Only a two-handle slider has a range bar; otherwise nothing happens.
    pub(crate) fn update_range(&mut self) {
        let [low, high] = self.handles.as_slice() else {
            return;
        };
        let bar = RangeBar {
            offset: low.position(),
            length: high.position() - low.position() + high.width(),
        };
        log::trace!("slider: range bar {bar:?}");
        self.range = Some(bar);
        self.track.set_range(bar);
    }
}
