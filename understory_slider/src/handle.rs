// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles: position/value mapping, snapping, and drag/keyboard interaction.
//!
//! ## Overview
//!
//! A handle stores exactly one piece of authoritative state: its pixel
//! position along the track. Its value is always derived from that position
//! using the live track and handle widths, so the value reflects what is
//! rendered even if the geometry changed underneath.
//!
//! Handles are owned by their [`Slider`] and reached through the borrowed
//! views [`HandleRef`] (read-only) and [`HandleMut`] (mutating). The view
//! carries the slider borrow, which is the handle's only route to shared
//! configuration and to its sibling.
//!
//! ## Mapping
//!
//! With `travel = track width - handle width` (clamped at zero):
//!
//! - position → value: `snap(position / travel * (max - min) + min)`, or
//!   `snap(min)` when `travel` is zero.
//! - value → position: `(snap(value) - min) / (max - min) * travel`, or `0`
//!   when `max == min`.
//!
//! ## Drag session
//!
//! ```text
//!            pointer_down                pointer_move (any number)
//!   Idle ───────────────────▶ Dragging ◀──────────────────────┐
//!    ▲                          │  └──────────────────────────┘
//!    └──────── pointer_up ──────┘
//! ```
//!
//! - `pointer_down`: flags the handle and the root as dragging, emits `DragStart`.
//! - `pointer_move`: maps the pointer to a value and stores it (which recomputes the range bar), emits `Drag`.
//! - `pointer_up`: clears the flags, emits `DragEnd`, recomputes the range bar, emits `Change`.

use kurbo::Point;

use crate::config::SliderConfig;
use crate::slider::Slider;
use crate::surface::{Surface, Track};
use crate::types::{HandleId, Key, SliderEvent, VisualFlags};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum DragPhase {
    #[default]
    Idle,
    Dragging {
        start_x: f64,
    },
}

/// Storage for one handle. Accessed through [`HandleRef`] and [`HandleMut`].
#[derive(Debug)]
pub(crate) struct Handle<S> {
    pub(crate) surface: S,
    position: f64,
    // Travel the current position was computed against; `refresh` re-projects from it.
    laid_out_travel: f64,
    drag: DragPhase,
}

impl<S: Surface> Handle<S> {
    pub(crate) fn new(surface: S, track: &impl Track) -> Self {
        let laid_out_travel = travel(track.width(), surface.width());
        let mut handle = Self {
            surface,
            position: 0.0,
            laid_out_travel,
            drag: DragPhase::Idle,
        };
        handle.surface.move_to(0.0);
        handle
    }

    pub(crate) fn position(&self) -> f64 {
        self.position
    }

    pub(crate) fn width(&self) -> f64 {
        self.surface.width()
    }

    fn travel(&self, track: &impl Track) -> f64 {
        travel(track.width(), self.surface.width())
    }

    fn move_to(&mut self, position: f64, travel: f64) {
        self.position = position;
        self.laid_out_travel = travel;
        self.surface.move_to(position);
    }
}

/// Pixel range a handle can move in; never negative.
fn travel(track_width: f64, handle_width: f64) -> f64 {
    let t = track_width - handle_width;
    if t > 0.0 { t } else { 0.0 }
}

fn position_to_value(config: &SliderConfig, travel: f64, position: f64) -> f64 {
    let ratio = if travel > 0.0 { position / travel } else { 0.0 };
    config.snap(ratio * config.span() + config.min)
}

fn value_to_position(config: &SliderConfig, travel: f64, value: f64) -> f64 {
    let span = config.span();
    if span == 0.0 || span.is_nan() {
        return 0.0;
    }
    (config.snap(value) - config.min) / span * travel
}

/// Read-only view of a handle.
///
/// Obtained from [`Slider::handle_ref`].
pub struct HandleRef<'a, T, S> {
    slider: &'a Slider<T, S>,
    id: HandleId,
}

impl<T, S> core::fmt::Debug for HandleRef<'_, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HandleRef")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Track, S: Surface> HandleRef<'a, T, S> {
    pub(crate) fn new(slider: &'a Slider<T, S>, id: HandleId) -> Self {
        Self { slider, id }
    }

    fn handle(&self) -> &'a Handle<S> {
        self.slider.handle_storage(self.id)
    }

    /// This handle's identifier.
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// The handle's visual element.
    pub fn surface(&self) -> &'a S {
        &self.handle().surface
    }

    /// Stored pixel position along the track.
    pub fn position(&self) -> f64 {
        self.handle().position()
    }

    /// Width of the handle element.
    pub fn width(&self) -> f64 {
        self.handle().width()
    }

    /// Pixel range available to this handle: track width minus handle width, at least zero.
    pub fn travel(&self) -> f64 {
        self.handle().travel(self.slider.track())
    }

    /// Returns true between `pointer_down` and `pointer_up`.
    pub fn is_dragging(&self) -> bool {
        matches!(self.handle().drag, DragPhase::Dragging { .. })
    }

    /// Quantize `value` using the slider's bounds and step.
    pub fn snap(&self, value: f64) -> f64 {
        self.slider.config().snap(value)
    }

    /// Convert a track-local pixel offset to a snapped value.
    pub fn position_to_value(&self, position: f64) -> f64 {
        position_to_value(self.slider.config(), self.travel(), position)
    }

    /// Convert a value to the track-local pixel offset of its snapped value.
    pub fn value_to_position(&self, value: f64) -> f64 {
        value_to_position(self.slider.config(), self.travel(), value)
    }

    /// Current value, derived from the stored position and the live geometry.
    pub fn value(&self) -> f64 {
        self.position_to_value(self.position())
    }
}

/// Mutable view of a handle.
///
/// Obtained from [`Slider::handle_mut`] or passed to the initializer of
/// [`Slider::handle_with`]. Setters return `&mut Self` for chaining.
pub struct HandleMut<'a, T, S> {
    slider: &'a mut Slider<T, S>,
    id: HandleId,
}

impl<T, S> core::fmt::Debug for HandleMut<'_, T, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HandleMut")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Track, S: Surface> HandleMut<'a, T, S> {
    pub(crate) fn new(slider: &'a mut Slider<T, S>, id: HandleId) -> Self {
        Self { slider, id }
    }

    /// Reborrow as a read-only view.
    pub fn view(&self) -> HandleRef<'_, T, S> {
        HandleRef::new(&*self.slider, self.id)
    }

    /// This handle's identifier.
    pub fn id(&self) -> HandleId {
        self.id
    }

    /// Current value. See [`HandleRef::value`].
    pub fn value(&self) -> f64 {
        self.view().value()
    }

    /// Stored pixel position. See [`HandleRef::position`].
    pub fn position(&self) -> f64 {
        self.view().position()
    }

    /// Mutable access to the handle's visual element.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.slider.handle_storage_mut(self.id).surface
    }

    /// Set the value, snapped and clamped to the slider bounds.
    ///
    /// On a two-handle slider the low handle cannot move above the high handle
    /// and vice versa: the requested value is clamped to the sibling's current
    /// value. Roles never swap. The range bar is recomputed; no notification
    /// is emitted.
    pub fn set_value(&mut self, value: f64) -> &mut Self {
        let value = self.constrain(value);
        let this = self.view();
        let travel = this.travel();
        let position = this.value_to_position(value);
        self.slider
            .handle_storage_mut(self.id)
            .move_to(position, travel);
        self.slider.update_range();
        self
    }

    /// Increase the value by one step. A no-op at `max`.
    pub fn step_up(&mut self) -> &mut Self {
        let next = self.value() + self.slider.config().step;
        self.set_value(next)
    }

    /// Decrease the value by one step. A no-op at `min`.
    pub fn step_down(&mut self) -> &mut Self {
        let next = self.value() - self.slider.config().step;
        self.set_value(next)
    }

    /// Re-derive the pixel position after the track or handle geometry changed.
    ///
    /// The value at the geometry the position was last laid out against is
    /// projected onto the current geometry, and the range bar is recomputed.
    pub fn refresh(&mut self) -> &mut Self {
        let config = *self.slider.config();
        let handle = self.slider.handle_storage(self.id);
        let value = position_to_value(&config, handle.laid_out_travel, handle.position());
        let travel = self.view().travel();
        let position = value_to_position(&config, travel, value);
        log::trace!("handle {:?}: refresh to {position}px (value {value})", self.id);
        self.slider
            .handle_storage_mut(self.id)
            .move_to(position, travel);
        self.slider.update_range();
        self
    }

    /// Start a drag session at pointer position `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        log::debug!("handle {:?}: drag start at x={}", self.id, pos.x);
        let handle = self.slider.handle_storage_mut(self.id);
        handle.drag = DragPhase::Dragging { start_x: pos.x };
        handle.surface.add_flags(VisualFlags::DRAGGING);
        self.slider.root_flags().add(VisualFlags::DRAGGING);
        self.slider.emit(SliderEvent::DragStart(self.id));
    }

    /// Move the handle to follow the pointer at `pos`.
    ///
    /// The offset is taken relative to the track's current bounds, so the
    /// session start position is not consulted; a move without a preceding
    /// [`pointer_down`](Self::pointer_down) is handled the same way.
    pub fn pointer_move(&mut self, pos: Point) {
        let offset = pos.x - self.slider.track().bounds().x0;
        let value = self.view().position_to_value(offset);
        if let DragPhase::Dragging { start_x } = self.slider.handle_storage(self.id).drag {
            log::trace!(
                "handle {:?}: drag to {value} ({:+}px from start)",
                self.id,
                pos.x - start_x
            );
        } else {
            log::trace!("handle {:?}: move outside a drag session to {value}", self.id);
        }
        self.set_value(value);
        self.slider.emit(SliderEvent::Drag(self.id));
    }

    /// End the drag session.
    ///
    /// Returns false, without side effects, when no session is active.
    pub fn pointer_up(&mut self) -> bool {
        let handle = self.slider.handle_storage_mut(self.id);
        if handle.drag == DragPhase::Idle {
            return false;
        }
        handle.drag = DragPhase::Idle;
        handle.surface.remove_flags(VisualFlags::DRAGGING);
        if !self.slider.is_dragging() {
            self.slider.root_flags().remove(VisualFlags::DRAGGING);
        }
        log::debug!("handle {:?}: drag end at {}", self.id, self.value());
        self.slider.emit(SliderEvent::DragEnd(self.id));
        self.slider.update_range();
        self.slider.emit(SliderEvent::Change);
        true
    }

    /// Apply a navigation key.
    ///
    /// `Left`/`Right` step down/up, `Home`/`End` jump to the bounds. A handled
    /// key stores the new value (recomputing the range bar) and emits `Change`. Returns false for
    /// [`Key::Other`], which changes nothing and emits nothing.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Left => self.step_down(),
            Key::Right => self.step_up(),
            Key::Home => {
                let min = self.slider.config().min;
                self.set_value(min)
            }
            Key::End => {
                let max = self.slider.config().max;
                self.set_value(max)
            }
            Key::Other => return false,
        };
        log::trace!("handle {:?}: {key:?} -> {}", self.id, self.value());
        self.slider.emit(SliderEvent::Change);
        true
    }

    // Sibling values are read from stored positions; the sibling is never written.
    fn constrain(&self, value: f64) -> f64 {
        if self.slider.len() != 2 {
            return value;
        }
        let (low, high) = (HandleId::new(0), HandleId::new(1));
        if self.id == high {
            let floor = self.slider.handle_ref(low).value();
            if value < floor {
                return floor;
            }
        } else if self.id == low {
            let ceil = self.slider.handle_ref(high).value();
            if value > ceil {
                return ceil;
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{HeadlessSurface, HeadlessTrack};
    use crate::types::{EventKind, RangeBar};
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    // Track 110px wide with a 10px handle: 100px of travel, so on the default
    // 0..=100 range a value equals its pixel position.
    fn slider() -> Slider<HeadlessTrack, HeadlessSurface> {
        Slider::new(HeadlessTrack::new(Rect::new(0.0, 0.0, 110.0, 10.0)))
    }

    fn record(s: &mut Slider<HeadlessTrack, HeadlessSurface>) -> Rc<RefCell<Vec<SliderEvent>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        s.on_any(move |e| sink.borrow_mut().push(*e));
        log
    }

    #[test]
    fn mapping_round_trip() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 37.0);
        let h = s.handle_ref(HandleId::new(0));
        assert_eq!(h.travel(), 100.0);
        assert_eq!(h.position(), 37.0);
        assert_eq!(h.value(), 37.0);
        assert_eq!(h.position_to_value(h.value_to_position(62.4)), 62.0);
        assert_eq!(h.surface().offset, 37.0);
    }

    #[test]
    fn mapping_scales_with_travel() {
        let mut s = Slider::new(HeadlessTrack::new(Rect::new(0.0, 0.0, 220.0, 10.0)));
        s.min(-50.0).max(50.0).step(0.5);
        s.handle(HeadlessSurface::new(20.0), 0.0);
        let h = s.handle_ref(HandleId::new(0));
        assert_eq!(h.travel(), 200.0);
        assert_eq!(h.position(), 100.0);
        assert_eq!(h.position_to_value(151.0), 25.5);
        assert_eq!(h.value_to_position(-50.0), 0.0);
        assert_eq!(h.value_to_position(50.0), 200.0);
    }

    #[test]
    fn zero_travel_maps_everything_to_min() {
        let mut s = Slider::new(HeadlessTrack::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        s.handle(HeadlessSurface::new(30.0), 80.0);
        let h = s.handle_ref(HandleId::new(0));
        assert_eq!(h.travel(), 0.0);
        assert_eq!(h.position(), 0.0);
        assert_eq!(h.value(), 0.0);
        assert_eq!(h.position_to_value(50.0), 0.0);
    }

    #[test]
    fn collapsed_range_maps_to_origin() {
        let mut s = slider();
        s.min(5.0).max(5.0);
        s.handle(HeadlessSurface::new(10.0), 9.0);
        let h = s.handle_ref(HandleId::new(0));
        assert_eq!(h.position(), 0.0);
        assert_eq!(h.value(), 5.0);
    }

    #[test]
    fn step_up_and_down_clamp_at_bounds() {
        let mut s = slider();
        s.step(10.0);
        s.handle(HeadlessSurface::new(10.0), 100.0);
        let mut h = s.handle_mut(HandleId::new(0));
        h.step_up();
        assert_eq!(h.value(), 100.0);
        h.step_down().step_down();
        assert_eq!(h.value(), 80.0);
        h.set_value(0.0).step_down();
        assert_eq!(h.value(), 0.0);
    }

    #[test]
    fn value_follows_external_geometry_changes() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 50.0);
        // Track doubles in width; the stored position now reads as a smaller value.
        s.track_mut().bounds = Rect::new(0.0, 0.0, 210.0, 10.0);
        assert_eq!(s.handle_ref(HandleId::new(0)).value(), 25.0);
    }

    #[test]
    fn refresh_reprojects_onto_new_geometry() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 50.0);
        s.track_mut().bounds = Rect::new(0.0, 0.0, 210.0, 10.0);
        let mut h = s.handle_mut(HandleId::new(0));
        h.refresh();
        assert_eq!(h.position(), 100.0);
        assert_eq!(h.value(), 50.0);
    }

    #[test]
    fn refreshing_one_handle_updates_range_bar() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 20.0)
            .handle(HeadlessSurface::new(10.0), 80.0);
        s.track_mut().bounds = Rect::new(0.0, 0.0, 210.0, 10.0);
        s.handle_mut(HandleId::new(0)).refresh();
        let bar = RangeBar {
            offset: 40.0,
            length: 50.0,
        };
        assert_eq!(s.handle_ref(HandleId::new(0)).position(), 40.0);
        assert_eq!(s.range_bar(), Some(bar));
        assert_eq!(s.track().range, Some(bar));
    }

    #[test]
    fn drag_session_emits_in_order() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 0.0);
        let log = record(&mut s);
        let id = HandleId::new(0);
        let mut h = s.handle_mut(id);
        h.pointer_down(Point::new(5.0, 5.0));
        assert!(h.view().is_dragging());
        h.pointer_move(Point::new(50.0, 5.0));
        assert!(h.pointer_up());
        assert_eq!(h.value(), 50.0);
        assert_eq!(
            *log.borrow(),
            vec![
                SliderEvent::DragStart(id),
                SliderEvent::Drag(id),
                SliderEvent::DragEnd(id),
                SliderEvent::Change,
            ]
        );
    }

    #[test]
    fn drag_toggles_handle_and_root_flags() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 0.0);
        let root = s.root_flags().clone();
        let mut h = s.handle_mut(HandleId::new(0));
        h.pointer_down(Point::new(0.0, 0.0));
        assert!(h.view().surface().flags.contains(VisualFlags::DRAGGING));
        assert!(root.contains(VisualFlags::DRAGGING));
        h.pointer_up();
        assert!(h.view().surface().flags.is_empty());
        assert!(!root.contains(VisualFlags::DRAGGING));
    }

    #[test]
    fn pointer_offset_is_relative_to_live_track_bounds() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 0.0);
        s.track_mut().bounds = Rect::new(300.0, 0.0, 410.0, 10.0);
        let mut h = s.handle_mut(HandleId::new(0));
        h.pointer_down(Point::new(300.0, 0.0));
        h.pointer_move(Point::new(372.0, 0.0));
        assert_eq!(h.value(), 72.0);
        // Past either end of the track the value clamps.
        h.pointer_move(Point::new(900.0, 0.0));
        assert_eq!(h.value(), 100.0);
        h.pointer_move(Point::new(-900.0, 0.0));
        assert_eq!(h.value(), 0.0);
    }

    #[test]
    fn move_without_start_is_safe() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 0.0);
        let log = record(&mut s);
        let id = HandleId::new(0);
        let mut h = s.handle_mut(id);
        h.pointer_move(Point::new(30.0, 0.0));
        assert_eq!(h.value(), 30.0);
        assert!(!h.pointer_up());
        assert_eq!(*log.borrow(), vec![SliderEvent::Drag(id)]);
    }

    #[test]
    fn keys_step_and_jump() {
        let mut s = slider();
        s.step(10.0);
        s.handle(HeadlessSurface::new(10.0), 50.0);
        let mut h = s.handle_mut(HandleId::new(0));
        assert!(h.key_down(Key::Right));
        assert_eq!(h.value(), 60.0);
        assert!(h.key_down(Key::Left));
        assert!(h.key_down(Key::Left));
        assert_eq!(h.value(), 40.0);
        assert!(h.key_down(Key::End));
        assert_eq!(h.value(), 100.0);
        assert!(h.key_down(Key::Home));
        assert_eq!(h.value(), 0.0);
    }

    #[test]
    fn handled_key_emits_change_only() {
        let mut s = slider();
        s.step(10.0);
        s.handle(HeadlessSurface::new(10.0), 50.0);
        let log = record(&mut s);
        let mut h = s.handle_mut(HandleId::new(0));
        h.key_down(Key::Right);
        assert_eq!(h.value(), 60.0);
        assert_eq!(*log.borrow(), vec![SliderEvent::Change]);
    }

    #[test]
    fn unhandled_key_is_silent() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 50.0);
        let log = record(&mut s);
        let mut h = s.handle_mut(HandleId::new(0));
        assert!(!h.key_down(Key::Other));
        assert_eq!(h.value(), 50.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn boundary_key_still_notifies() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 100.0);
        let changes = Rc::new(RefCell::new(0));
        let sink = changes.clone();
        s.on(EventKind::Change, move |_| *sink.borrow_mut() += 1);
        let mut h = s.handle_mut(HandleId::new(0));
        assert!(h.key_down(Key::Right));
        assert_eq!(h.value(), 100.0);
        assert_eq!(*changes.borrow(), 1);
    }

    #[test]
    fn low_handle_cannot_pass_high() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 20.0)
            .handle(HeadlessSurface::new(10.0), 80.0);
        let mut low = s.handle_mut(HandleId::new(0));
        low.set_value(90.0);
        assert_eq!(low.value(), 80.0);
        assert_eq!(s.handle_ref(HandleId::new(1)).value(), 80.0);
    }

    #[test]
    fn high_handle_cannot_pass_low() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 20.0)
            .handle(HeadlessSurface::new(10.0), 80.0);
        let mut high = s.handle_mut(HandleId::new(1));
        high.set_value(5.0);
        assert_eq!(high.value(), 20.0);
        high.key_down(Key::Home);
        assert_eq!(high.value(), 20.0);
    }

    #[test]
    fn dragging_low_past_high_pins_to_high() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 20.0)
            .handle(HeadlessSurface::new(10.0), 80.0);
        let mut low = s.handle_mut(HandleId::new(0));
        low.pointer_down(Point::new(20.0, 0.0));
        low.pointer_move(Point::new(95.0, 0.0));
        low.pointer_up();
        assert_eq!(s.value().as_slice(), &[80.0, 80.0]);
    }

    #[test]
    fn three_handles_are_unconstrained() {
        let mut s = slider();
        s.handle(HeadlessSurface::new(10.0), 20.0)
            .handle(HeadlessSurface::new(10.0), 40.0)
            .handle(HeadlessSurface::new(10.0), 10.0);
        s.handle_mut(HandleId::new(0)).set_value(90.0);
        assert_eq!(s.value().as_slice(), &[90.0, 40.0, 10.0]);
    }
}
