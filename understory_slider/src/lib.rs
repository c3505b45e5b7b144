// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless, `no_std` range slider core.
//!
//! ## Overview
//!
//! This crate implements the interaction model of a range-input widget: one or
//! more draggable handles along a track, mapping pixel positions to values in
//! `[min, max]`, snapped to a step. It does not create, style or hit-test
//! elements. Instead, the toolkit provides a [`Track`] and one [`Surface`] per
//! handle, forwards pointer and key input, and listens for notifications.
//!
//! ## Model
//!
//! - [`Slider`]: owns the [`SliderConfig`] (bounds and step), the handles, the
//!   derived [`RangeBar`] and an [`Emitter`](emitter::Emitter) for notifications.
//! - Handles: each stores only its pixel position. Values are always derived
//!   from the position and the live geometry through
//!   [`HandleRef::value`]; setting a value goes through [`HandleMut::set_value`].
//! - Range: with exactly two handles, handle `0` is the low end and handle `1`
//!   the high end. Neither can be moved past the other; a request that would
//!   cross is clamped to the sibling's value.
//!
//! ## Input
//!
//! - Pointer: [`HandleMut::pointer_down`], [`HandleMut::pointer_move`] and
//!   [`HandleMut::pointer_up`] form a drag session. Moves are mapped against
//!   the track's current [`bounds`](Track::bounds).
//! - Keyboard: [`HandleMut::key_down`] steps on [`Key::Left`]/[`Key::Right`]
//!   and jumps to the bounds on [`Key::Home`]/[`Key::End`].
//!
//! ## Notifications
//!
//! A drag session emits [`SliderEvent::DragStart`], one [`SliderEvent::Drag`]
//! per move, then [`SliderEvent::DragEnd`] and [`SliderEvent::Change`]. A
//! handled key emits a single [`SliderEvent::Change`]. Setting values in code
//! recomputes the range bar but does not notify.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{HeadlessSurface, HeadlessTrack, Key, RangeBar, Slider, SliderValue};
//!
//! // A 210px track with 10px handles leaves 200px of travel.
//! let mut slider = Slider::new(HeadlessTrack::new(Rect::new(0.0, 0.0, 210.0, 20.0)));
//! slider
//!     .step(5.0)
//!     .handle(HeadlessSurface::new(10.0), 20.0)
//!     .handle(HeadlessSurface::new(10.0), 80.0);
//!
//! // Drag the low handle past the high one: it stops at 80.
//! let low = slider.handle_id(0).unwrap();
//! let mut h = slider.handle_mut(low);
//! h.pointer_down(Point::new(40.0, 10.0));
//! h.pointer_move(Point::new(190.0, 10.0));
//! h.pointer_up();
//! assert_eq!(slider.value(), SliderValue::Many(vec![80.0, 80.0]));
//!
//! // Step the high handle up with the keyboard.
//! let high = slider.handle_id(1).unwrap();
//! slider.handle_mut(high).key_down(Key::Right);
//! assert_eq!(slider.value().as_slice(), &[80.0, 85.0]);
//! assert_eq!(
//!     slider.range_bar(),
//!     Some(RangeBar { offset: 160.0, length: 20.0 })
//! );
//! ```
//!
//! ## Degenerate configuration
//!
//! Bounds and step are not validated. `min >= max`, a non-positive step, or a
//! handle wider than its track produce clamped, finite output rather than
//! errors; see [`SliderConfig::snap`].
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through the
//! [`log`] facade.

#![no_std]

extern crate alloc;

pub mod config;
pub mod emitter;
pub mod handle;
pub mod root;
pub mod slider;
pub mod surface;
pub mod types;

pub use config::SliderConfig;
pub use handle::{HandleMut, HandleRef};
pub use root::RootFlags;
pub use slider::Slider;
pub use surface::{HeadlessSurface, HeadlessTrack, Surface, Track};
pub use types::{EventKind, HandleId, Key, RangeBar, SliderEvent, SliderValue, VisualFlags};
