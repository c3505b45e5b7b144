// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the slider: handle identifiers, keys, flags, notifications and derived geometry.

use alloc::vec::Vec;

use kurbo::Rect;

/// Identifier for a handle within its [`Slider`](crate::Slider).
///
/// Handles are never removed or reordered, so the identifier is simply the
/// insertion index. Index `0` is the "low" handle and index `1` the "high"
/// handle when exactly two handles exist.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub(crate) u32);

impl HandleId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a slider never holds anywhere near u32::MAX handles"
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Position of the handle in the slider's handle sequence.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Named keys understood by a handle.
///
/// Anything that is not one of the four navigation keys maps to
/// [`Key::Other`] and is ignored without mutation or notification.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    /// Step the handle down.
    Left,
    /// Step the handle up.
    Right,
    /// Jump to the slider minimum.
    Home,
    /// Jump to the slider maximum.
    End,
    /// Any other key.
    Other,
}

impl Key {
    /// Resolve a lowercase key name (`"left"`, `"right"`, `"home"`, `"end"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            _ => Self::Other,
        }
    }

    /// Resolve a DOM `keyCode`.
    pub const fn from_code(code: u32) -> Self {
        match code {
            35 => Self::End,
            36 => Self::Home,
            37 => Self::Left,
            39 => Self::Right,
            _ => Self::Other,
        }
    }
}

bitflags::bitflags! {
    /// Visual state flags toggled on handle surfaces and on the [`RootFlags`](crate::RootFlags).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct VisualFlags: u8 {
        /// A drag session is in progress.
        const DRAGGING = 0b0000_0001;
    }
}

/// Notification kinds published by a slider.
///
/// Used to filter listeners registered with [`Slider::on`](crate::Slider::on).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum EventKind {
    /// See [`SliderEvent::DragStart`].
    DragStart,
    /// See [`SliderEvent::Drag`].
    Drag,
    /// See [`SliderEvent::DragEnd`].
    DragEnd,
    /// See [`SliderEvent::Change`].
    Change,
}

/// A notification published by a slider.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SliderEvent {
    /// A drag session started on the handle.
    DragStart(HandleId),
    /// The handle moved during a drag session. Fires once per move.
    Drag(HandleId),
    /// The drag session on the handle ended.
    DragEnd(HandleId),
    /// A user interaction completed: once per drag session, or once per handled key.
    Change,
}

impl SliderEvent {
    /// The kind of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::DragStart(_) => EventKind::DragStart,
            Self::Drag(_) => EventKind::Drag,
            Self::DragEnd(_) => EventKind::DragEnd,
            Self::Change => EventKind::Change,
        }
    }

    /// The handle this event refers to, if any.
    pub const fn handle(&self) -> Option<HandleId> {
        match self {
            Self::DragStart(h) | Self::Drag(h) | Self::DragEnd(h) => Some(*h),
            Self::Change => None,
        }
    }
}

/// Aggregated slider value.
///
/// A single-handle slider reports [`Single`](Self::Single); any other handle
/// count reports every handle value in sequence order.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderValue {
    /// The value of the only handle.
    Single(f64),
    /// One value per handle, in handle order.
    Many(Vec<f64>),
}

impl SliderValue {
    /// Returns the value of a single-handle slider.
    pub fn as_single(&self) -> Option<f64> {
        match self {
            Self::Single(v) => Some(*v),
            Self::Many(_) => None,
        }
    }

    /// Returns every handle value as a slice.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::Single(v) => core::slice::from_ref(v),
            Self::Many(vs) => vs,
        }
    }
}

/// Derived geometry of the highlighted range between two handles.
///
/// Offsets are in track-local pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RangeBar {
    /// Left edge, equal to the low handle's position.
    pub offset: f64,
    /// Width, spanning to the far edge of the high handle.
    pub length: f64,
}

impl RangeBar {
    /// Map the range bar into the coordinate space of `track`, spanning its full height.
    pub fn to_rect(self, track: Rect) -> Rect {
        let x0 = track.x0 + self.offset;
        Rect::new(x0, track.y0, x0 + self.length, track.y1)
    }
}
