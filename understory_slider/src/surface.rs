// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render surfaces consumed by the slider.
//!
//! ## Overview
//!
//! The slider never creates or styles elements. A toolkit provides one
//! [`Track`] per slider and one [`Surface`] per handle; the slider reads their
//! widths, moves handles, toggles visual flags and reports the range bar.
//!
//! [`HeadlessTrack`] and [`HeadlessSurface`] are in-memory implementations
//! that simply record what they are told. They are useful for tests and for
//! toolkits that prefer to pull state after each event instead of being pushed to.

use kurbo::Rect;

use crate::types::{RangeBar, VisualFlags};

/// A handle's visual element.
pub trait Surface {
    /// Content-box width in pixels.
    fn width(&self) -> f64;
    /// Apply a horizontal translation, in track-local pixels.
    fn move_to(&mut self, offset: f64);
    /// Set visual state flags.
    fn add_flags(&mut self, flags: VisualFlags);
    /// Clear visual state flags.
    fn remove_flags(&mut self, flags: VisualFlags);
}

/// The track element handles move along.
pub trait Track {
    /// Current bounding box in the pointer coordinate space.
    ///
    /// Read on every pointer move, so it may change between events
    /// (scrolling, resizing).
    fn bounds(&self) -> Rect;

    /// Content-box width in pixels. Defaults to the width of [`Track::bounds`].
    fn width(&self) -> f64 {
        self.bounds().width()
    }

    /// Render the range bar between two handles.
    fn set_range(&mut self, range: RangeBar);
}

/// A [`Surface`] that records its offset and flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessSurface {
    /// Reported width.
    pub width: f64,
    /// Last offset passed to [`Surface::move_to`].
    pub offset: f64,
    /// Currently set flags.
    pub flags: VisualFlags,
}

impl HeadlessSurface {
    /// Create a surface of the given width at offset zero.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }
}

impl Surface for HeadlessSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn move_to(&mut self, offset: f64) {
        self.offset = offset;
    }

    fn add_flags(&mut self, flags: VisualFlags) {
        self.flags.insert(flags);
    }

    fn remove_flags(&mut self, flags: VisualFlags) {
        self.flags.remove(flags);
    }
}

/// A [`Track`] with fixed bounds that records the last range bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadlessTrack {
    /// Bounding box reported to the slider.
    pub bounds: Rect,
    /// Last range bar passed to [`Track::set_range`].
    pub range: Option<RangeBar>,
}

impl HeadlessTrack {
    /// Create a track with the given bounds.
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            range: None,
        }
    }
}

impl Track for HeadlessTrack {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_range(&mut self, range: RangeBar) {
        self.range = Some(range);
    }
}
