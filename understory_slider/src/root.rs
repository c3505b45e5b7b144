// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root-level visual state shared by every slider in a document.

use alloc::rc::Rc;
use core::cell::Cell;

use crate::types::VisualFlags;

/// Document-level visual flags.
///
/// While any handle is dragged, [`VisualFlags::DRAGGING`] is set here so the
/// host can suppress text selection and pin the cursor for the whole window.
/// Create one per document and pass a clone to each
/// [`Slider::with_root`](crate::Slider::with_root); all clones share state.
///
/// ```
/// use understory_slider::{RootFlags, VisualFlags};
///
/// let root = RootFlags::new();
/// let shared = root.clone();
/// shared.add(VisualFlags::DRAGGING);
/// assert!(root.contains(VisualFlags::DRAGGING));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RootFlags {
    flags: Rc<Cell<VisualFlags>>,
}

impl RootFlags {
    /// Create an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flags.
    pub fn get(&self) -> VisualFlags {
        self.flags.get()
    }

    /// Returns true if all of `flags` are set.
    pub fn contains(&self, flags: VisualFlags) -> bool {
        self.get().contains(flags)
    }

    /// Set `flags`.
    pub fn add(&self, flags: VisualFlags) {
        self.flags.set(self.get() | flags);
    }

    /// Clear `flags`.
    pub fn remove(&self, flags: VisualFlags) {
        self.flags.set(self.get() - flags);
    }

    /// Returns true if `other` shares state with `self`.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.flags, &other.flags)
    }
}
