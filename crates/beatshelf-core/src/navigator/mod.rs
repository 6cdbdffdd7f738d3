//! Virtualized selection and smooth-scroll navigation
//!
//! The navigator owns the interaction state over the current filtered view:
//! scroll offset, target offset, and the selected entry. Entries are laid
//! out vertically with a fixed stride; the presentation layer renders only
//! the range reported by [`SelectionNavigator::visible_window`].

mod easing;

pub use easing::{approach, SNAP_EPSILON};

use std::ops::Range;

use rand::Rng;

use crate::catalog::{CatalogEntry, EntryKey};

/// Rendered extent of one entry in layout units.
pub const ENTRY_EXTENT: f32 = 80.0;
/// Fixed gap between consecutive entries.
pub const ENTRY_MARGIN: f32 = 4.0;
/// Layout distance from one entry's coordinate to the next.
pub const ENTRY_STRIDE: f32 = ENTRY_EXTENT + ENTRY_MARGIN;
/// Exponential approach rate for smooth scrolling.
pub const SCROLL_RATE: f32 = 8.0;
/// Scroll distance of a single wheel step.
pub const SCROLL_STEP: f32 = 96.0;

/// Selection and scroll state over a working sequence of catalog entries.
///
/// The working sequence is the current search-filter output; the navigator
/// keeps only entry keys, so it references entries by identity and position,
/// never by deep copy. Single logical thread of control assumed; call
/// [`advance`](Self::advance) once per tick.
pub struct SelectionNavigator {
    keys: Vec<EntryKey>,
    selected: Option<usize>,
    offset: f32,
    target: f32,
    anchor: f32,
}

impl SelectionNavigator {
    /// Create a navigator whose selected entry centers on the given anchor
    /// coordinate (typically half the viewport extent).
    pub fn new(anchor: f32) -> Self {
        Self {
            keys: Vec::new(),
            selected: None,
            offset: 0.0,
            target: 0.0,
            anchor,
        }
    }

    /// Number of entries in the working sequence.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Target scroll offset the current offset is easing toward.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Position of the selected entry in the working sequence, if any.
    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// Identity of the selected entry, if any.
    pub fn selected_key(&self) -> Option<&EntryKey> {
        self.selected.and_then(|p| self.keys.get(p))
    }

    /// Layout coordinate of the entry at `position` under the current offset.
    pub fn entry_coordinate(&self, position: usize) -> f32 {
        self.offset + position as f32 * ENTRY_STRIDE
    }

    /// Swap in a new working sequence (typically a fresh filter result).
    ///
    /// The previously selected entry identity is looked up in the new
    /// sequence: if present, the selection follows it to its new position
    /// with no offset reset; if absent, the selection is cleared and the
    /// scroll target is left untouched.
    pub fn set_entries(&mut self, entries: &[&CatalogEntry]) {
        let previous = self
            .selected
            .take()
            .and_then(|p| self.keys.get(p).cloned());
        self.keys = entries.iter().map(|e| e.key.clone()).collect();
        if let Some(key) = previous {
            self.selected = self.keys.iter().position(|k| *k == key);
        }
    }

    /// Select the first entry, if the working sequence is non-empty.
    pub fn select_first(&mut self) {
        if !self.keys.is_empty() {
            self.select_by_position(0);
        }
    }

    /// Select the entry at `position` and retarget the scroll so that its
    /// layout coordinate centers on the anchor. Out-of-range positions are
    /// ignored.
    pub fn select_by_position(&mut self, position: usize) {
        if position >= self.keys.len() {
            return;
        }
        self.selected = Some(position);
        self.center_on(position);
    }

    /// Select the next entry, wrapping at the end. Behaves as
    /// [`select_first`](Self::select_first) when nothing is selected.
    pub fn next(&mut self) {
        self.navigate(1);
    }

    /// Select the previous entry, wrapping at the start. Behaves as
    /// [`select_first`](Self::select_first) when nothing is selected.
    pub fn previous(&mut self) {
        self.navigate(-1);
    }

    fn navigate(&mut self, step: isize) {
        if self.keys.is_empty() {
            return;
        }
        match self.selected {
            None => self.select_first(),
            Some(position) => {
                let len = self.keys.len() as isize;
                let next = (position as isize + step).rem_euclid(len) as usize;
                self.select_by_position(next);
            }
        }
    }

    /// Select a uniformly random entry, if the working sequence is non-empty.
    pub fn select_random(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        let position = rand::rng().random_range(0..self.keys.len());
        self.select_by_position(position);
    }

    /// Nudge the scroll target directly (mouse-wheel path); positive values
    /// scroll toward earlier entries.
    pub fn scroll_by(&mut self, amount: f32) {
        self.target += amount;
    }

    /// Per-tick update: ease the offset toward the target, then keep the
    /// ends of a short list from scrolling past the anchor.
    pub fn advance(&mut self, dt: f32) {
        self.offset = approach(self.offset, self.target, dt, SCROLL_RATE);
        self.correct_edges();
    }

    fn center_on(&mut self, position: usize) {
        self.target = self.offset - (self.entry_coordinate(position) - self.anchor);
    }

    /// If the first entry has scrolled past the anchor, or the last has not
    /// reached it, recenter the target on that boundary entry.
    fn correct_edges(&mut self) {
        if self.keys.is_empty() {
            return;
        }
        if self.entry_coordinate(0) > self.anchor {
            self.center_on(0);
        } else if self.entry_coordinate(self.keys.len() - 1) < self.anchor {
            self.center_on(self.keys.len() - 1);
        }
    }

    /// Minimal contiguous index range whose rendered extent covers the
    /// viewport `[0, viewport_extent)` at the current offset.
    ///
    /// This is the virtualization contract: the presentation layer renders
    /// only this range and never iterates the full working sequence.
    pub fn visible_window(&self, viewport_extent: f32) -> Range<usize> {
        let len = self.keys.len();
        if len == 0 {
            return 0..0;
        }

        // Entry i spans [offset + i*stride, offset + i*stride + extent).
        let first = (((-self.offset - ENTRY_EXTENT) / ENTRY_STRIDE).floor() as isize + 1).max(0)
            as usize;
        let end = (((viewport_extent - self.offset) / ENTRY_STRIDE).ceil() as isize).max(0)
            as usize;

        let first = first.min(len);
        let end = end.clamp(first, len);
        first..end
    }
}
