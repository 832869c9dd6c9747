// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage summary produced by layout and event handling.

use alloc::vec::Vec;

use kurbo::Rect;

use crate::util::{covers, has_area};

/// Regions of the stack whose contents changed.
///
/// Rectangles may overlap and are not a minimal cover, but together they
/// bound everything that needs repainting. The list stays short: a rectangle
/// already covered by another is dropped, and once [`Damage::MAX_RECTS`] is
/// reached everything collapses into a single union.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Damage {
    /// Stack-space rectangles that should be repainted.
    pub dirty_rects: Vec<Rect>,
}

impl Damage {
    /// Number of rectangles kept before they are merged into one.
    pub const MAX_RECTS: usize = 16;

    /// Returns the union of all damage rects.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.dirty_rects.iter().copied();
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// Returns `true` if nothing was damaged.
    pub fn is_empty(&self) -> bool {
        self.dirty_rects.is_empty()
    }

    /// Record `rect`.
    ///
    /// Rectangles without area, or already covered by a recorded rectangle,
    /// are dropped. Recorded rectangles that `rect` covers are replaced by it.
    pub fn add_rect(&mut self, rect: Rect) {
        if !has_area(rect) || self.dirty_rects.iter().any(|r| covers(*r, rect)) {
            return;
        }
        self.dirty_rects.retain(|r| !covers(rect, *r));
        if self.dirty_rects.len() < Self::MAX_RECTS {
            self.dirty_rects.push(rect);
            return;
        }
        let union = self
            .dirty_rects
            .drain(..)
            .fold(rect, |acc, r| acc.union(r));
        self.dirty_rects.push(union);
    }

    /// Record every rectangle of `other`.
    pub fn extend(&mut self, other: &Self) {
        for rect in &other.dirty_rects {
            self.add_rect(*rect);
        }
    }
}
