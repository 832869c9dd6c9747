// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Whether `r` covers any area at all.
pub(crate) fn has_area(r: Rect) -> bool {
    r.x1 > r.x0 && r.y1 > r.y0
}

/// Open-interval overlap test: rectangles that only share an edge do not overlap.
pub(crate) fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

/// Whether `outer` contains all of `inner`, edges included.
pub(crate) fn covers(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}
