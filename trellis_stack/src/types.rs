// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the stack: node identifiers, flags, and layout parameters.

use kurbo::Size;

/// Identifier for a node owned by a [`StackLayout`](crate::StackLayout).
///
/// Identifiers are issued from a per-stack counter and never reused, so a
/// removed node's id stays dead.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u64);

bitflags::bitflags! {
    /// Node flags controlling painting and picking.
    ///
    /// Flags never affect layout: a hidden node still takes up its slot.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is painted by [`StackLayout::draw`](crate::StackLayout::draw).
        const VISIBLE  = 0b0000_0001;
        /// Node receives pointer events.
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Layout inputs for a stack.
///
/// Every node is sized within `min_size..=max_size` and consecutive nodes are
/// separated by `spacing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackParams {
    /// Lower constraint bound.
    pub min_size: Size,
    /// Upper constraint bound. May be infinite.
    pub max_size: Size,
    /// Gap between consecutive nodes.
    pub spacing: f64,
}

impl Default for StackParams {
    fn default() -> Self {
        Self {
            min_size: Size::ZERO,
            max_size: Size::new(f64::INFINITY, f64::INFINITY),
            spacing: 0.0,
        }
    }
}

impl StackParams {
    /// Replace the lower constraint bound.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Replace the upper constraint bound.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    /// Replace the spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Clamp negative bounds and spacing to zero.
    ///
    /// Inverted bounds (`min_size > max_size`) are kept as they are; sizing
    /// resolves them in favor of `max_size`.
    #[must_use]
    pub fn sanitized(self) -> Self {
        // Spacing is expected to be finite. Catch NaNs (and infinities) in
        // debug builds so misuse does not go unnoticed.
        debug_assert!(
            self.spacing.is_finite(),
            "StackParams spacing must be finite; got {}",
            self.spacing
        );
        Self {
            min_size: non_negative(self.min_size),
            max_size: non_negative(self.max_size),
            spacing: if self.spacing.is_finite() {
                self.spacing.max(0.0)
            } else {
                0.0
            },
        }
    }
}

fn non_negative(size: Size) -> Size {
    Size::new(size.width.max(0.0), size.height.max(0.0))
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{NodeFlags, StackParams};

    #[test]
    fn default_flags_are_visible_and_pickable() {
        let flags = NodeFlags::default();
        assert!(flags.contains(NodeFlags::VISIBLE));
        assert!(flags.contains(NodeFlags::PICKABLE));
    }

    #[test]
    fn sanitize_clamps_negatives() {
        let p = StackParams::default()
            .with_min_size(Size::new(-1.0, 5.0))
            .with_max_size(Size::new(100.0, -3.0))
            .with_spacing(-4.0)
            .sanitized();
        assert_eq!(p.min_size, Size::new(0.0, 5.0));
        assert_eq!(p.max_size, Size::new(100.0, 0.0));
        assert_eq!(p.spacing, 0.0);
    }

    #[test]
    fn sanitize_keeps_infinite_max() {
        let p = StackParams::default().sanitized();
        assert_eq!(p, StackParams::default());
    }
}
