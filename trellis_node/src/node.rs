// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node capability trait.

use core::any::Any;
use core::fmt::Debug;

use kurbo::{Point, Size};
use trellis_paint::Surface;

use crate::{EventCx, LayoutCx, PointerEvent};

/// A drawable, sizeable, optionally interactive scene element.
///
/// ## Coordinate spaces
///
/// Both [`Node::paint`] and [`Node::handle_pointer_event`] work in the node's
/// local space: the origin is the node's top-left corner and the laid-out
/// `size` is passed in. Where the node sits in its container is none of its
/// business.
///
/// ## Ownership of geometry
///
/// Containers own position and size. A node must only mutate its intrinsic
/// data, and only from its own event handler; the container re-runs layout to
/// pick up the change.
///
/// The `Any` supertrait lets containers hand out typed references
/// (`&dyn Node` upcasts to `&dyn Any`).
pub trait Node: Any + Debug {
    /// Size of this node within `min..=max`.
    ///
    /// Must be a pure function of the node's intrinsic data and the bounds.
    /// Built-in nodes return `clamp_size(intrinsic, min, max)`.
    fn compute_size(&self, cx: &LayoutCx<'_>, min: Size, max: Size) -> Size;

    /// Emit drawing commands in local coordinates for a node of `size`.
    fn paint(&self, surface: &mut dyn Surface, size: Size);

    /// React to a pointer event whose position, in local coordinates, is `local`.
    ///
    /// The container only calls this when `local` lies inside the node's
    /// bounding rectangle. Return `true` to consume the event, which stops
    /// routing to nodes underneath. The default consumes nothing.
    fn handle_pointer_event(
        &mut self,
        cx: &mut EventCx<'_>,
        local: Point,
        size: Size,
        event: &PointerEvent,
    ) -> bool {
        let _ = (cx, local, size, event);
        false
    }
}

/// Clamp `size` into `min..=max` componentwise.
///
/// Each component is `min(max(v, lo), hi)`, so inverted bounds (`lo > hi`)
/// collapse to `hi`.
pub fn clamp_size(size: Size, min: Size, max: Size) -> Size {
    Size::new(
        size.width.max(min.width).min(max.width),
        size.height.max(min.height).min(max.height),
    )
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::clamp_size;

    #[test]
    fn clamp_within_bounds_is_identity() {
        let s = Size::new(20.0, 30.0);
        assert_eq!(clamp_size(s, Size::ZERO, Size::new(100.0, 100.0)), s);
    }

    #[test]
    fn clamp_raises_and_lowers() {
        let s = clamp_size(
            Size::new(5.0, 500.0),
            Size::new(10.0, 10.0),
            Size::new(100.0, 100.0),
        );
        assert_eq!(s, Size::new(10.0, 100.0));
    }

    #[test]
    fn inverted_bounds_collapse_to_max() {
        let s = clamp_size(
            Size::new(50.0, 0.0),
            Size::new(80.0, 80.0),
            Size::new(40.0, 40.0),
        );
        assert_eq!(s, Size::new(40.0, 40.0));
    }

    #[test]
    fn unbounded_max_keeps_intrinsic() {
        let s = clamp_size(
            Size::new(1e6, 3.0),
            Size::ZERO,
            Size::new(f64::INFINITY, f64::INFINITY),
        );
        assert_eq!(s, Size::new(1e6, 3.0));
    }
}
