// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use trellis_paint::{Color, Surface};

use crate::{EventCx, LayoutCx, Node, PointerEvent, clamp_size};

/// A filled axis-aligned rectangle.
///
/// Any pointer-down inside its bounds is consumed and replaces the fill with a
/// random opaque color.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
    color: Color,
}

impl Rectangle {
    /// A [`Color::BLUE`] rectangle. Negative dimensions are clamped to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            color: Color::BLUE,
        }
    }

    /// Replace the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Intrinsic size, before constraints.
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Current fill color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Node for Rectangle {
    fn compute_size(&self, _cx: &LayoutCx<'_>, min: Size, max: Size) -> Size {
        clamp_size(self.intrinsic_size(), min, max)
    }

    fn paint(&self, surface: &mut dyn Surface, size: Size) {
        surface.fill_rect(Rect::from_origin_size(Point::ORIGIN, size), self.color);
    }

    fn handle_pointer_event(
        &mut self,
        cx: &mut EventCx<'_>,
        _local: Point,
        _size: Size,
        event: &PointerEvent,
    ) -> bool {
        if !event.is_down() {
            return false;
        }
        let [_, r, g, b] = cx.random_u32().to_be_bytes();
        self.color = Color::rgb8(r, g, b);
        log::trace!("rectangle recolored to {:?}", self.color);
        true
    }
}
