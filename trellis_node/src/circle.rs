// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use trellis_paint::{Color, Surface};

use crate::{EventCx, LayoutCx, Node, PointerEvent, clamp_size};

/// A filled disk.
///
/// The intrinsic size is the bounding square of the disk. When the laid-out
/// size is smaller than that square, the disk shrinks to fit, and both
/// painting and hit testing use that effective radius around the center of
/// the laid-out box.
/// Whenever "the radius" of a placed circle matters, it means this drawn
/// radius, [`Circle::effective_radius`], not the intrinsic [`Circle::radius`].
///
/// A pointer-down is only consumed when it lands inside the disk; the corners
/// of the bounding square let events through to whatever is underneath. A
/// consumed tap grows or shrinks the radius by [`Circle::RADIUS_STEP`], never
/// going below [`Circle::MIN_RADIUS`].
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    radius: f64,
    color: Color,
}

impl Circle {
    /// Radius change applied by a tap.
    pub const RADIUS_STEP: f64 = 10.0;
    /// Smallest radius a tap can shrink the circle to.
    pub const MIN_RADIUS: f64 = 10.0;

    /// A [`Color::RED`] circle. Negative radii are clamped to zero.
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            color: Color::RED,
        }
    }

    /// Replace the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Intrinsic radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Radius actually drawn inside a box of `size`.
    pub fn effective_radius(&self, size: Size) -> f64 {
        self.radius.min(size.width / 2.0).min(size.height / 2.0)
    }

    /// Whether the local point `pt` lies on the disk drawn inside a box of `size`.
    pub fn contains_local(&self, pt: Point, size: Size) -> bool {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let r = self.effective_radius(size);
        (pt - center).hypot2() <= r * r
    }
}

impl Node for Circle {
    fn compute_size(&self, _cx: &LayoutCx<'_>, min: Size, max: Size) -> Size {
        let diameter = self.radius * 2.0;
        clamp_size(Size::new(diameter, diameter), min, max)
    }

    fn paint(&self, surface: &mut dyn Surface, size: Size) {
        let center = Point::new(size.width / 2.0, size.height / 2.0);
        surface.fill_circle(
            kurbo::Circle::new(center, self.effective_radius(size)),
            self.color,
        );
    }

    fn handle_pointer_event(
        &mut self,
        cx: &mut EventCx<'_>,
        local: Point,
        size: Size,
        event: &PointerEvent,
    ) -> bool {
        if !event.is_down() || !self.contains_local(local, size) {
            return false;
        }
        let old = self.radius;
        self.radius = if cx.random_bool() {
            self.radius + Self::RADIUS_STEP
        } else {
            (self.radius - Self::RADIUS_STEP).max(Self::MIN_RADIUS)
        };
        log::trace!("circle radius {old} -> {}", self.radius);
        true
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Size};
    use trellis_paint::{DrawOp, MonospaceMeasure, Recording};

    use super::Circle;
    use crate::{EventCx, FixedClock, LayoutCx, Node, PointerEvent, SequenceEntropy};

    fn tap(circle: &mut Circle, entropy: u32, local: Point) -> bool {
        let mut entropy = SequenceEntropy::new([entropy]);
        let clock = FixedClock::new(Duration::ZERO);
        let mut cx = EventCx::new(&mut entropy, &clock);
        let size = Size::new(circle.radius() * 2.0, circle.radius() * 2.0);
        circle.handle_pointer_event(&mut cx, local, size, &PointerEvent::down(local))
    }

    #[test]
    fn size_is_bounding_square() {
        let measure = MonospaceMeasure::default();
        let cx = LayoutCx::new(&measure);
        let c = Circle::new(50.0);
        assert_eq!(
            c.compute_size(&cx, Size::ZERO, Size::new(300.0, 1000.0)),
            Size::new(100.0, 100.0)
        );
        assert_eq!(
            c.compute_size(&cx, Size::ZERO, Size::new(60.0, 1000.0)),
            Size::new(60.0, 100.0)
        );
    }

    #[test]
    fn center_tap_grows_or_shrinks() {
        let mut grow = Circle::new(50.0);
        assert!(tap(&mut grow, 1, Point::new(50.0, 50.0)));
        assert_eq!(grow.radius(), 60.0);

        let mut shrink = Circle::new(50.0);
        assert!(tap(&mut shrink, 0, Point::new(50.0, 50.0)));
        assert_eq!(shrink.radius(), 40.0);
    }

    #[test]
    fn shrink_stops_at_floor() {
        let mut c = Circle::new(15.0);
        assert!(tap(&mut c, 0, Point::new(15.0, 15.0)));
        assert_eq!(c.radius(), Circle::MIN_RADIUS);
        assert!(tap(&mut c, 0, Point::new(10.0, 10.0)));
        assert_eq!(c.radius(), Circle::MIN_RADIUS);
    }

    #[test]
    fn corner_of_bounding_square_is_not_consumed() {
        let mut c = Circle::new(50.0);
        // Inside the 100x100 square, ~70.7 from the center.
        assert!(!tap(&mut c, 1, Point::new(1.0, 1.0)));
        assert_eq!(c.radius(), 50.0, "a miss must not mutate the circle");
    }

    #[test]
    fn clamped_box_shrinks_drawn_disk() {
        let c = Circle::new(50.0);
        let size = Size::new(60.0, 100.0);
        assert_eq!(c.effective_radius(size), 30.0);
        assert!(!c.contains_local(Point::new(30.0, 15.0), size));
        assert!(c.contains_local(Point::new(30.0, 50.0), size));

        let mut rec = Recording::new();
        c.paint(&mut rec, size);
        let DrawOp::FillCircle { circle, .. } = &rec.commands()[0].op else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, Point::new(30.0, 50.0));
        assert_eq!(circle.radius, 30.0);
    }
}
