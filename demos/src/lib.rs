// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless frame driver for Trellis scenes.
//!
//! [`FrameDriver`] plays the part a windowing backend would: it owns a
//! [`StackLayout`], hands it the viewport as constraint bounds every frame,
//! forwards pointer samples, and paints into a [`Recording`] so the output of
//! each frame can be inspected or logged.
//!
//! Run the demo:
//! - `cargo run -p trellis_demos --example headless_frames`

use kurbo::Size;
use trellis_node::PointerEvent;
use trellis_paint::{DrawCommand, Recording};
use trellis_stack::{Damage, StackLayout};

/// What one call to [`FrameDriver::frame`] produced.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Zero-based frame number.
    pub index: u64,
    /// Regions that changed since the previous frame.
    pub damage: Damage,
    /// Everything painted this frame, in paint order.
    pub commands: Vec<DrawCommand>,
}

/// Drives a [`StackLayout`] one frame at a time without a window.
#[derive(Debug)]
pub struct FrameDriver {
    stack: StackLayout,
    viewport: Size,
    surface: Recording,
    frames: u64,
}

impl FrameDriver {
    /// Wrap `stack`, constraining it to `viewport` from the first frame on.
    pub fn new(stack: StackLayout, viewport: Size) -> Self {
        Self {
            stack,
            viewport,
            surface: Recording::new(),
            frames: 0,
        }
    }

    /// The driven stack.
    pub fn stack(&self) -> &StackLayout {
        &self.stack
    }

    /// Mutable access to the driven stack, e.g. to add or remove nodes.
    pub fn stack_mut(&mut self) -> &mut StackLayout {
        &mut self.stack
    }

    /// Current viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Resize the viewport. Takes effect on the next frame.
    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Number of frames produced so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Forward a pointer sample; returns whether a node consumed it.
    pub fn pointer(&mut self, event: PointerEvent) -> bool {
        let consumed = self.stack.handle_pointer_event(&event);
        log::debug!(
            "pointer {:?} at ({:.1}, {:.1}) consumed={consumed}",
            event.kind,
            event.position.x,
            event.position.y
        );
        consumed
    }

    /// Produce one frame: apply the viewport, collect damage, and paint.
    pub fn frame(&mut self) -> Frame {
        self.stack.set_constraints(Size::ZERO, self.viewport);
        let damage = self.stack.take_damage();
        self.surface.clear();
        self.stack.draw(&mut self.surface);
        let frame = Frame {
            index: self.frames,
            damage,
            commands: self.surface.take_commands(),
        };
        self.frames += 1;
        log::trace!(
            "frame {} painted {} commands, {} dirty rects",
            frame.index,
            frame.commands.len(),
            frame.damage.dirty_rects.len()
        );
        frame
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};
    use trellis_node::{Circle, PointerEvent, Rectangle};
    use trellis_paint::DrawOp;
    use trellis_stack::{Services, StackLayout, StackParams};

    use super::FrameDriver;

    fn driver() -> FrameDriver {
        let params = StackParams::default().with_spacing(10.0);
        let mut stack = StackLayout::new(params, Services::headless());
        stack.add(Rectangle::new(200.0, 100.0));
        stack.add(Circle::new(50.0));
        FrameDriver::new(stack, Size::new(300.0, 1000.0))
    }

    #[test]
    fn first_frame_paints_every_node() {
        let mut driver = driver();
        let frame = driver.frame();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.commands.len(), 2);
        assert!(!frame.damage.is_empty());
        assert!(matches!(frame.commands[0].op, DrawOp::FillRect { .. }));
        assert!(matches!(frame.commands[1].op, DrawOp::FillCircle { .. }));
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn quiet_frames_report_no_damage() {
        let mut driver = driver();
        driver.frame();
        let frame = driver.frame();
        assert!(frame.damage.is_empty());
        assert_eq!(frame.commands.len(), 2);
    }

    #[test]
    fn shrinking_viewport_clamps_nodes() {
        let mut driver = driver();
        driver.frame();
        driver.resize(Size::new(80.0, 1000.0));
        let frame = driver.frame();
        assert!(!frame.damage.is_empty());
        assert_eq!(
            frame.commands[0].world_bounds(),
            Rect::new(0.0, 0.0, 80.0, 100.0)
        );
    }

    #[test]
    fn consumed_tap_damages_the_next_frame() {
        let mut driver = driver();
        driver.frame();
        assert!(driver.pointer(PointerEvent::down(Point::new(50.0, 160.0))));
        assert!(!driver.frame().damage.is_empty());

        assert!(!driver.pointer(PointerEvent::down(Point::new(290.0, 50.0))));
        assert!(driver.frame().damage.is_empty());
    }
}
