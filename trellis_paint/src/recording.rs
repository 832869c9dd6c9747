// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] that records a flat display list.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Affine, Circle, Point, Rect, Shape, Vec2};
use smallvec::SmallVec;

use crate::{Color, Surface, TextStyle};

/// A single primitive, in the coordinate space that was current when it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled rectangle.
    FillRect {
        /// Local rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A filled disk.
    FillCircle {
        /// Local circle.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// A run of text.
    Text {
        /// Local top-left corner of the text box.
        origin: Point,
        /// The text content.
        text: String,
        /// Font size and color.
        style: TextStyle,
        /// Wrapping width.
        max_width: f64,
    },
}

/// A recorded [`DrawOp`] together with the transform it was issued under.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCommand {
    /// Local-to-surface transform at the time of the call.
    pub transform: Affine,
    /// The primitive itself.
    pub op: DrawOp,
}

impl DrawCommand {
    /// Axis-aligned bounds of the primitive in surface space.
    ///
    /// Text carries no measured extent, so its bounds collapse to the
    /// transformed origin.
    pub fn world_bounds(&self) -> Rect {
        let local = match &self.op {
            DrawOp::FillRect { rect, .. } => *rect,
            DrawOp::FillCircle { circle, .. } => circle.bounding_box(),
            DrawOp::Text { origin, .. } => Rect::from_points(*origin, *origin),
        };
        self.transform.transform_rect_bbox(local)
    }

    /// Translation component of [`DrawCommand::transform`].
    pub fn offset(&self) -> Vec2 {
        self.transform.translation()
    }
}

/// A [`Surface`] that appends every primitive to a display list.
///
/// Used by tests and headless frame drivers to observe exactly what a scene
/// painted and where.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    transform: Affine,
    saved: SmallVec<[Affine; 4]>,
    commands: Vec<DrawCommand>,
}

impl Recording {
    /// Create an empty recording with an identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in issue order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the list empty.
    ///
    /// The transform and save stack are left as they are.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Number of outstanding [`Surface::save`] calls.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Drop all commands and reset the transform and save stack.
    pub fn clear(&mut self) {
        self.transform = Affine::IDENTITY;
        self.saved.clear();
        self.commands.clear();
    }

    fn push(&mut self, op: DrawOp) {
        self.commands.push(DrawCommand {
            transform: self.transform,
            op,
        });
    }
}

impl Surface for Recording {
    fn save(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine::translate(offset);
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawOp::FillRect { rect, color });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.push(DrawOp::FillCircle { circle, color });
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle, max_width: f64) {
        self.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            style: *style,
            max_width,
        });
    }
}
