// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input as delivered by the platform.

use kurbo::Point;

/// Which transition a pointer sample reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// A button was pressed or a touch began.
    Down,
    /// The pointer moved.
    Move,
    /// A button was released or a touch ended.
    Up,
}

/// A single pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position in physical pixels, relative to the top-left of the view.
    pub position: Point,
    /// The transition this sample reports.
    pub kind: PointerEventKind,
}

impl PointerEvent {
    /// A sample of `kind` at the physical `position`.
    pub const fn new(position: Point, kind: PointerEventKind) -> Self {
        Self { position, kind }
    }

    /// A [`PointerEventKind::Down`] sample.
    pub const fn down(position: Point) -> Self {
        Self::new(position, PointerEventKind::Down)
    }

    /// A [`PointerEventKind::Move`] sample.
    pub const fn moved(position: Point) -> Self {
        Self::new(position, PointerEventKind::Move)
    }

    /// A [`PointerEventKind::Up`] sample.
    pub const fn up(position: Point) -> Self {
        Self::new(position, PointerEventKind::Up)
    }

    /// Returns `true` for [`PointerEventKind::Down`].
    pub fn is_down(&self) -> bool {
        self.kind == PointerEventKind::Down
    }

    /// Position in logical pixels for a display with `device_pixel_ratio`.
    ///
    /// Ratios that are not finite and positive are treated as `1.0`.
    pub fn logical_position(&self, device_pixel_ratio: f64) -> Point {
        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Point::new(self.position.x / ratio, self.position.y / ratio)
    }
}
