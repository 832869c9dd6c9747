// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use core::time::Duration;

use kurbo::{Point, Size};
use trellis_paint::{Color, Surface, TextStyle};

use crate::{EventCx, LayoutCx, Node, PointerEvent, clamp_size};

/// A run of text.
///
/// Sized by the [`TextMeasure`](trellis_paint::TextMeasure) behind the
/// [`LayoutCx`], wrapped at the maximum width of the constraints. A pointer-down
/// replaces the text with the time of the tap, so consecutive taps read
/// differently.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    text: String,
    font_size: f64,
    color: Color,
}

impl Text {
    /// Black text at `font_size` logical pixels.
    pub fn new(text: impl Into<String>, font_size: f64) -> Self {
        Self {
            text: text.into(),
            font_size: font_size.max(0.0),
            color: Color::BLACK,
        }
    }

    /// Replace the fill color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// The displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Font size in logical pixels.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    fn style(&self) -> TextStyle {
        TextStyle::new(self.font_size).with_color(self.color)
    }
}

/// `HH:MM:SS.mmm` of the UTC day containing `since_epoch`.
fn format_time_of_day(since_epoch: Duration) -> String {
    let secs = since_epoch.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60,
        since_epoch.subsec_millis()
    )
}

impl Node for Text {
    fn compute_size(&self, cx: &LayoutCx<'_>, min: Size, max: Size) -> Size {
        let measured = cx.measure_text(&self.text, self.font_size, max.width);
        clamp_size(measured, min, max)
    }

    fn paint(&self, surface: &mut dyn Surface, size: Size) {
        surface.draw_text(Point::ORIGIN, &self.text, &self.style(), size.width);
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
        self.text = format!("Tapped at {}", format_time_of_day(cx.now()));
        log::trace!("text replaced with {:?}", self.text);
        true
    }
}
