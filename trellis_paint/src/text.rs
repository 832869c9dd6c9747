// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text styling and the measurement contract used during sizing.

use kurbo::Size;

use crate::Color;

/// Font size and fill color of a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in logical pixels.
    pub font_size: f64,
    /// Fill color.
    pub color: Color,
}

impl TextStyle {
    /// A style with the given font size and black fill.
    pub const fn new(font_size: f64) -> Self {
        Self {
            font_size,
            color: Color::BLACK,
        }
    }

    /// Replace the fill color.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Measures the box a run of text occupies once shaped and wrapped.
///
/// Shaping and line breaking are entirely up to the implementation. The only
/// contract is that the returned width should not exceed `max_width` unless a
/// single unbreakable cluster is wider than it. `max_width` may be infinite.
pub trait TextMeasure {
    /// Intrinsic size of `text` at `font_size`, wrapped at `max_width`.
    fn measure(&self, text: &str, font_size: f64, max_width: f64) -> Size;
}

/// Fixed-advance text measurement.
///
/// Every character advances by `advance_ratio * font_size` and every line is
/// `line_height_ratio * font_size` tall. Lines wrap greedily on character
/// count at `max_width` (at least one character per line) and `\n` always
/// starts a new line. Deterministic, which makes it suitable for tests and
/// headless drivers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Horizontal advance per character, as a fraction of the font size.
    pub advance_ratio: f64,
    /// Line height, as a fraction of the font size.
    pub line_height_ratio: f64,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str, font_size: f64, max_width: f64) -> Size {
        let advance = (font_size * self.advance_ratio).max(0.0);
        let line_height = (font_size * self.line_height_ratio).max(0.0);

        let columns = if advance > 0.0 && max_width.is_finite() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Column count is floored and clamped to at least one."
            )]
            let fit = (max_width.max(0.0) / advance) as usize;
            fit.max(1)
        } else {
            usize::MAX
        };

        let mut rows = 0_usize;
        let mut widest = 0_usize;
        for line in text.split('\n') {
            let chars = line.chars().count();
            rows += chars.div_ceil(columns).max(1);
            widest = widest.max(chars.min(columns));
        }

        Size::new(widest as f64 * advance, rows as f64 * line_height)
    }
}
