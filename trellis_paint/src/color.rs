// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An 8-bit sRGB color with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);
    /// Material blue, the default fill for rectangles.
    pub const BLUE: Self = Self::from_rgb_hex(0x21_96_F3);
    /// Material red, the default fill for circles.
    pub const RED: Self = Self::from_rgb_hex(0xF4_43_36);

    /// An opaque color from its channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color from its channels and alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color from a `0xRRGGBB` value. The top byte is ignored.
    pub const fn from_rgb_hex(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::rgb8(r, g, b)
    }

    /// Returns the same color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns `true` if the alpha channel is `255`.
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_ignores_top_byte() {
        assert_eq!(Color::from_rgb_hex(0xFF_12_34_56), Color::rgb8(0x12, 0x34, 0x56));
        assert!(Color::from_rgb_hex(0x00_00_00).is_opaque());
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::RED.with_alpha(10);
        assert_eq!((c.r, c.g, c.b), (0xF4, 0x43, 0x36));
        assert!(!c.is_opaque(), "alpha was lowered");
    }
}
