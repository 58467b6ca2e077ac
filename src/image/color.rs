//! 16-bit RGBA colors with alpha-blind comparison.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 16 bits per channel.
///
/// Derived equality compares all four channels. Matching uses [`Color::same_rgb`],
/// which ignores alpha: compositing and antialiasing can change alpha without
/// changing how the pixel looks.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
    pub a: u16,
}

impl Color {
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    pub const WHITE: Color = Color::opaque(u16::MAX, u16::MAX, u16::MAX);

    /// Creates a color from 16-bit channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from 16-bit channels.
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }

    /// Widens 8-bit channels to 16 bits (`v * 257`, so 0xff maps to 0xffff).
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(widen(r), widen(g), widen(b), widen(a))
    }

    /// Returns true when red, green and blue are equal, whatever the alpha.
    #[inline]
    pub fn same_rgb(&self, other: &Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

const fn widen(v: u8) -> u16 {
    (v as u16) * 257
}
