use rand::RngExt;
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color with every channel drawn uniformly from 0..=255.
    pub fn random_opaque<R: RngExt + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    /// Packs the color as `0xAARRGGBB`.
    pub const fn to_packed(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    pub const fn from_packed(packed: u32) -> Self {
        Self {
            a: (packed >> 24) as u8,
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Alpha-weighted average of two colors.
    ///
    /// Each color contributes in proportion to its alpha; the result takes
    /// the larger of the two alphas. When both colors are fully transparent
    /// the channels are averaged evenly and the result stays transparent.
    pub fn blend(self, other: Color) -> Color {
        let total_alpha = self.a as f32 + other.a as f32;
        let (w0, w1) = if total_alpha == 0.0 {
            (0.5, 0.5)
        } else {
            (self.a as f32 / total_alpha, other.a as f32 / total_alpha)
        };

        let mix = |c0: u8, c1: u8| -> u8 {
            (w0 * c0 as f32 + w1 * c1 as f32).round().clamp(0.0, 255.0) as u8
        };

        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a.max(other.a),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
