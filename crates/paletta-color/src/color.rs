// SPDX-License-Identifier: MIT
//
// paletta color math — 8-bit RGB and integer HSL.
//
// Single-character variable names (r, g, b, h, s, l, c, x, m, d) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// HSL here is the CSS flavour: hue in degrees, saturation and lightness in
// percent, all rounded to integers. That rounding is what makes the
// HEX → HSL → HEX trip lossy by up to five steps per 8-bit channel (and a
// hue that rounds to 360 comes back gray).

use serde::{Deserialize, Serialize};

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn to_u24(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Convert to integer HSL.
    ///
    /// Lightness is `(max + min) / 2` over the normalized channels. Equal
    /// channels are achromatic (`h = 0`, `s = 0`). Otherwise hue comes from
    /// whichever channel is largest, checked red, then green, then blue.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        // Branch on the 8-bit channels so the comparisons are exact.
        let max8 = self.r.max(self.g).max(self.b);
        let min8 = self.r.min(self.g).min(self.b);
        let max = f64::from(max8) / 255.0;
        let min = f64::from(min8) / 255.0;
        let l = (max + min) / 2.0;

        if max8 == min8 {
            return Hsl {
                h: 0,
                s: 0,
                l: round_to_u8(l * 100.0),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max8 == self.r {
            ((g - b) / d + if self.g < self.b { 6.0 } else { 0.0 }) / 6.0
        } else if max8 == self.g {
            ((b - r) / d + 2.0) / 6.0
        } else {
            ((r - g) / d + 4.0) / 6.0
        };

        Hsl {
            h: round_to_u16(h * 360.0),
            s: round_to_u8(s * 100.0),
            l: round_to_u8(l * 100.0),
        }
    }
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// A color as hue (degrees), saturation (percent) and lightness (percent).
///
/// Produced by [`Rgb::to_hsl`], so `h` is normally in `0..360`. Rounding
/// can land a hue just below 360 on exactly 360 (e.g. `#FF0001`); the value
/// is kept as computed rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert back to 8-bit RGB. See [`hsl_to_rgb`] for the hue caveat.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }
}

// ─── Conversion ──────────────────────────────────────────────────────────────

/// Convert HSL (degrees, percent, percent) to 8-bit RGB.
///
/// Standard chroma construction: `c = (1 - |2l - 1|) * s`,
/// `x = c * (1 - |(h / 60) mod 2 - 1|)`, `m = l - c / 2`, with the sextant
/// of `h` deciding where `c` and `x` go.
///
/// **Hue is not normalized.** Only `0 <= h < 360` selects a sextant. Any
/// other hue (negative, 360 and above, NaN) leaves the chroma terms at zero
/// and produces the gray `(m, m, m)`. Callers wrap hues themselves.
///
/// Saturation and lightness are not range-checked either; each final
/// channel is clamped into `0..=255`.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - 2.0f64.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&h) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&h) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&h) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&h) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&h) {
        (x, 0.0, c)
    } else if (300.0..360.0).contains(&h) {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Scale a 0.0–1.0 value to a rounded 8-bit channel.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u16(v: f64) -> u16 {
    v.round().clamp(0.0, f64::from(u16::MAX)) as u16
}

// ─── Tests ───────────────────────────────────────────────────────────────────
