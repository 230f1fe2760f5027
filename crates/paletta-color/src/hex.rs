// SPDX-License-Identifier: MIT
//
// HEX strings — paletta's interchange format.
//
// Input is forgiving about case and the leading '#', and strict about
// everything else: exactly six hex digits, no shorthand, no alpha, no
// surrounding whitespace. Output is always canonical "#RRGGBB", uppercase.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::color::{Hsl, Rgb, hsl_to_rgb};

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// A color in `#RRGGBB` form.
///
/// Stored as its [`Rgb`] channels, so two spellings of the same color
/// (`#ff0000`, `FF0000`) compare equal once parsed.
///
/// ```
/// use paletta_color::Hex;
///
/// let red: Hex = "ff0000".parse().unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hex(Rgb);

impl Hex {
    pub const BLACK: Self = Self(Rgb::new(0, 0, 0));
    pub const WHITE: Self = Self(Rgb::new(255, 255, 255));

    #[inline]
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self(rgb)
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    #[inline]
    #[must_use]
    pub const fn from_u24(value: u32) -> Self {
        Self(Rgb::from_u24(value))
    }

    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        self.0.to_hsl()
    }
}

impl From<Rgb> for Hex {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<Hex> for Rgb {
    fn from(hex: Hex) -> Self {
        hex.0
    }
}

impl From<Hsl> for Hex {
    fn from(hsl: Hsl) -> Self {
        Self(hsl.to_rgb())
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex({self})")
    }
}

impl FromStr for Hex {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Why a string is not a `#RRGGBB` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHexError {
    /// Not exactly six characters after the optional `#`.
    #[error("expected 6 hex digits, found {0} characters")]
    Length(usize),

    /// A character that is not `0-9`, `a-f` or `A-F`.
    #[error("invalid hex digit {ch:?} at position {index}")]
    Digit { ch: char, index: usize },
}

fn parse_hex(s: &str) -> Result<Rgb, ParseHexError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    // Byte length first: any non-ASCII char then fails as a digit below.
    if digits.len() != 6 {
        return Err(ParseHexError::Length(digits.chars().count()));
    }

    let mut value = 0u32;
    for (index, ch) in digits.chars().enumerate() {
        let digit = ch.to_digit(16).ok_or(ParseHexError::Digit { ch, index })?;
        value = value << 4 | digit;
    }
    Ok(Rgb::from_u24(value))
}

// ─── String-facing conversions ───────────────────────────────────────────────
//
// The fail-soft surface used by palette generation and the views. Invalid
// input is `None`, never an error or a panic; parse with `str::parse::<Hex>`
// when the reason matters.

/// Parse `#RRGGBB` (or `RRGGBB`, either case) into its channels.
///
/// Returns `None` for anything else.
#[must_use]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse::<Hex>().ok().map(Hex::rgb)
}

/// Encode channels as canonical `#RRGGBB`.
#[must_use]
pub const fn rgb_to_hex(r: u8, g: u8, b: u8) -> Hex {
    Hex(Rgb::new(r, g, b))
}

/// Parse a HEX string and convert it to integer HSL.
///
/// Returns `None` when the input is not a color.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(Rgb::to_hsl)
}

/// Convert HSL (degrees, percent, percent) to `#RRGGBB`.
///
/// The hue must already be in `0..360`: values outside the wheel are **not**
/// wrapped and produce a gray. See [`hsl_to_rgb`].
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> Hex {
    Hex(hsl_to_rgb(h, s, l))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
