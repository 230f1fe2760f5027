// SPDX-License-Identifier: MIT
//
// paletta-color — color values for the paletta palette generator.
//
// Three representations of one sRGB color, and the conversions between
// them:
//
//   Hex ("#RRGGBB")  ↔  Rgb (8-bit channels)  ↔  Hsl (integer degrees/percent)
//
// Hex is the interchange format. Everything a view shows, stores, or
// passes to another function is a Hex. Rgb and Hsl are working forms for
// the math in paletta-theme.
//
// Bad input never panics. The string-facing functions return `Option`
// ("not a color") and the typed constructors make out-of-range channels
// unrepresentable.

pub mod color;
pub mod hex;
pub mod random;

pub use color::{Hsl, Rgb};
pub use hex::{Hex, ParseHexError, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
pub use random::{random_color, random_color_with};
