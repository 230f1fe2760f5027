//! Harmonious palettes — fixed geometric rules around a base color.
//!
//! Each kind derives entry `i` (for `i >= 1`) from the base color's HSL.
//! Entry 0 is always the base color itself.
//!
//! | Kind            | Entry `i`                                              |
//! |-----------------|--------------------------------------------------------|
//! | `analogous`     | hue + 30·i                                             |
//! | `monochromatic` | lightness ± 15·i (sign by parity), clamped to 10–90    |
//! | `triad`         | hue + 120·i, lightness ± 10 by parity, clamped 10–90   |
//! | `complementary` | i = 1: hue + 180; otherwise hue + 60·i                 |
//! | `random`        | an unrelated random color                              |
//!
//! Hue offsets wrap modulo 360. Saturation is never changed.

use paletta_color::{Hex, Hsl, hsl_to_hex, random_color_with};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Palette length when the caller has no preference.
pub const DEFAULT_COUNT: usize = 5;

/// Longest palette any generator returns; larger counts are capped.
pub const MAX_COUNT: usize = 256;

/// Lightness bounds for the monochromatic and triad rules.
const LIGHTNESS_MIN: i64 = 10;
const LIGHTNESS_MAX: i64 = 90;

/// The rule used to derive a palette from its base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Neighbouring hues, 30 degrees apart.
    #[default]
    Analogous,
    /// One hue at alternating lighter and darker steps.
    Monochromatic,
    /// Hues 120 degrees apart with a small lightness swing.
    Triad,
    /// The opposite hue, then 60-degree steps.
    Complementary,
    /// Independent random colors after the base.
    Random,
}

impl HarmonyKind {
    /// The name used on the command line and in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triad => "triad",
            Self::Complementary => "complementary",
            Self::Random => "random",
        }
    }

    /// Look up a kind by exact name. Unknown names are `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|k| k.name() == name).copied()
    }

    /// All kinds, in menu order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Monochromatic,
            Self::Triad,
            Self::Complementary,
            Self::Random,
        ]
    }

    /// Build a palette of `count` colors starting with `base`.
    ///
    /// `count == 0` gives an empty palette and `count == 1` gives `[base]`.
    /// Counts above [`MAX_COUNT`] are capped.
    /// `rng` is only drawn from by [`HarmonyKind::Random`].
    #[must_use]
    pub fn palette_with<R: Rng + ?Sized>(self, rng: &mut R, base: Hex, count: usize) -> Vec<Hex> {
        let count = capped(count);
        let hsl = base.to_hsl();
        let mut colors = vec![base];
        colors.extend((1..count).map(|i| self.entry(rng, hsl, i as u64)));
        colors.truncate(count);
        colors
    }

    /// [`palette_with`](Self::palette_with) over the thread-local generator.
    #[must_use]
    pub fn palette(self, base: Hex, count: usize) -> Vec<Hex> {
        self.palette_with(&mut rand::thread_rng(), base, count)
    }

    fn entry<R: Rng + ?Sized>(self, rng: &mut R, base: Hsl, i: u64) -> Hex {
        let s = f64::from(base.s);
        let l = f64::from(base.l);
        match self {
            Self::Analogous => hsl_to_hex(rotate(base.h, 30 * i), s, l),
            Self::Monochromatic => {
                let shift = parity_step(i, 15).saturating_mul(i as i64);
                let l = clamp_lightness(base.l, shift, LIGHTNESS_MIN, LIGHTNESS_MAX);
                // Hue is used as-is: a base hue of 360 stays unwrapped.
                hsl_to_hex(f64::from(base.h), s, l)
            }
            Self::Triad => {
                let l = clamp_lightness(base.l, parity_step(i, 10), LIGHTNESS_MIN, LIGHTNESS_MAX);
                hsl_to_hex(rotate(base.h, 120 * i), s, l)
            }
            Self::Complementary => {
                let degrees = if i == 1 { 180 } else { 60 * i };
                hsl_to_hex(rotate(base.h, degrees), s, l)
            }
            Self::Random => random_color_with(rng),
        }
    }
}

/// Generate a harmonious palette from a HEX base color and a kind name.
///
/// - An invalid `base` gives an empty palette.
/// - An unknown `kind` gives `[base]` (no other kind is substituted).
///
/// ```
/// use paletta_theme::generate_harmonious_palette;
///
/// let palette = generate_harmonious_palette("#FF0000", 3, "complementary");
/// assert_eq!(palette[0].to_string(), "#FF0000");
/// assert_eq!(palette[1].to_string(), "#00FFFF");
/// ```
#[must_use]
pub fn generate_harmonious_palette(base: &str, count: usize, kind: &str) -> Vec<Hex> {
    generate_harmonious_palette_with(&mut rand::thread_rng(), base, count, kind)
}

/// [`generate_harmonious_palette`] with an explicit random generator.
#[must_use]
pub fn generate_harmonious_palette_with<R: Rng + ?Sized>(
    rng: &mut R,
    base: &str,
    count: usize,
    kind: &str,
) -> Vec<Hex> {
    let Ok(base) = base.parse::<Hex>() else {
        debug!(base, "base is not a color, palette is empty");
        return Vec::new();
    };

    if let Some(harmony) = HarmonyKind::from_name(kind) {
        harmony.palette_with(rng, base, count)
    } else {
        debug!(kind, "unknown harmony kind, palette holds only the base");
        let mut colors = vec![base];
        colors.truncate(count);
        colors
    }
}

/// Clamp a requested palette length to [`MAX_COUNT`].
pub(crate) fn capped(count: usize) -> usize {
    if count > MAX_COUNT {
        debug!(count, max = MAX_COUNT, "palette length capped");
    }
    count.min(MAX_COUNT)
}

/// Rotate a hue by `degrees`, wrapping at 360.
#[inline]
fn rotate(h: u16, degrees: u64) -> f64 {
    ((u64::from(h) + degrees % 360) % 360) as f64
}

/// `+step` for even `i`, `-step` for odd `i`.
#[inline]
const fn parity_step(i: u64, step: i64) -> i64 {
    if i % 2 == 0 { step } else { -step }
}

#[inline]
fn clamp_lightness(l: u8, shift: i64, min: i64, max: i64) -> f64 {
    i64::from(l).saturating_add(shift).clamp(min, max) as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
