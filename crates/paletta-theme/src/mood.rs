//! Named mood presets — palettes without a base color.
//!
//! Each mood is a fixed HSL seed. Entry `i` of a mood palette walks the
//! hue forward 20 degrees per step and swings lightness outward in pairs:
//! `+0, -0, +15, -15, +30, -30, ...`, clamped to 20–80. Saturation stays
//! at the preset's value.

use paletta_color::{Hex, Hsl, hsl_to_hex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::harmony::capped;

const LIGHTNESS_MIN: i64 = 20;
const LIGHTNESS_MAX: i64 = 80;

/// A qualitative palette seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Soft blues.
    #[default]
    Calm,
    /// Saturated reds and oranges.
    Energetic,
    /// Muted dark blues.
    Professional,
    /// Greens.
    Nature,
    /// Oranges and yellows.
    Warm,
    /// Cyans and teals.
    Cool,
}

impl Mood {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Professional => "professional",
            Self::Nature => "nature",
            Self::Warm => "warm",
            Self::Cool => "cool",
        }
    }

    /// Look up a mood by exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|m| m.name() == name).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Calm,
            Self::Energetic,
            Self::Professional,
            Self::Nature,
            Self::Warm,
            Self::Cool,
        ]
    }

    /// The HSL seed for this mood.
    #[must_use]
    pub const fn preset(self) -> Hsl {
        match self {
            Self::Calm => Hsl::new(200, 40, 60),
            Self::Energetic => Hsl::new(0, 80, 50),
            Self::Professional => Hsl::new(220, 30, 45),
            Self::Nature => Hsl::new(120, 50, 50),
            Self::Warm => Hsl::new(30, 70, 55),
            Self::Cool => Hsl::new(180, 50, 55),
        }
    }

    /// Build a palette of `count` colors from this mood's seed, at most
    /// [`MAX_COUNT`](crate::MAX_COUNT).
    #[must_use]
    pub fn palette(self, count: usize) -> Vec<Hex> {
        let seed = self.preset();
        (0..capped(count) as u64).map(|i| entry(seed, i)).collect()
    }
}

fn entry(seed: Hsl, i: u64) -> Hex {
    let hue = (u64::from(seed.h) + (20 * i) % 360) % 360;
    let swing = if i % 2 == 0 { 15 } else { -15 };
    let lightness = i64::from(seed.l)
        .saturating_add(swing * (i / 2) as i64)
        .clamp(LIGHTNESS_MIN, LIGHTNESS_MAX);
    hsl_to_hex(hue as f64, f64::from(seed.s), lightness as f64)
}

/// Generate a palette from a mood name.
///
/// Unknown names fall back to [`Mood::Calm`]; this never fails.
#[must_use]
pub fn generate_mood_palette(mood: &str, count: usize) -> Vec<Hex> {
    let resolved = Mood::from_name(mood).unwrap_or_else(|| {
        debug!(mood, "unknown mood, using calm");
        Mood::Calm
    });
    resolved.palette(count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
