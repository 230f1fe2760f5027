//! # paletta-theme — palette engine
//!
//! Turns one seed into an ordered palette, and scores color pairs for
//! readability.
//!
//! # Architecture
//!
//! ```text
//! base "#RRGGBB" + HarmonyKind          mood name
//!     │                                     │
//!     ▼                                     ▼
//! harmony.rs: hue/lightness rules       mood.rs: preset HSL seed
//!     │                                     │
//!     └──────────────► Vec<Hex> ◄───────────┘
//!                         │
//!                         ▼
//!            contrast.rs: WCAG luminance and ratio
//! ```
//!
//! # Color Space
//!
//! Generation happens in integer HSL (degrees, percent, percent), the same
//! space the palette is edited in. Every palette entry is re-encoded as
//! `#RRGGBB` before it leaves this crate.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Palette indices become hue and lightness offsets.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod harmony;
pub mod mood;

pub use contrast::{WcagReport, check_wcag, contrast_ratio, luminance, text_color_for};
pub use harmony::{
    DEFAULT_COUNT, HarmonyKind, MAX_COUNT, generate_harmonious_palette,
    generate_harmonious_palette_with,
};
pub use mood::{Mood, generate_mood_palette};
