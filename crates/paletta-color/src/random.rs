// SPDX-License-Identifier: MIT
//
// Random colors.
//
// The generator is a parameter so tests (and anything wanting a
// reproducible palette) can pass a seeded `StdRng`. `random_color` is the
// convenience form over the thread-local generator.

use rand::Rng;

use crate::hex::Hex;

/// Largest packed `0xRRGGBB` value.
const MAX_U24: u32 = 0x00FF_FFFF;

/// Draw a uniformly random color from `rng`.
#[must_use]
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Hex {
    Hex::from_u24(rng.gen_range(0..=MAX_U24))
}

/// Draw a uniformly random color from the thread-local generator.
#[must_use]
pub fn random_color() -> Hex {
    random_color_with(&mut rand::thread_rng())
}
