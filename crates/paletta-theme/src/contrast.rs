//! WCAG contrast scoring for palette colors.
//!
//! Thresholds (WCAG 2.x):
//!
//! - AA: normal text >= 4.5:1, large text >= 3:1
//! - AAA: normal text >= 7:1, large text >= 4.5:1
//!
//! AA normal and AAA large share 4.5 by definition, so those two flags in a
//! [`WcagReport`] are always equal.
//!
//! Luminance uses the 0.03928 linearization threshold from the WCAG 2.0
//! text (sRGB itself specifies 0.04045; no 8-bit channel falls between).

use paletta_color::{Hex, Rgb, hex_to_rgb};
use serde::{Deserialize, Serialize};

pub const AA_NORMAL: f64 = 4.5;
pub const AA_LARGE: f64 = 3.0;
pub const AAA_NORMAL: f64 = 7.0;
pub const AAA_LARGE: f64 = 4.5;

/// Compute the relative luminance of an 8-bit color per WCAG.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(color.r);
    let g = linearize(color.g);
    let b = linearize(color.b);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Relative luminance of a HEX color. Not-a-color input scores 0 (black).
#[must_use]
pub fn luminance(hex: &str) -> f64 {
    hex_to_rgb(hex).map_or(0.0, relative_luminance)
}

/// WCAG contrast ratio between two HEX colors, in [1.0, 21.0].
///
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Symmetric in its arguments. Invalid input is scored as black (see
/// [`luminance`]), so validate first if that matters.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    ratio_of(luminance(a), luminance(b))
}

/// Pass/fail summary of one color pair.
///
/// Serialized with the field names the palette UI has always used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WcagReport {
    /// Contrast ratio rounded to two decimals.
    pub ratio: f64,
    #[serde(rename = "AA")]
    pub aa: bool,
    #[serde(rename = "AALarge")]
    pub aa_large: bool,
    #[serde(rename = "AAA")]
    pub aaa: bool,
    #[serde(rename = "AAALarge")]
    pub aaa_large: bool,
}

impl WcagReport {
    /// Score a raw ratio. Flags use the unrounded value.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: (ratio * 100.0).round() / 100.0,
            aa: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}

/// Check a color pair against the WCAG thresholds.
#[must_use]
pub fn check_wcag(a: &str, b: &str) -> WcagReport {
    WcagReport::from_ratio(contrast_ratio(a, b))
}

/// Pick black or white text, whichever contrasts more with `background`.
///
/// Ties go to black.
#[must_use]
pub fn text_color_for(background: Hex) -> Hex {
    let bg = relative_luminance(background.rgb());
    let on_black = ratio_of(bg, 0.0);
    let on_white = ratio_of(bg, 1.0);
    if on_black >= on_white { Hex::BLACK } else { Hex::WHITE }
}

fn ratio_of(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Convert an 8-bit sRGB channel to linear light.
#[inline]
fn linearize(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(luminance("#000000"), 0.0, 1e-9));
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = luminance("#FFFFFF");
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[rstest]
    #[case::red("#FF0000", 0.2126)]
    #[case::green("#00FF00", 0.7152)]
    #[case::blue("#0000FF", 0.0722)]
    fn luminance_primaries(#[case] hex: &str, #[case] expected: f64) {
        let lum = luminance(hex);
        assert!(approx_eq(lum, expected, 1e-9), "{hex}: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        // 0x80 linearizes to ~0.216.
        let lum = luminance("#808080");
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_dark_channel_uses_linear_segment() {
        // 10/255 = 0.0392 sits below the threshold.
        let lum = relative_luminance(Rgb::new(10, 10, 10));
        assert!(approx_eq(lum, 10.0 / 255.0 / 12.92, 1e-12), "{lum}");
    }

    #[rstest]
    #[case("not-a-color")]
    #[case("#FFF")]
    #[case("")]
    fn luminance_invalid_is_zero(#[case] input: &str) {
        assert_eq!(luminance(input), 0.0);
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#FFFFFF");
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[rstest]
    #[case("#000000")]
    #[case("#3A7BD5")]
    #[case("#FFFFFF")]
    #[case("#ff8000")]
    fn contrast_same_color_is_1(#[case] c: &str) {
        assert_eq!(contrast_ratio(c, c), 1.0);
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#CC3344", "#1A1A66");
        let ba = contrast_ratio("#1A1A66", "#CC3344");
        assert_eq!(ab, ba);
    }

    #[test]
    fn invalid_color_scores_as_black() {
        assert_eq!(contrast_ratio("nope", "#FFFFFF"), contrast_ratio("#000000", "#FFFFFF"));
    }

    // ── check_wcag ──────────────────────────────────────────────────

    #[test]
    fn black_on_white_passes_everything() {
        let report = check_wcag("#000000", "#FFFFFF");
        assert_eq!(
            report,
            WcagReport { ratio: 21.0, aa: true, aa_large: true, aaa: true, aaa_large: true }
        );
    }

    #[test]
    fn identical_colors_fail_everything() {
        let report = check_wcag("#777777", "#777777");
        assert_eq!(
            report,
            WcagReport { ratio: 1.0, aa: false, aa_large: false, aaa: false, aaa_large: false }
        );
    }

    #[rstest]
    #[case::below_large(2.99, false, false, false)]
    #[case::large_only(3.0, true, false, false)]
    #[case::aa(4.5, true, true, false)]
    #[case::aaa(7.0, true, true, true)]
    fn thresholds(#[case] ratio: f64, #[case] large: bool, #[case] aa: bool, #[case] aaa: bool) {
        let report = WcagReport::from_ratio(ratio);
        assert_eq!(report.aa_large, large);
        assert_eq!(report.aa, aa);
        assert_eq!(report.aaa, aaa);
        assert_eq!(report.aaa_large, report.aa);
    }

    #[test]
    fn flags_use_unrounded_ratio() {
        // 4.496 rounds to 4.5 for display but still fails AA.
        let report = WcagReport::from_ratio(4.496);
        assert_eq!(report.ratio, 4.5);
        assert!(!report.aa);
    }

    #[test]
    fn ratio_is_rounded_to_two_decimals() {
        let report = check_wcag("#777777", "#FFFFFF");
        assert_eq!(report.ratio, 4.48);
        assert!(!report.aa);
        assert!(report.aa_large);
    }

    #[test]
    fn report_serializes_with_wcag_names() {
        let json = serde_json::to_value(check_wcag("#000000", "#FFFFFF")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ratio": 21.0,
                "AA": true,
                "AALarge": true,
                "AAA": true,
                "AAALarge": true,
            })
        );
    }

    // ── text_color_for ──────────────────────────────────────────────

    #[rstest]
    #[case::yellow("#FFFF00", Hex::BLACK)]
    #[case::navy("#000080", Hex::WHITE)]
    #[case::white("#FFFFFF", Hex::BLACK)]
    #[case::black("#000000", Hex::WHITE)]
    fn text_color_picks_stronger_contrast(#[case] bg: &str, #[case] expected: Hex) {
        assert_eq!(text_color_for(bg.parse().unwrap()), expected);
    }
}
