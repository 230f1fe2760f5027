// SPDX-License-Identifier: MIT
//
// Views — what each route renders.
//
// Each view builds a plain data page first (serializable, easy to test)
// and then writes it either as aligned text or as JSON. Nothing here
// touches the terminal directly; output goes to any `io::Write`.

use std::io::{self, Write};

use paletta_color::{Hex, Hsl, random_color};
use paletta_theme::contrast::{WcagReport, check_wcag, text_color_for};
use paletta_theme::{HarmonyKind, Mood, generate_harmonious_palette, generate_mood_palette};
use serde::Serialize;

use crate::config::Config;

/// Output format for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

// ─── Generator ──────────────────────────────────────────────────────────────

/// One palette color with its readability against black and white.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub hex: Hex,
    /// Black or white, whichever reads better on `hex`.
    pub text: Hex,
    pub on_white: WcagReport,
    pub on_black: WcagReport,
}

impl Swatch {
    #[must_use]
    pub fn new(hex: Hex) -> Self {
        let s = hex.to_string();
        Self {
            hex,
            text: text_color_for(hex),
            on_white: check_wcag(&s, "#FFFFFF"),
            on_black: check_wcag(&s, "#000000"),
        }
    }
}

/// The generator page: where the palette came from, and its swatches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratorPage {
    pub source: String,
    pub swatches: Vec<Swatch>,
}

impl GeneratorPage {
    /// Build from configuration. A mood, when set, takes precedence over
    /// the base color and harmony kind. Without a base a random one is
    /// drawn.
    #[must_use]
    pub fn build(config: &Config, base: Option<Hex>) -> Self {
        let (source, palette) = if let Some(mood) = &config.mood {
            (format!("mood {mood}"), generate_mood_palette(mood, config.count))
        } else {
            let base = base.unwrap_or_else(random_color);
            (
                format!("{} from {base}", config.kind),
                generate_harmonious_palette(&base.to_string(), config.count, &config.kind),
            )
        };
        Self {
            source,
            swatches: palette.into_iter().map(Swatch::new).collect(),
        }
    }

    /// Write the page.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn render(&self, out: &mut impl Write, format: Format) -> io::Result<()> {
        if format == Format::Json {
            return write_json(out, self);
        }
        writeln!(out, "{}", self.source)?;
        for swatch in &self.swatches {
            writeln!(
                out,
                "  {}  text {}  on white {:>5.2} {:<9}  on black {:>5.2} {}",
                swatch.hex,
                swatch.text,
                swatch.on_white.ratio,
                grade(&swatch.on_white),
                swatch.on_black.ratio,
                grade(&swatch.on_black),
            )?;
        }
        Ok(())
    }
}

/// Highest level a pair reaches for normal text, else for large text.
fn grade(report: &WcagReport) -> &'static str {
    if report.aaa {
        "AAA"
    } else if report.aa {
        "AA"
    } else if report.aa_large {
        "AA-large"
    } else {
        "fail"
    }
}

// ─── Library ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub mood: &'static str,
    pub seed: Hsl,
    pub palette: Vec<Hex>,
}

/// The library page: every built-in mood palette, and the harmony kinds
/// the generator understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryPage {
    pub moods: Vec<LibraryEntry>,
    pub harmonies: Vec<&'static str>,
}

impl LibraryPage {
    #[must_use]
    pub fn build(count: usize) -> Self {
        Self {
            moods: Mood::all()
                .iter()
                .map(|mood| LibraryEntry {
                    mood: mood.name(),
                    seed: mood.preset(),
                    palette: mood.palette(count),
                })
                .collect(),
            harmonies: HarmonyKind::all().iter().map(|k| k.name()).collect(),
        }
    }

    /// Write the page.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn render(&self, out: &mut impl Write, format: Format) -> io::Result<()> {
        if format == Format::Json {
            return write_json(out, self);
        }
        writeln!(out, "moods")?;
        for entry in &self.moods {
            let colors: Vec<String> = entry.palette.iter().map(ToString::to_string).collect();
            writeln!(
                out,
                "  {:<13} hsl({:>3}, {:>2}%, {:>2}%)  {}",
                entry.mood,
                entry.seed.h,
                entry.seed.s,
                entry.seed.l,
                colors.join(" ")
            )?;
        }
        writeln!(out, "harmonies")?;
        writeln!(out, "  {}", self.harmonies.join(", "))
    }
}

// ─── Not found ──────────────────────────────────────────────────────────────

/// Write the not-found message for `path`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_not_found(out: &mut impl Write, path: &str) -> io::Result<()> {
    writeln!(out, "no page at {path}")
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn red() -> Hex {
        "#FF0000".parse().unwrap()
    }

    fn rendered(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Generator ─────────────────────────────────────────────────────

    #[test]
    fn generator_uses_harmony_by_default() {
        let page = GeneratorPage::build(&Config::default(), Some(red()));
        assert_eq!(page.source, "analogous from #FF0000");
        assert_eq!(page.swatches.len(), 5);
        assert_eq!(page.swatches[0].hex, red());
    }

    #[test]
    fn generator_mood_overrides_base() {
        let config = Config { mood: Some("nature".into()), count: 3, ..Config::default() };
        let page = GeneratorPage::build(&config, Some(red()));
        assert_eq!(page.source, "mood nature");
        let hexes: Vec<Hex> = page.swatches.iter().map(|s| s.hex).collect();
        assert_eq!(hexes, Mood::Nature.palette(3));
    }

    #[test]
    fn generator_unknown_kind_shows_only_base() {
        let config = Config { kind: "tetradic".into(), ..Config::default() };
        let page = GeneratorPage::build(&config, Some(red()));
        assert_eq!(page.swatches.len(), 1);
    }

    #[test]
    fn generator_without_base_draws_one() {
        let page = GeneratorPage::build(&Config::default(), None);
        assert!(page.source.starts_with("analogous from #"), "{}", page.source);
        assert_eq!(page.swatches.len(), 5);
    }

    #[test]
    fn swatch_scores_both_backgrounds() {
        let swatch = Swatch::new(Hex::WHITE);
        assert_eq!(swatch.text, Hex::BLACK);
        assert_eq!(swatch.on_white.ratio, 1.0);
        assert_eq!(swatch.on_black.ratio, 21.0);
    }

    #[test]
    fn generator_text_output() {
        let config = Config { count: 2, kind: "complementary".into(), ..Config::default() };
        let page = GeneratorPage::build(&config, Some(red()));
        let text = rendered(|out| page.render(out, Format::Text));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "complementary from #FF0000");
        assert!(lines[1].starts_with("  #FF0000  text #000000"), "{}", lines[1]);
        assert!(lines[2].starts_with("  #00FFFF  text #000000"), "{}", lines[2]);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn generator_json_output() {
        let config = Config { count: 1, ..Config::default() };
        let page = GeneratorPage::build(&config, Some(Hex::BLACK));
        let json: serde_json::Value =
            serde_json::from_str(&rendered(|out| page.render(out, Format::Json))).unwrap();
        assert_eq!(json["swatches"][0]["hex"], "#000000");
        assert_eq!(json["swatches"][0]["on_white"]["ratio"], 21.0);
        assert_eq!(json["swatches"][0]["on_white"]["AAALarge"], true);
    }

    #[test]
    fn grades() {
        assert_eq!(grade(&WcagReport::from_ratio(21.0)), "AAA");
        assert_eq!(grade(&WcagReport::from_ratio(5.0)), "AA");
        assert_eq!(grade(&WcagReport::from_ratio(3.5)), "AA-large");
        assert_eq!(grade(&WcagReport::from_ratio(1.2)), "fail");
    }

    // ── Library ───────────────────────────────────────────────────────

    #[test]
    fn library_lists_every_mood_and_kind() {
        let page = LibraryPage::build(4);
        let moods: Vec<&str> = page.moods.iter().map(|m| m.mood).collect();
        assert_eq!(moods, ["calm", "energetic", "professional", "nature", "warm", "cool"]);
        assert!(page.moods.iter().all(|m| m.palette.len() == 4));
        assert_eq!(
            page.harmonies,
            ["analogous", "monochromatic", "triad", "complementary", "random"]
        );
    }

    #[test]
    fn library_text_output() {
        let page = LibraryPage::build(2);
        let text = rendered(|out| page.render(out, Format::Text));
        assert!(text.starts_with("moods\n"), "{text}");
        assert!(text.contains("  calm          hsl(200, 40%, 60%)  #70A7C2 #708BC2\n"), "{text}");
        assert!(text.ends_with("harmonies\n  analogous, monochromatic, triad, complementary, random\n"));
    }

    // ── Not found ─────────────────────────────────────────────────────

    #[test]
    fn not_found_names_the_path() {
        let text = rendered(|out| render_not_found(out, "/nowhere"));
        assert_eq!(text, "no page at /nowhere\n");
    }
}
