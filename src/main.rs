// SPDX-License-Identifier: MIT
//
// paletta — a color palette generator.
//
// This is the binary that wires the crates together:
//
//   paletta-color → HEX/RGB/HSL values and conversions
//   paletta-theme → harmonies, mood presets, WCAG contrast
//
// A run resolves one path through the route table and renders that view:
//
//   argv → Cli → Config (file + flags) → Router::resolve(path) → view → stdout
//
// Logging goes to stderr and is off unless PALETTA_LOG is set, e.g.
// `PALETTA_LOG=debug paletta /library`.

mod config;
mod routes;
mod views;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use paletta_color::Hex;
use paletta_theme::MAX_COUNT;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::routes::{Router, View};
use crate::views::{Format, GeneratorPage, LibraryPage, render_not_found};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PALETTA_LOG";

/// Generate color palettes and check their contrast
#[derive(Debug, Parser)]
#[command(name = "paletta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to open: `/` (generator), `/library`; anything else is not found
    #[arg(default_value = "/")]
    path: String,

    /// Base color as #RRGGBB (random when omitted, ignored with --mood)
    #[arg(long)]
    base: Option<String>,

    /// Number of colors in the palette (0 to 256)
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(..=MAX_COUNT as u64))]
    count: Option<usize>,

    /// Harmony kind: analogous, monochromatic, triad, complementary, random
    #[arg(long)]
    kind: Option<String>,

    /// Mood preset: calm, energetic, professional, nature, warm, cool
    #[arg(long)]
    mood: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// JSON file with default settings
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// The `--base` color, if one was given.
    fn base(&self) -> Result<Option<Hex>> {
        self.base
            .as_deref()
            .map(|s| {
                s.parse::<Hex>()
                    .with_context(|| format!("--base {s:?} is not a #RRGGBB color"))
            })
            .transpose()
    }

    const fn format(&self) -> Format {
        if self.json { Format::Json } else { Format::Text }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the path, render its view to stdout, and report which view ran.
fn run(cli: &Cli) -> Result<View> {
    let config = Config::load_or_default(cli.config.as_deref())?.with_overrides(
        cli.count,
        cli.kind.clone(),
        cli.mood.clone(),
    );
    debug!(?config, "configuration");

    let router = Router::builtin()?;
    debug!(routes = router.routes().len(), "router ready");
    let view = router.resolve(&cli.path).map_or(View::NotFound, |m| {
        info!(
            path = %cli.path,
            route = m.route.name,
            pattern = m.route.pattern,
            params = ?m.params,
            "resolved"
        );
        m.route.view
    });

    let mut out = io::stdout().lock();
    let format = cli.format();
    match view {
        View::Generator => {
            // A mood palette has no base color, so --base is not checked.
            let base = if config.mood.is_none() { cli.base()? } else { None };
            GeneratorPage::build(&config, base).render(&mut out, format)?;
        }
        View::Library => LibraryPage::build(config.count).render(&mut out, format)?,
        View::NotFound => render_not_found(&mut out, &cli.path)?,
    }
    out.flush()?;
    Ok(view)
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let view = run(&Cli::parse())?;
    Ok(if view == View::NotFound {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

// ─── Tests ──────────────────────────────────────────────────────────────────
