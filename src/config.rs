//! Generator configuration.
//!
//! Defaults can be changed in a JSON file passed with `--config`; any flag
//! on the command line wins over the file.
//!
//! ```json
//! { "count": 6, "kind": "triad", "mood": null }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use paletta_theme::{DEFAULT_COUNT, HarmonyKind, MAX_COUNT};
use serde::{Deserialize, Serialize};

/// Palette generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Number of colors per palette, at most [`MAX_COUNT`].
    pub count: usize,

    /// Harmony kind name. Kept as text: an unknown kind is not an error,
    /// it yields a palette holding only the base color.
    pub kind: String,

    /// Mood preset; when set the generator ignores base color and kind.
    pub mood: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            kind: HarmonyKind::default().name().to_string(),
            mood: None,
        }
    }
}

impl Config {
    /// Load from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is not valid JSON for this
    /// shape, or asks for more than [`MAX_COUNT`] colors.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        ensure!(
            config.count <= MAX_COUNT,
            "invalid config {}: count {} is above the maximum of {MAX_COUNT}",
            path.display(),
            config.count
        );
        Ok(config)
    }

    /// [`load`](Self::load) when a path is given, defaults otherwise.
    ///
    /// # Errors
    ///
    /// As for [`load`](Self::load).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(
        mut self,
        count: Option<usize>,
        kind: Option<String>,
        mood: Option<String>,
    ) -> Self {
        if let Some(count) = count {
            self.count = count;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        if mood.is_some() {
            self.mood = mood;
        }
        self
    }
}
