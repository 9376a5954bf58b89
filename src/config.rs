//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default parameter values (used when CLI flags are not given).
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Default parameter values from config file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Board length (cells per side).
    pub length: u32,
    /// Target overall image size in pixels.
    pub resolution: u32,
    /// Gridline stroke width in pixels.
    pub outline: u32,
    /// Border size in pixels, applied to all four sides.
    pub border: u32,
    /// Font size for tile text.
    pub font_size: u32,
    /// Character budget per line of tile text.
    pub wrap: usize,
    /// Output image format.
    pub format: String,
    /// Path to a TrueType font.
    pub font: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            length: 5,
            resolution: 1024,
            outline: 5,
            border: 20,
            font_size: 20,
            wrap: 19,
            format: "jpeg".to_string(),
            font: None,
        }
    }
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `CARDGEN_CONFIG` environment variable
/// 3. `~/.config/cardgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("CARDGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/cardgen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/cardgen/config.toml")
    } else {
        PathBuf::from("cardgen.toml")
    }
}
