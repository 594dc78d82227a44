// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Memories document, image root, reveal delay and grid layout
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` CLI argument or `LUNAR_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use lunar_gallery::config::{self, Config};
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings.toml ignored: {key}");
//! }
//! println!("tiles per row: {}", config.gallery.tiles_per_row());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when the config file exists but cannot be used.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery data and presentation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Path of the `{ "memories": [...] }` JSON document.
    #[serde(default)]
    pub memories_path: Option<PathBuf>,

    /// Directory relative image references are resolved against.
    #[serde(default)]
    pub image_root: Option<PathBuf>,

    /// Delay before a newly shown image is swapped in.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: Option<u64>,

    #[serde(default = "default_tiles_per_row")]
    pub tiles_per_row: Option<u32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            memories_path: None,
            image_root: None,
            reveal_delay_ms: default_reveal_delay_ms(),
            tiles_per_row: default_tiles_per_row(),
        }
    }
}

impl GalleryConfig {
    /// Reveal delay clamped to the supported range.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        let millis = self
            .reveal_delay_ms
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
            .min(MAX_REVEAL_DELAY_MS);
        Duration::from_millis(millis)
    }

    #[must_use]
    pub fn tiles_per_row(&self) -> usize {
        self.tiles_per_row
            .unwrap_or(DEFAULT_TILES_PER_ROW)
            .clamp(MIN_TILES_PER_ROW, MAX_TILES_PER_ROW) as usize
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_reveal_delay_ms() -> Option<u64> {
    Some(DEFAULT_REVEAL_DELAY_MS)
}

fn default_tiles_per_row() -> Option<u32> {
    Some(DEFAULT_TILES_PER_ROW)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unusable config");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
