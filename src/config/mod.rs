// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[defaults]` - Values applied to unset `ToastOptions` fields
//! - `[layout]` - Stack spacing, window margin, toast width and fade length
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `PALM_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use palm_toast::config::{self, Config};
//! use palm_toast::toast::Position;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.defaults.position = Position::TopLeft;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::toast::ToastDefaults;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Geometry and animation of the toast overlay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between stacked toasts (pixels).
    pub spacing: f32,
    /// Gap between the window edge and the nearest toast (pixels).
    pub margin: f32,
    /// Toast card width (pixels).
    pub width: f32,
    /// Fade-out transition length (milliseconds).
    pub fade_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            margin: DEFAULT_MARGIN,
            width: DEFAULT_TOAST_WIDTH,
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

impl LayoutConfig {
    /// Clamps values so a hand-edited file cannot produce a broken layout.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        Self {
            spacing: finite_or(self.spacing, DEFAULT_SPACING).max(0.0),
            margin: finite_or(self.margin, DEFAULT_MARGIN).max(0.0),
            width: finite_or(self.width, DEFAULT_TOAST_WIDTH)
                .clamp(MIN_TOAST_WIDTH, MAX_TOAST_WIDTH),
            fade_ms: self.fade_ms.min(MAX_FADE_MS),
        }
    }

    #[must_use]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub defaults: ToastDefaults,

    #[serde(default)]
    pub layout: LayoutConfig,
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;
    config.layout = config.layout.sanitized();
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Position, ToastType};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                theme_mode: ThemeMode::Light,
            },
            defaults: ToastDefaults {
                position: Position::TopLeft,
                kind: ToastType::Info,
                duration_ms: 8000,
                show_timer: true,
                ..ToastDefaults::default()
            },
            layout: LayoutConfig {
                spacing: 6.0,
                ..LayoutConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[layout\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[defaults]\nposition = \"top-right\"\n\n[layout]\nspacing = 4.0\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.defaults.position, Position::TopRight);
        assert_eq!(loaded.defaults.duration_ms, DEFAULT_DURATION_MS);
        assert_eq!(loaded.layout.spacing, 4.0);
        assert_eq!(loaded.layout.width, DEFAULT_TOAST_WIDTH);
    }

    #[test]
    fn layout_values_are_clamped_on_load() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[layout]\nspacing = -3.0\nwidth = 5000.0\nfade_ms = 999999\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.layout.spacing, 0.0);
        assert_eq!(loaded.layout.width, MAX_TOAST_WIDTH);
        assert_eq!(loaded.layout.fade_ms, MAX_FADE_MS);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
