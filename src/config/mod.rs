//! Configuration file support for waycompass.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/waycompass/config.toml`.
//! Settings include drawing defaults, background grid appearance,
//! performance tuning, and UI preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::StatusPosition;
pub use types::{DrawingConfig, HelpOverlayStyle, PerformanceConfig, StatusBarStyle, UiConfig};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use enums::ColorSpec;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating, reading, or parsing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the user configuration directory")]
    NoConfigDir,

    #[error("failed to read config from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "compass"
/// ink_color = "black"
/// stroke_thickness = 2.0
///
/// [performance]
/// buffer_count = 3
/// enable_vsync = true
///
/// [ui]
/// show_status_bar = true
/// status_bar_position = "bottom-left"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (tool, colors, thickness, grid)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 20.0
    /// - `guide_thickness`: 0.5 - 5.0
    /// - `readout_font_size`: 8.0 - 72.0
    /// - `dot_spacing`: 4.0 - 200.0
    /// - `buffer_count`: 2 - 4
    fn validate_and_clamp(&mut self) {
        // Stroke thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.stroke_thickness) {
            log::warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_thickness
            );
            self.drawing.stroke_thickness = self.drawing.stroke_thickness.clamp(1.0, 20.0);
        }

        // Guide thickness: 0.5 - 5.0
        if !(0.5..=5.0).contains(&self.drawing.guide_thickness) {
            log::warn!(
                "Invalid guide_thickness {:.1}, clamping to 0.5-5.0 range",
                self.drawing.guide_thickness
            );
            self.drawing.guide_thickness = self.drawing.guide_thickness.clamp(0.5, 5.0);
        }

        // Readout font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.drawing.readout_font_size) {
            log::warn!(
                "Invalid readout_font_size {:.1}, clamping to 8.0-72.0 range",
                self.drawing.readout_font_size
            );
            self.drawing.readout_font_size = self.drawing.readout_font_size.clamp(8.0, 72.0);
        }

        // Dot spacing: 4.0 - 200.0
        if !(4.0..=200.0).contains(&self.drawing.dot_spacing) {
            log::warn!(
                "Invalid dot_spacing {:.1}, clamping to 4.0-200.0 range",
                self.drawing.dot_spacing
            );
            self.drawing.dot_spacing = self.drawing.dot_spacing.clamp(4.0, 200.0);
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/waycompass/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("waycompass");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/waycompass/config.toml`. If the file doesn't exist,
    /// returns a Config with default values. All loaded values are
    /// validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from_path(config_path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;

        let mut config: Config =
            toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
                path: config_path.to_path_buf(),
                source,
            })?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_valid_ranges() {
        let mut config = Config::default();
        let thickness = config.drawing.stroke_thickness;
        let spacing = config.drawing.dot_spacing;

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_thickness, thickness);
        assert_eq!(config.drawing.dot_spacing, spacing);
        assert_eq!(config.drawing.default_tool, "compass");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.stroke_thickness = 99.0;
        config.drawing.guide_thickness = 0.0;
        config.drawing.readout_font_size = 1.0;
        config.drawing.dot_spacing = 1000.0;
        config.performance.buffer_count = 17;

        config.validate_and_clamp();

        assert_eq!(config.drawing.stroke_thickness, 20.0);
        assert_eq!(config.drawing.guide_thickness, 0.5);
        assert_eq!(config.drawing.readout_font_size, 8.0);
        assert_eq!(config.drawing.dot_spacing, 200.0);
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [drawing]
            default_tool = "line"
            ink_color = [255, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_tool, "line");
        assert_eq!(config.drawing.stroke_thickness, 2.0);
        assert!(config.performance.enable_vsync);

        let style = config.drawing.ink_style();
        assert!((style.ink.r - 1.0).abs() < 1e-9);
        assert_eq!(style.ink.g, 0.0);
    }

    #[test]
    fn load_from_path_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();

        match Config::load_from_path(&path) {
            Err(ConfigError::Parse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn load_from_path_round_trips_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [drawing]
            stroke_thickness = 4.0
            dot_spacing = 32.0

            [ui]
            show_status_bar = false
            status_bar_position = "top-right"
            "#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.drawing.stroke_thickness, 4.0);
        assert_eq!(config.drawing.dot_spacing, 32.0);
        assert!(!config.ui.show_status_bar);
        assert!(matches!(
            config.ui.status_bar_position,
            StatusPosition::TopRight
        ));
    }
}
