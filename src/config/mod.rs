//! Configuration file support for paintboard.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/paintboard/config.toml`. Settings cover the shared board size,
//! how many views open at startup, and the pen each view starts with.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BoardConfig, DrawingConfig};

use crate::board::{MAX_DIMENSION, MIN_DIMENSION};
use crate::view::clamp_stroke_thickness;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest number of views a session may open.
pub const MAX_WINDOWS: usize = 16;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [board]
/// width = 500
/// height = 500
/// windows = 3
///
/// [drawing]
/// default_color = "black"
/// stroke_thickness = 2.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Shared board size and view count
    #[serde(default)]
    pub board: BoardConfig,

    /// Pen defaults for every view
    #[serde(default)]
    pub drawing: DrawingConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `board.width`, `board.height`: 300 - 1000
    /// - `board.windows`: 1 - 16
    /// - `drawing.stroke_thickness`: 1.0 - 20.0
    pub fn validate_and_clamp(&mut self) {
        let side = MIN_DIMENSION..=MAX_DIMENSION;
        if !side.contains(&self.board.width) {
            log::warn!(
                "Invalid board width {}, clamping to {MIN_DIMENSION}-{MAX_DIMENSION} range",
                self.board.width
            );
            self.board.width = self.board.width.clamp(MIN_DIMENSION, MAX_DIMENSION);
        }
        if !side.contains(&self.board.height) {
            log::warn!(
                "Invalid board height {}, clamping to {MIN_DIMENSION}-{MAX_DIMENSION} range",
                self.board.height
            );
            self.board.height = self.board.height.clamp(MIN_DIMENSION, MAX_DIMENSION);
        }

        if !(1..=MAX_WINDOWS).contains(&self.board.windows) {
            log::warn!(
                "Invalid windows {}, clamping to 1-{MAX_WINDOWS} range",
                self.board.windows
            );
            self.board.windows = self.board.windows.clamp(1, MAX_WINDOWS);
        }

        self.drawing.stroke_thickness = clamp_stroke_thickness(self.drawing.stroke_thickness);
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/paintboard/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("paintboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists there or it cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editor integration.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
