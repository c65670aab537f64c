//! Configuration file support for boardkit.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/boardkit/config.toml`. Settings cover the tool panel defaults,
//! the room join defaults and the panel layout.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;


pub use enums::LayoutMode;
pub use types::{PanelConfig, SdkConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::{hex_to_rgb, rgb_to_hex};
use crate::input::AppliancePair;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [panel]
/// default_tool = "shape"
/// default_shape = "pentagram"
/// palette = ["#EC3455", "#68AB5D", "#005BF6"]
///
/// [sdk]
/// user_cursor = false
///
/// [ui]
/// layout = "auto"
/// pad_min_dimension = 768.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Tool panel defaults (shape shortcut, palette)
    #[serde(default)]
    pub panel: PanelConfig,

    /// Room join defaults
    #[serde(default)]
    pub sdk: SdkConfig,

    /// Panel layout preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are replaced and a warning is logged.
    ///
    /// Validated values:
    /// - `panel.default_tool` / `panel.default_shape`: must form a consistent pair
    /// - `panel.palette`: valid hex colors only, never empty
    /// - `ui.pad_min_dimension`: 320.0 - 4096.0
    fn validate_and_clamp(&mut self) {
        if AppliancePair::new(self.panel.default_tool, self.panel.default_shape).is_none() {
            log::warn!(
                "Invalid default tool '{}' with shape {:?}, falling back to 'rectangle'",
                self.panel.default_tool,
                self.panel.default_shape
            );
            let fallback = AppliancePair::default();
            self.panel.default_tool = fallback.appliance();
            self.panel.default_shape = fallback.shape_kind();
        }

        // Palette entries are normalized to uppercase #RRGGBB
        let mut palette = Vec::with_capacity(self.panel.palette.len());
        for entry in &self.panel.palette {
            match hex_to_rgb(entry) {
                Some(rgb) => palette.push(rgb_to_hex(rgb)),
                None => log::warn!("Ignoring invalid palette color '{entry}'"),
            }
        }
        if palette.is_empty() {
            log::warn!("Palette is empty, using the default colors");
            palette = types::default_palette();
        }
        self.panel.palette = palette;

        // Pad threshold: 320.0 - 4096.0
        if !(320.0..=4096.0).contains(&self.ui.pad_min_dimension) {
            log::warn!(
                "Invalid pad_min_dimension {:.1}, clamping to 320.0-4096.0 range",
                self.ui.pad_min_dimension
            );
            self.ui.pad_min_dimension = if self.ui.pad_min_dimension.is_nan() {
                768.0
            } else {
                self.ui.pad_min_dimension.clamp(320.0, 4096.0)
            };
        }
    }

    /// The construction-time default for the panel store's shapes shortcut.
    ///
    /// Always consistent after loading; falls back to rectangle otherwise.
    pub fn default_shape_pair(&self) -> AppliancePair {
        AppliancePair::new(self.panel.default_tool, self.panel.default_shape).unwrap_or_default()
    }

    /// JSON schema of the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/boardkit/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("boardkit");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates the configuration file at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
