//! Configuration of the derivation engines.
//!
//! Supports a YAML file overriding the shade schedule and the harmony rules.
//! Every default reproduces the built-in behavior, so an empty file changes
//! nothing.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::harmony::{HarmonyRules, PaletteDeriver};
use crate::shades::{ShadeGenerator, ShadeSchedule, DEFAULT_LIGHTNESS_SCHEDULE};

/// File name looked up inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Shade ramp settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadesConfig {
    /// Lightness schedule, lightest first.
    #[serde(default = "default_lightness")]
    pub lightness: Vec<f64>,
}

fn default_lightness() -> Vec<f64> {
    DEFAULT_LIGHTNESS_SCHEDULE.to_vec()
}

impl Default for ShadesConfig {
    fn default() -> Self {
        Self {
            lightness: default_lightness(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Shade ramp settings.
    #[serde(default)]
    pub shades: ShadesConfig,

    /// Palette derivation rules.
    #[serde(default)]
    pub harmony: HarmonyRules,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            shades: ShadesConfig::default(),
            harmony: HarmonyRules::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Checks the shade schedule and harmony rules.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::ConfigInvalid {
                key: "version".to_string(),
                message: format!("unsupported version {}", self.version),
            });
        }
        ShadeSchedule::new(self.shades.lightness.clone())?;
        self.harmony.validate()
    }

    /// Builds the shade generator described by this configuration.
    pub fn shade_generator(&self) -> Result<ShadeGenerator> {
        Ok(ShadeGenerator::new(ShadeSchedule::new(
            self.shades.lightness.clone(),
        )?))
    }

    /// Builds the palette deriver described by this configuration.
    pub fn palette_deriver(&self) -> Result<PaletteDeriver> {
        PaletteDeriver::new(self.harmony)
    }

    /// Platform config file location (`<config_dir>/swatchbook/config.yaml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("swatchbook").join(CONFIG_FILE_NAME))
    }

    /// Loads the platform config file if present, defaults otherwise.
    #[must_use]
    pub fn discover() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_or_default(path),
            _ => Self::default(),
        }
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring configuration file");
            Self::default()
        })
    }
}
