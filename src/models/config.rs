//! Render configuration: cell size, grid color and label font.

use bead_palette::Rgb;
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::error::ConvertError;

/// Render configuration loaded from an optional YAML file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Pixels per source pixel (cell edge length)
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Grid outline color, "#rrggbb" or "r,g,b"
    #[serde(default = "default_grid_color", deserialize_with = "deserialize_rgb")]
    pub grid_color: Rgb,

    /// Label font family; sans-serif is appended as fallback
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Label font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Re-compress the output PNG with oxipng
    #[serde(default)]
    pub optimize: bool,
}

fn default_cell_size() -> u32 {
    40
}

fn default_grid_color() -> Rgb {
    Rgb::BLACK
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_size() -> f32 {
    12.0
}

fn deserialize_rgb<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl RenderConfig {
    /// Parse configuration from YAML text and validate it.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConvertError> {
        // An empty document deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConvertError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            cell_size = config.cell_size,
            font = %config.font_family,
            "Loaded render configuration"
        );
        Ok(config)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.cell_size == 0 {
            return Err(ConvertError::Config(
                "cell_size must be at least 1".to_string(),
            ));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConvertError::Config(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            grid_color: default_grid_color(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            optimize: false,
        }
    }
}
