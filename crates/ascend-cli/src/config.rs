//! TOML configuration for pill metrics and layout defaults.
//!
//! Every key is optional; missing keys take the values of the onboarding
//! goal picker (14 pt labels in 16x12 pt padded pills, 12 pt gaps, a 345 pt
//! wide column).

use ascend_layout::{FlowAlign, FlowLayout};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;

/// Full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pill measurement
    pub pill: PillMetrics,
    /// Layout defaults
    pub layout: LayoutConfig,
}

/// Metrics used to estimate the natural size of a label pill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PillMetrics {
    /// Font size in points
    pub font_size: f32,
    /// Advance of one terminal column as a fraction of the font size
    pub char_advance: f32,
    /// Horizontal padding on each side
    pub padding_x: f32,
    /// Vertical padding on each side
    pub padding_y: f32,
    /// Gap between icon and title
    pub icon_gap: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
}

impl Default for PillMetrics {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            char_advance: 0.55,
            padding_x: 16.0,
            padding_y: 12.0,
            icon_gap: 6.0,
            line_height: 1.2,
        }
    }
}

/// Layout defaults, overridable per manifest and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Available width
    pub width: f32,
    /// Gap between pills
    pub spacing: f32,
    /// Gap between rows (defaults to `spacing`)
    pub line_spacing: Option<f32>,
    /// Row alignment
    pub align: FlowAlign,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 345.0,
            spacing: 12.0,
            line_spacing: None,
            align: FlowAlign::Leading,
        }
    }
}

impl LayoutConfig {
    /// Build the flow layout described by this section.
    #[must_use]
    pub fn flow(&self) -> FlowLayout {
        let layout = FlowLayout::new().spacing(self.spacing).align(self.align);
        match self.line_spacing {
            Some(gap) => layout.line_spacing(gap),
            None => layout,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CliError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
