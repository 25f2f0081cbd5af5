//! YAML label manifests.
//!
//! ```yaml
//! spacing: 12
//! max_selections: 3
//! labels:
//!   - icon: "🌙"
//!     title: Sleep
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::CliError;

/// A label shown as a pill.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    /// Leading emoji or symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Label text; unique within a manifest
    pub title: String,
}

impl Label {
    /// Label without an icon.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A list of labels plus optional layout overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelManifest {
    /// Overrides the configured spacing
    #[serde(default)]
    pub spacing: Option<f32>,
    /// Selection limit for this label set
    #[serde(default)]
    pub max_selections: Option<usize>,
    /// Labels in display order
    pub labels: Vec<Label>,
}

impl LabelManifest {
    /// Parse and validate a manifest from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, CliError> {
        let manifest: Self = serde_yaml_ng::from_str(text)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        let manifest = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), labels = manifest.labels.len(), "loaded manifest");
        Ok(manifest)
    }

    /// Check titles are non-empty and unique.
    pub fn validate(&self) -> Result<(), CliError> {
        let mut seen = HashSet::new();
        for (index, label) in self.labels.iter().enumerate() {
            if label.title.trim().is_empty() {
                return Err(CliError::InvalidManifest(format!(
                    "label {} has an empty title",
                    index + 1
                )));
            }
            if !seen.insert(label.title.as_str()) {
                return Err(CliError::InvalidManifest(format!(
                    "duplicate label '{}'",
                    label.title
                )));
            }
        }
        if let Some(spacing) = self.spacing {
            if !(spacing.is_finite() && spacing >= 0.0) {
                return Err(CliError::InvalidManifest(format!(
                    "spacing must be a non-negative number, got {spacing}"
                )));
            }
        }
        Ok(())
    }

    /// Find a label by title.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.title == title)
    }
}
