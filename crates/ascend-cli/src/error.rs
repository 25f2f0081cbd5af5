//! Error type for the command-line front end.

use ascend_core::ColorParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by `ascend` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The TOML configuration did not parse
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// The YAML manifest did not parse
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_yaml_ng::Error),

    /// The manifest parsed but breaks a rule
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    /// A selection names a label that is not in the manifest
    #[error("unknown label '{0}'")]
    UnknownLabel(String),

    /// A color string was rejected in strict mode
    #[error("invalid color '{input}': {source}")]
    Color {
        /// Input as given
        input: String,
        /// Parse failure
        source: ColorParseError,
    },

    /// JSON output could not be produced
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_display_includes_path() {
        let err = CliError::io(
            "goals.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "failed to read goals.yaml: no such file");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_color_error_display() {
        let err = CliError::Color {
            input: "#12".to_string(),
            source: ColorParseError::InvalidLength,
        };
        assert_eq!(
            err.to_string(),
            "invalid color '#12': invalid hex string length (expected 3, 6 or 8)"
        );
    }

    #[test]
    fn test_unknown_label_display() {
        let err = CliError::UnknownLabel("Flying".to_string());
        assert_eq!(err.to_string(), "unknown label 'Flying'");
    }

    #[test]
    fn test_manifest_rule_display() {
        let err = CliError::InvalidManifest("no labels".to_string());
        assert_eq!(err.to_string(), "invalid manifest: no labels");
    }
}
