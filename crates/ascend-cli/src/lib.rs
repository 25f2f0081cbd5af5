//! Command-line front end for the ascend layout crates.
//!
//! Labels come from a YAML manifest, pill metrics and layout defaults from an
//! optional TOML file.

pub mod commands;
pub mod config;
pub mod error;
pub mod manifest;
mod metrics;

pub use commands::OutputFormat;
pub use config::{Config, LayoutConfig, PillMetrics};
pub use error::CliError;
pub use manifest::{Label, LabelManifest};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing on stderr.
///
/// Safe to call multiple times. Enable with `RUST_LOG=ascend=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
