//! Ascend CLI - wrap goal pills, parse colors, drive rulers and radar charts.

use ascend_cli::commands::{self, RadarOptions, RulerOptions, WrapOptions};
use ascend_cli::{init_tracing, CliError, Config, OutputFormat};
use ascend_layout::FlowAlign;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ascend")]
#[command(about = "Flow layout and onboarding widget geometry")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Wrap the labels of a manifest into rows
    Wrap {
        /// Path to label manifest
        #[arg(default_value = "labels.yaml")]
        manifest: PathBuf,

        /// Available width
        #[arg(short, long)]
        width: Option<f32>,

        /// Gap between labels
        #[arg(short, long)]
        spacing: Option<f32>,

        /// Row alignment (leading, center, trailing)
        #[arg(short, long)]
        align: Option<FlowAlign>,

        /// Select a label by title (repeatable, in rank order)
        #[arg(long = "select")]
        select: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse hex colors
    Color {
        /// Hex strings (RGB, RRGGBB or AARRGGBB)
        #[arg(required = true)]
        hex: Vec<String>,

        /// Fail on malformed input instead of using black
        #[arg(long)]
        strict: bool,
    },

    /// Apply a drag to a ruler value
    Ruler {
        /// Current value
        #[arg(long, default_value_t = 148.9)]
        value: f64,

        /// Drag distance in pixels
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        drag: f64,

        /// Lower bound
        #[arg(long, default_value_t = 66.0)]
        min: f64,

        /// Upper bound
        #[arg(long, default_value_t = 330.0)]
        max: f64,

        /// Value resolution
        #[arg(long, default_value_t = 0.1)]
        step: f64,

        /// Pixels per unit
        #[arg(long, default_value_t = 100.0)]
        ppu: f64,

        /// Strip moves under a fixed marker
        #[arg(long)]
        inverted: bool,

        /// Unit suffix
        #[arg(long, default_value = "lbs")]
        unit: String,
    },

    /// Compute radar chart geometry
    Radar {
        /// Category values in [0, 1]
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        values: Vec<f32>,

        /// Chart width
        #[arg(long, default_value_t = 300.0)]
        width: f32,

        /// Chart height
        #[arg(long, default_value_t = 300.0)]
        height: f32,

        /// Space reserved for labels
        #[arg(long, default_value_t = 50.0)]
        margin: f32,

        /// Number of grid rings
        #[arg(long, default_value_t = 3)]
        levels: usize,
    },
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Wrap {
            manifest,
            width,
            spacing,
            align,
            select,
            format,
        } => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            let options = WrapOptions {
                width,
                spacing,
                align,
                select,
                format,
            };
            commands::wrap(&manifest, &config, &options)
        }
        Commands::Color { hex, strict } => commands::color(&hex, strict),
        Commands::Ruler {
            value,
            drag,
            min,
            max,
            step,
            ppu,
            inverted,
            unit,
        } => Ok(commands::ruler(&RulerOptions {
            value,
            drag,
            min,
            max,
            step,
            pixels_per_unit: ppu,
            inverted,
            unit,
        })),
        Commands::Radar {
            values,
            width,
            height,
            margin,
            levels,
        } => commands::radar(&RadarOptions {
            values,
            width,
            height,
            margin,
            levels,
            ..RadarOptions::default()
        }),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
