//! Subcommand implementations.
//!
//! Each command returns its rendered output so it can be tested without a
//! terminal; `main` only prints.

use ascend_core::{
    non_negative, Color, Command, GoalMessage, GoalSelection, Point, Rect, Size, State,
};
use ascend_layout::{FlowAlign, RadarGeometry, RulerScale};
use serde::Serialize;
use std::fmt::Write as _;

use crate::config::Config;
use crate::error::CliError;
use crate::manifest::{Label, LabelManifest};

/// Output format for commands with structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

// =============================================================================
// wrap
// =============================================================================

/// Options for [`wrap`].
#[derive(Debug, Clone, Default)]
pub struct WrapOptions {
    /// Overrides the configured width
    pub width: Option<f32>,
    /// Overrides manifest and configured spacing
    pub spacing: Option<f32>,
    /// Overrides the configured alignment
    pub align: Option<FlowAlign>,
    /// Titles to select, in order
    pub select: Vec<String>,
    /// Output format
    pub format: OutputFormat,
}

/// A label with its computed frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLabel {
    /// The label
    #[serde(flatten)]
    pub label: Label,
    /// Frame inside the container
    pub frame: Rect,
    /// Importance rank when selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

/// A row of placed labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowReport {
    /// Top edge
    pub y: f32,
    /// Occupied width
    pub width: f32,
    /// Row height
    pub height: f32,
    /// Labels in order
    pub labels: Vec<PlacedLabel>,
}

/// Result of a wrap run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrapReport {
    /// Available width the layout ran with, after sanitizing
    pub available_width: f32,
    /// Spacing used
    pub spacing: f32,
    /// Rows in order
    pub rows: Vec<RowReport>,
    /// Content bounding size
    pub size: Size,
    /// Selection messages (e.g. rejected picks)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

/// Lay out the labels of `manifest`.
pub fn wrap_report(
    manifest: &LabelManifest,
    config: &Config,
    options: &WrapOptions,
) -> Result<WrapReport, CliError> {
    let mut layout_config = config.layout;
    if let Some(width) = options.width {
        layout_config.width = width;
    }
    if let Some(spacing) = options.spacing.or(manifest.spacing) {
        layout_config.spacing = spacing;
    }
    if let Some(align) = options.align {
        layout_config.align = align;
    }
    let layout = layout_config.flow();

    let mut selection =
        GoalSelection::new(manifest.max_selections.unwrap_or(GoalSelection::DEFAULT_MAX));
    let mut notices = Vec::new();
    for title in &options.select {
        if manifest.find(title).is_none() {
            return Err(CliError::UnknownLabel(title.clone()));
        }
        collect_notices(selection.update(GoalMessage::Toggle(title.clone())), &mut notices);
    }
    for notice in &notices {
        tracing::warn!(%notice, "selection rejected");
    }

    let available_width = non_negative(layout_config.width);
    let result = layout.compute_with(&manifest.labels, &config.pill, available_width);
    tracing::info!(
        labels = manifest.labels.len(),
        rows = result.row_count(),
        width = available_width,
        "wrapped labels"
    );

    let rows = result
        .rows
        .iter()
        .map(|row| RowReport {
            y: row.y,
            width: row.width,
            height: row.height,
            labels: row
                .range
                .clone()
                .map(|i| PlacedLabel {
                    label: manifest.labels[i].clone(),
                    frame: result.frames[i],
                    rank: selection.rank(&manifest.labels[i].title),
                })
                .collect(),
        })
        .collect();

    Ok(WrapReport {
        available_width,
        spacing: layout.spacing,
        rows,
        size: result.size,
        notices,
    })
}

fn collect_notices(command: Command, notices: &mut Vec<String>) {
    match command {
        Command::None => {}
        Command::Notify(message) => notices.push(message),
        Command::Batch(commands) => {
            for command in commands {
                collect_notices(command, notices);
            }
        }
    }
}

/// Render a wrap report.
pub fn render_wrap(report: &WrapReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            for row in &report.rows {
                let pills: Vec<String> = row.labels.iter().map(pill_text).collect();
                let _ = writeln!(out, "{}", pills.join(" "));
            }
            let _ = writeln!(
                out,
                "{} rows, {:.1} x {:.1} in {:.1} wide",
                report.rows.len(),
                report.size.width,
                report.size.height,
                report.available_width
            );
            for notice in &report.notices {
                let _ = writeln!(out, "note: {notice}");
            }
            Ok(out)
        }
    }
}

fn pill_text(placed: &PlacedLabel) -> String {
    let mut text = String::new();
    if let Some(icon) = &placed.label.icon {
        text.push_str(icon);
        text.push(' ');
    }
    text.push_str(&placed.label.title);
    if let Some(rank) = placed.rank {
        let _ = write!(text, " #{rank}");
    }
    format!("[{text}]")
}

/// Load a manifest and run [`wrap_report`] + [`render_wrap`].
pub fn wrap(
    manifest_path: &std::path::Path,
    config: &Config,
    options: &WrapOptions,
) -> Result<String, CliError> {
    let manifest = LabelManifest::load(manifest_path)?;
    let report = wrap_report(&manifest, config, options)?;
    render_wrap(&report, options.format)
}

// =============================================================================
// color
// =============================================================================

/// Describe each hex color; malformed input is black unless `strict`.
pub fn color(inputs: &[String], strict: bool) -> Result<String, CliError> {
    let mut out = String::new();
    for input in inputs {
        let parsed = match Color::from_hex(input) {
            Ok(color) => color,
            Err(source) if strict => {
                return Err(CliError::Color {
                    input: input.clone(),
                    source,
                })
            }
            Err(source) => {
                tracing::warn!(%input, %source, "falling back to black");
                Color::BLACK
            }
        };
        let [a, r, g, b] = parsed.to_argb8();
        let _ = writeln!(
            out,
            "{input}: argb({a}, {r}, {g}, {b}) {}",
            parsed.to_hex_argb()
        );
    }
    Ok(out)
}

// =============================================================================
// ruler
// =============================================================================

/// Options for [`ruler`].
#[derive(Debug, Clone, PartialEq)]
pub struct RulerOptions {
    /// Current value
    pub value: f64,
    /// Drag distance in pixels
    pub drag: f64,
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
    /// Quantization step
    pub step: f64,
    /// Pixels per unit
    pub pixels_per_unit: f64,
    /// Strip moves under a fixed marker
    pub inverted: bool,
    /// Unit suffix
    pub unit: String,
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            value: 148.9,
            drag: 0.0,
            min: 66.0,
            max: 330.0,
            step: RulerScale::DEFAULT_STEP,
            pixels_per_unit: RulerScale::DEFAULT_TICK_SPACING / RulerScale::DEFAULT_STEP,
            inverted: false,
            unit: "lbs".to_string(),
        }
    }
}

/// Apply a drag to a ruler value and format the result.
#[must_use]
pub fn ruler(options: &RulerOptions) -> String {
    let scale = RulerScale::new(options.min, options.max)
        .step(options.step)
        .pixels_per_unit(options.pixels_per_unit)
        .inverted(options.inverted);
    let value = scale.apply_drag(options.value, options.drag);
    tracing::debug!(from = options.value, drag = options.drag, to = value, "ruler drag");

    let decimals = decimals_for(scale.get_step());
    if options.unit.is_empty() {
        format!("{value:.decimals$}\n")
    } else {
        format!("{value:.decimals$} {}\n", options.unit)
    }
}

/// Decimal places needed to show multiples of `step`.
fn decimals_for(step: f64) -> usize {
    if step <= 0.0 {
        return 2;
    }
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 6 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

// =============================================================================
// radar
// =============================================================================

/// Options for [`radar`].
#[derive(Debug, Clone, PartialEq)]
pub struct RadarOptions {
    /// Category values in [0, 1]
    pub values: Vec<f32>,
    /// Chart width
    pub width: f32,
    /// Chart height
    pub height: f32,
    /// Space reserved for labels
    pub margin: f32,
    /// Number of grid rings
    pub levels: usize,
    /// Label distance beyond the outer ring
    pub label_offset: f32,
}

impl Default for RadarOptions {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            width: 300.0,
            height: 300.0,
            margin: RadarGeometry::DEFAULT_LABEL_MARGIN,
            levels: 3,
            label_offset: 30.0,
        }
    }
}

/// Geometry of a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarReport {
    /// Chart center
    pub center: Point,
    /// Outer radius
    pub radius: f32,
    /// Data polygon vertices
    pub polygon: Vec<Point>,
    /// Grid rings, innermost first
    pub rings: Vec<Vec<Point>>,
    /// Axis end points
    pub spokes: Vec<Point>,
    /// Label anchors
    pub labels: Vec<Point>,
}

/// Compute radar chart geometry as JSON.
pub fn radar(options: &RadarOptions) -> Result<String, CliError> {
    let bounds = Rect::new(0.0, 0.0, options.width.max(0.0), options.height.max(0.0));
    let geometry = RadarGeometry::fit(bounds, options.margin);
    let count = options.values.len();

    let report = RadarReport {
        center: geometry.center,
        radius: geometry.radius,
        polygon: geometry.data_polygon(&options.values),
        rings: geometry.rings(count, options.levels),
        spokes: geometry.spokes(count).into_iter().map(|(_, end)| end).collect(),
        labels: geometry.label_points(count, options.label_offset),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
