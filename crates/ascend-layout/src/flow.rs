//! Flow positioning: stacks wrapped rows vertically and places items.

use ascend_core::{non_negative, Rect, Size};
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::wrap::break_rows;

/// Horizontal alignment of each row inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowAlign {
    /// Rows start at the left edge
    #[default]
    Leading,
    /// Rows are centered
    Center,
    /// Rows end at the right edge
    Trailing,
}

impl FlowAlign {
    /// Offset of a row of `row_width` inside `available` width.
    ///
    /// Never negative, so oversized rows stay anchored at the left edge.
    #[must_use]
    pub fn offset(self, available: f32, row_width: f32) -> f32 {
        let free = non_negative(available - row_width);
        match self {
            Self::Leading => 0.0,
            Self::Center => free / 2.0,
            Self::Trailing => free,
        }
    }
}

impl std::str::FromStr for FlowAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "leading" | "left" | "start" => Ok(Self::Leading),
            "center" => Ok(Self::Center),
            "trailing" | "right" | "end" => Ok(Self::Trailing),
            other => Err(format!("unknown alignment '{other}'")),
        }
    }
}

/// Supplies the natural size of an item.
///
/// This is the seam to the host's text or element measurement.
pub trait Measure<T: ?Sized> {
    /// Natural size of `item` with unconstrained width.
    fn measure(&self, item: &T) -> Size;
}

impl<T: ?Sized, F> Measure<T> for F
where
    F: Fn(&T) -> Size,
{
    fn measure(&self, item: &T) -> Size {
        self(item)
    }
}

/// A positioned row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRow {
    /// Indices of the items in this row
    pub range: Range<usize>,
    /// Occupied width including inter-item spacing
    pub width: f32,
    /// Height of the tallest item
    pub height: f32,
    /// Top edge of the row
    pub y: f32,
}

/// Result of a flow layout pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowResult {
    /// Rows in top-to-bottom order
    pub rows: Vec<FlowRow>,
    /// Frame of each item, in input order
    pub frames: Vec<Rect>,
    /// Bounding size of the content
    pub size: Size,
}

impl FlowResult {
    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Wrapping flow layout with fixed spacing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlowLayout {
    /// Gap between items in a row
    pub spacing: f32,
    /// Gap between rows; `None` reuses `spacing`
    pub line_spacing: Option<f32>,
    /// Horizontal row alignment
    pub align: FlowAlign,
}

impl FlowLayout {
    /// Create a layout with zero spacing and leading alignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between items.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = non_negative(spacing);
        self
    }

    /// Set the gap between rows.
    #[must_use]
    pub fn line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = Some(non_negative(line_spacing));
        self
    }

    /// Set row alignment.
    #[must_use]
    pub const fn align(mut self, align: FlowAlign) -> Self {
        self.align = align;
        self
    }

    /// Effective gap between rows.
    #[must_use]
    pub fn row_gap(&self) -> f32 {
        self.line_spacing.unwrap_or(self.spacing)
    }

    /// Lay out pre-measured sizes inside `available_width`.
    #[must_use]
    pub fn compute(&self, sizes: &[Size], available_width: f32) -> FlowResult {
        let available = non_negative(available_width);
        let spacing = non_negative(self.spacing);
        let row_gap = non_negative(self.row_gap());
        let sizes: Vec<Size> = sizes.iter().map(Size::sanitized).collect();
        let wrapped = break_rows(sizes.iter().map(|s| s.width), available, spacing);

        let mut rows = Vec::with_capacity(wrapped.len());
        let mut frames = Vec::with_capacity(sizes.len());
        let mut y = 0.0_f32;
        let mut content_width = 0.0_f32;

        for (index, range) in wrapped.rows().iter().enumerate() {
            if index > 0 {
                y += row_gap;
            }

            let row = &sizes[range.clone()];
            let width = row.iter().map(|s| s.width).sum::<f32>()
                + spacing * row.len().saturating_sub(1) as f32;
            let height = row.iter().map(|s| s.height).fold(0.0_f32, f32::max);

            let mut x = self.align.offset(available, width);
            for size in row {
                frames.push(Rect::new(x, y, size.width, size.height));
                x += size.width + spacing;
            }

            content_width = content_width.max(width);
            rows.push(FlowRow {
                range: range.clone(),
                width,
                height,
                y,
            });
            y += height;
        }

        FlowResult {
            rows,
            frames,
            size: Size::new(content_width, y),
        }
    }

    /// Measure `items` and lay them out inside `available_width`.
    #[must_use]
    pub fn compute_with<T, M>(&self, items: &[T], measurer: &M, available_width: f32) -> FlowResult
    where
        M: Measure<T> + ?Sized,
    {
        let sizes: Vec<Size> = items.iter().map(|item| measurer.measure(item)).collect();
        self.compute(&sizes, available_width)
    }
}
