//! Greedy wrap layout: packs items into left-to-right rows.
//!
//! Items are placed in order into the current row while they fit; the first
//! item that does not fit starts a new row. Rows are therefore contiguous runs
//! of the input, represented as index ranges.
//!
//! Spacing is charged only between neighbours in a row, so a row of `n` items
//! occupies `sum(widths) + (n - 1) * spacing`.

use ascend_core::Size;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Range};

/// Scalar type of a width. Packing compares in this precision.
pub trait Extent: Copy + PartialOrd + Add<Output = Self> {
    /// Additive identity.
    const ZERO: Self;

    /// Map negative and NaN values to zero.
    #[must_use]
    fn non_negative(self) -> Self;
}

impl Extent for f32 {
    const ZERO: Self = 0.0;

    fn non_negative(self) -> Self {
        ascend_core::non_negative(self)
    }
}

impl Extent for f64 {
    const ZERO: Self = 0.0;

    fn non_negative(self) -> Self {
        if self > 0.0 {
            self
        } else {
            0.0
        }
    }
}

/// Anything with a measured horizontal extent.
pub trait Measured {
    /// Scalar the width is measured in
    type Width: Extent;

    /// Natural width of the item.
    fn measured_width(&self) -> Self::Width;
}

impl Measured for f32 {
    type Width = Self;

    fn measured_width(&self) -> f32 {
        *self
    }
}

impl Measured for f64 {
    type Width = Self;

    fn measured_width(&self) -> f64 {
        *self
    }
}

impl Measured for Size {
    type Width = f32;

    fn measured_width(&self) -> f32 {
        self.width
    }
}

impl<T: Measured + ?Sized> Measured for &T {
    type Width = T::Width;

    fn measured_width(&self) -> T::Width {
        (**self).measured_width()
    }
}

/// Row partition produced by [`break_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapRows {
    rows: Vec<Range<usize>>,
}

impl WrapRows {
    /// Index ranges of each row, in order.
    #[must_use]
    pub fn rows(&self) -> &[Range<usize>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows (only for empty input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of items across all rows.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.rows.last().map_or(0, |r| r.end)
    }

    /// Row index holding the item at `index`.
    #[must_use]
    pub fn row_of(&self, index: usize) -> Option<usize> {
        if index >= self.item_count() {
            return None;
        }
        // Rows are sorted and contiguous
        Some(self.rows.partition_point(|r| r.end <= index))
    }

    /// Split `items` into row slices.
    ///
    /// `items` must be the slice the rows were computed from.
    pub fn split<'a, T>(&'a self, items: &'a [T]) -> impl Iterator<Item = &'a [T]> + 'a {
        self.rows.iter().map(move |r| &items[r.clone()])
    }

    /// Consume into the raw ranges.
    #[must_use]
    pub fn into_ranges(self) -> Vec<Range<usize>> {
        self.rows
    }
}

/// Partition widths into rows that fit `available_width`.
///
/// Widths are compared in their own precision (`f32` or `f64`). Negative
/// or NaN inputs are treated as zero. An item wider than
/// `available_width` is placed alone on its own row; it is never split or
/// dropped. Empty input produces no rows.
#[must_use]
pub fn break_rows<W, I>(widths: I, available_width: W, spacing: W) -> WrapRows
where
    W: Extent,
    I: IntoIterator<Item = W>,
{
    let available = available_width.non_negative();
    let spacing = spacing.non_negative();

    let mut rows: Vec<Range<usize>> = Vec::new();
    let mut used = W::ZERO;

    for (index, width) in widths.into_iter().enumerate() {
        let width = width.non_negative();

        match rows.last_mut() {
            Some(row) if used + spacing + width <= available => {
                row.end = index + 1;
                used = used + spacing + width;
            }
            _ => {
                rows.push(index..index + 1);
                used = width;
            }
        }
    }

    WrapRows { rows }
}

/// Pack measured items into rows, cloning them into the result.
///
/// ```
/// use ascend_layout::wrap_layout;
///
/// let rows = wrap_layout(&[10.0_f32, 10.0, 10.0], 25.0, 2.0);
/// assert_eq!(rows, vec![vec![10.0, 10.0], vec![10.0]]);
/// ```
#[must_use]
pub fn wrap_layout<T>(
    items: &[T],
    available_width: T::Width,
    spacing: T::Width,
) -> Vec<Vec<T>>
where
    T: Measured + Clone,
{
    wrap_layout_by(items, available_width, spacing, T::measured_width)
}

/// Pack items into rows using `width_of` to measure each one.
#[must_use]
pub fn wrap_layout_by<T, W, F>(
    items: &[T],
    available_width: W,
    spacing: W,
    mut width_of: F,
) -> Vec<Vec<T>>
where
    T: Clone,
    W: Extent,
    F: FnMut(&T) -> W,
{
    let rows = break_rows(items.iter().map(&mut width_of), available_width, spacing);
    rows.split(items).map(<[T]>::to_vec).collect()
}
