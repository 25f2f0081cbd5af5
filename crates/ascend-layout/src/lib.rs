#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
//! Layout utilities for the Ascend toolkit.
//!
//! - **Wrap layout**: [`break_rows`] and [`wrap_layout`] pack measured items
//!   into rows, left to right, starting a new row when the current one is full.
//! - **Flow positioning**: [`FlowLayout`] turns wrapped rows into item frames
//!   with row alignment and line spacing; [`FlowCache`] memoizes results.
//! - **Ruler slider**: [`RulerScale`] maps drag distances to clamped,
//!   step-quantized values.
//! - **Radar charts**: [`RadarGeometry`] places category values on evenly
//!   spaced axes.
//!
//! Everything here is a pure function of its inputs and holds no shared state,
//! so it can be called from any thread.

mod cache;
mod flow;
mod radar;
mod ruler;
mod wrap;

pub use cache::{FlowCache, FlowKey};
pub use flow::{FlowAlign, FlowLayout, FlowResult, FlowRow, Measure};
pub use radar::RadarGeometry;
pub use ruler::{RulerScale, RulerTick};
pub use wrap::{break_rows, wrap_layout, wrap_layout_by, Extent, Measured, WrapRows};
