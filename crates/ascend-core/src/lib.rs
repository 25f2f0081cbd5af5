//! Core types for the Ascend layout toolkit.
//!
//! This crate provides foundational types used throughout Ascend:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with hex parsing
//! - Explicit view state: [`State`], [`GoalSelection`]

mod color;
mod geometry;
mod state;

pub use color::{Color, ColorParseError};
pub use geometry::{non_negative, Point, Rect, Size};
pub use state::{Command, GoalMessage, GoalSelection, State};
