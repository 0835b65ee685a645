//! Default layout settings (canvas units unless noted)

use crate::types::{Length, Scalar};

/// Gap between the region artwork and its highlight outline.
pub const OUTLINE_PADDING: Length = Length(10.0);
/// Padding around the clone is the canvas' longest side divided by this.
pub const PADDING_DIVISOR: f64 = 16.0;
/// The clone never exceeds this fraction of the canvas on either axis.
pub const MAX_CLONE_FRACTION: f64 = 0.5;
/// Enlargements smaller than this are not worth drawing.
pub const MIN_SCALE: Scalar = Scalar(2.0);
