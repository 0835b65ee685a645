//! Edge placement: position the sized clone inside its quadrant
//!
//! The clone has one *fixed* edge, pinned `padding` away from the region on
//! the side facing the quadrant, and one *floating* edge that centres the
//! clone on the region but is clamped to stay inside the quadrant.

use std::fmt;

use glam::DVec2;

use crate::types::{Length, Rect, Scalar, Size};

use super::geometry::Axis;
use super::sizing::CloneSize;

/// The positioned clone and the parameters that placed it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub clone: Rect,
    /// Axis the floating coordinate lies on; the fixed coordinate is on the other one
    pub dividing_axis: Axis,
    pub padding: Length,
}

impl Placement {
    pub fn fixed_axis(&self) -> Axis {
        self.dividing_axis.flip()
    }

    /// Transform that maps `region` onto the clone
    pub fn transform(&self, region: &Rect, scale: Scalar) -> CloneTransform {
        CloneTransform {
            scale,
            translate: self.clone.origin() / scale.raw() - region.origin(),
        }
    }
}

/// X for top/bottom quadrants (they are shorter than the canvas), Y for
/// left/right quadrants (they span its full height).
pub fn dividing_axis(quadrant: &Rect, canvas: Size) -> Axis {
    if quadrant.height < canvas.height {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Near edge of the clone on the fixed axis.
///
/// Quadrants further along the axis than the region put the clone after the
/// region's far edge; otherwise the clone ends `padding` before its near edge.
pub fn fixed_edge(
    quadrant_start: Length,
    region_start: Length,
    region_extent: Length,
    clone_extent: Length,
    padding: Length,
) -> Length {
    if quadrant_start > region_start {
        region_start + region_extent + padding
    } else {
        region_start - clone_extent - padding
    }
}

/// Near edge of the clone on the floating axis: centred on the region,
/// clamped to `[quadrant_start + padding, quadrant_end - clone_extent - padding]`.
pub fn floating_edge(
    quadrant_start: Length,
    quadrant_extent: Length,
    region_start: Length,
    region_extent: Length,
    clone_extent: Length,
    padding: Length,
) -> Length {
    let ideal = region_start + (region_extent - clone_extent) / 2.0;
    let lower = quadrant_start + padding;
    let upper = quadrant_start + quadrant_extent - clone_extent - padding;
    ideal.clamp_low(lower, upper)
}

pub fn place_clone(
    quadrant: &Rect,
    region: &Rect,
    size: &CloneSize,
    canvas: Size,
    padding: Length,
) -> Placement {
    let floating = dividing_axis(quadrant, canvas);
    let fixed = floating.flip();

    let float_start = floating_edge(
        quadrant.start(floating),
        quadrant.extent(floating),
        region.start(floating),
        region.extent(floating),
        size.extent(floating),
        padding,
    );
    let fixed_start = fixed_edge(
        quadrant.start(fixed),
        region.start(fixed),
        region.extent(fixed),
        size.extent(fixed),
        padding,
    );

    let clone = Rect::default()
        .with_axis(floating, float_start, size.extent(floating))
        .with_axis(fixed, fixed_start, size.extent(fixed));
    Placement {
        clone,
        dividing_axis: floating,
        padding,
    }
}

/// `scale(s) translate(tx ty)`: a point `p` of the region lands on `s * (p + t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloneTransform {
    pub scale: Scalar,
    pub translate: DVec2,
}

impl CloneTransform {
    pub fn apply(&self, point: DVec2) -> DVec2 {
        (point + self.translate) * self.scale.raw()
    }
}

impl fmt::Display for CloneTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use super::report::fmt_num;
        write!(
            f,
            "scale({}) translate({} {})",
            fmt_num(self.scale.raw()),
            fmt_num(self.translate.x),
            fmt_num(self.translate.y)
        )
    }
}
