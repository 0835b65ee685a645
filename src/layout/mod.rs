//! Inset layout for a highlighted map region
//!
//! This module is organized into submodules:
//! - `defaults`: Default padding, cap and scale floor
//! - `options`: `LayoutOptions` built from the defaults
//! - `geometry`: Axes, named corners and axis-generic rectangle access
//! - `quadrant`: Choosing the largest empty band beside the region
//! - `sizing`: Sizing the enlarged clone
//! - `placement`: Fixed and floating edges of the clone
//! - `guideline`: The trapezoid joining region and clone
//! - `shapes`: Role-tagged shapes handed to a renderer
//! - `report`: Plain-text rendering of a `Highlight`

pub mod defaults;
pub mod geometry;
pub mod guideline;
pub mod options;
pub mod placement;
pub mod quadrant;
pub mod report;
pub mod shapes;
pub mod sizing;

pub use geometry::{Axis, Corner};
pub use guideline::Guideline;
pub use options::LayoutOptions;
pub use placement::{CloneTransform, Placement};
pub use quadrant::{Direction, Quadrant};
pub use shapes::{Role, Shape, ShapeEnum};
pub use sizing::CloneSize;

use crate::log::debug;
use crate::types::{Length, Rect, Scalar, Size};

use shapes::{CloneOutlineShape, CloneShape, GuidelineShape, OutlineShape, QuadrantShape};

/// Progress of a single highlight request, in pipeline order.
///
/// Every stage is logged as the request passes through it. A finished
/// [`Highlight`] only ever reports where it stopped: `Done`, or the stage an
/// [`AbortReason`] was raised at (`RegionSelected` or `QuadrantFound`). Once a
/// clone is sized nothing can stop the request, so `CloneSized`, `Placed` and
/// `GuidelinesDrawn` are never final. `Idle` is the state before a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Idle,
    RegionSelected,
    QuadrantFound,
    CloneSized,
    Placed,
    GuidelinesDrawn,
    Done,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::RegionSelected => "region-selected",
            Stage::QuadrantFound => "quadrant-found",
            Stage::CloneSized => "clone-sized",
            Stage::Placed => "placed",
            Stage::GuidelinesDrawn => "guidelines-drawn",
            Stage::Done => "done",
        }
    }
}

/// Why a request stopped before producing an inset. None of these are errors:
/// the region is still outlined, it just gets no enlarged copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AbortReason {
    /// Every band around the region is empty
    NoQuadrant,
    /// The quadrant leaves no room once padded, or the region has no area
    DegenerateClone,
    /// The clone would be enlarged by less than the configured minimum
    ScaleBelowMinimum { scale: Scalar },
}

impl AbortReason {
    /// Last stage reached before stopping
    pub fn stage(&self) -> Stage {
        match self {
            AbortReason::NoQuadrant => Stage::RegionSelected,
            AbortReason::DegenerateClone | AbortReason::ScaleBelowMinimum { .. } => {
                Stage::QuadrantFound
            }
        }
    }
}

/// Everything drawn beyond the outline
#[derive(Debug, Clone, PartialEq)]
pub struct Inset {
    pub quadrant: Quadrant,
    pub size: CloneSize,
    pub placement: Placement,
    pub guideline: Guideline,
    pub transform: CloneTransform,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Inset(Inset),
    Aborted(AbortReason),
}

/// Result of one highlight request
#[derive(Debug, Clone, PartialEq)]
pub struct Highlight {
    /// The outlined region the layout was computed for
    pub region: Rect,
    pub canvas: Size,
    pub outcome: Outcome,
}

impl Highlight {
    /// The stage the request stopped at: `Done`, `RegionSelected` or `QuadrantFound`
    pub fn stage(&self) -> Stage {
        match &self.outcome {
            Outcome::Inset(_) => Stage::Done,
            Outcome::Aborted(reason) => reason.stage(),
        }
    }

    pub fn inset(&self) -> Option<&Inset> {
        match &self.outcome {
            Outcome::Inset(inset) => Some(inset),
            Outcome::Aborted(_) => None,
        }
    }

    pub fn abort_reason(&self) -> Option<AbortReason> {
        match &self.outcome {
            Outcome::Inset(_) => None,
            Outcome::Aborted(reason) => Some(*reason),
        }
    }

    /// Shapes to hand to a renderer, in drawing order.
    ///
    /// The outline is always present. Quadrant marker, guideline, clone outline
    /// and clone only appear when the inset was laid out.
    pub fn shapes(&self, region_name: &str) -> Vec<ShapeEnum> {
        let mut shapes = vec![ShapeEnum::from(OutlineShape::new(
            region_name,
            self.region,
            self.inset().is_some(),
        ))];
        if let Some(inset) = self.inset() {
            let clone = inset.placement.clone;
            shapes.push(QuadrantShape { quadrant: inset.quadrant }.into());
            shapes.push(GuidelineShape { guideline: inset.guideline }.into());
            shapes.push(CloneOutlineShape { rect: clone }.into());
            shapes.push(CloneShape::new(region_name, clone, inset.transform).into());
        }
        shapes
    }
}

/// Lay out an enlarged inset for `region` on a canvas of size `canvas`.
///
/// `region` is used as given; the outline padding in `options` is applied by
/// the [`Highlighter`](crate::Highlighter), not here. Same inputs always give
/// the same `Highlight`.
pub fn locate(region: Rect, canvas: Size, options: &LayoutOptions) -> Highlight {
    debug!(stage = Stage::RegionSelected.as_str(), %region, %canvas, "locate");
    let outcome = match build_inset(&region, canvas, options) {
        Ok(inset) => {
            debug!(stage = Stage::Done.as_str(), clone = %inset.placement.clone, "inset laid out");
            Outcome::Inset(inset)
        }
        Err(reason) => {
            debug!(stage = reason.stage().as_str(), %reason, "inset abandoned");
            Outcome::Aborted(reason)
        }
    };
    Highlight {
        region,
        canvas,
        outcome,
    }
}

fn build_inset(region: &Rect, canvas: Size, options: &LayoutOptions) -> Result<Inset, AbortReason> {
    let quadrant = quadrant::largest_quadrant(region, canvas).ok_or(AbortReason::NoQuadrant)?;
    debug!(stage = Stage::QuadrantFound.as_str(), direction = %quadrant.direction, rect = %quadrant.rect);

    let padding: Length = options.padding(canvas);
    let size = sizing::size_clone(&quadrant.rect, region, canvas, padding, options)?;
    debug!(stage = Stage::CloneSized.as_str(), scale = size.scale.raw());

    let placement = placement::place_clone(&quadrant.rect, region, &size, canvas, padding);
    debug!(stage = Stage::Placed.as_str(), axis = %placement.dividing_axis, clone = %placement.clone);

    let guideline = guideline::guideline(region, &placement);
    debug!(stage = Stage::GuidelinesDrawn.as_str());

    let transform = placement.transform(region, size.scale);
    Ok(Inset {
        quadrant,
        size,
        placement,
        guideline,
        transform,
    })
}
