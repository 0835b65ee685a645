//! Shapes handed to the rendering sink
//!
//! Each shape carries its geometry verbatim plus a [`Role`] telling the
//! renderer what it is. How a role is drawn (stroke widths, colours, CSS
//! classes) is up to the sink.

use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::types::{Rect, bounds_of};

use super::guideline::Guideline;
use super::placement::CloneTransform;
use super::quadrant::Quadrant;

/// What a shape is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Outline,
    QuadrantMarker,
    Guideline,
    CloneOutline,
    Clone,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Outline => "outline",
            Role::QuadrantMarker => "quadrant-marker",
            Role::Guideline => "guideline",
            Role::CloneOutline => "clone-outline",
            Role::Clone => "clone",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common behavior for all emitted shapes
#[enum_dispatch]
pub trait Shape {
    fn role(&self) -> Role;

    /// Axis-aligned bounds in canvas coordinates
    fn bounds(&self) -> Rect;

    /// Drawn with a heavier stroke
    fn emphasized(&self) -> bool {
        true
    }
}

/// Box around the highlighted region.
///
/// `source` lets a sink mark the region's own artwork as highlighted and
/// unmark it again when the sink is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineShape {
    /// Name of the region being outlined
    pub source: String,
    pub rect: Rect,
    /// Only set once an inset was drawn for the region
    pub emphasized: bool,
}

impl OutlineShape {
    pub fn new(source: &str, rect: Rect, emphasized: bool) -> Self {
        Self {
            source: source.to_string(),
            rect,
            emphasized,
        }
    }
}

impl Shape for OutlineShape {
    fn role(&self) -> Role {
        Role::Outline
    }
    fn bounds(&self) -> Rect {
        self.rect
    }
    fn emphasized(&self) -> bool {
        self.emphasized
    }
}

/// The quadrant the clone was placed in
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantShape {
    pub quadrant: Quadrant,
}

impl Shape for QuadrantShape {
    fn role(&self) -> Role {
        Role::QuadrantMarker
    }
    fn bounds(&self) -> Rect {
        self.quadrant.rect
    }
    fn emphasized(&self) -> bool {
        false
    }
}

/// Closed polygon between region and clone
#[derive(Debug, Clone, PartialEq)]
pub struct GuidelineShape {
    pub guideline: Guideline,
}

impl Shape for GuidelineShape {
    fn role(&self) -> Role {
        Role::Guideline
    }
    fn bounds(&self) -> Rect {
        bounds_of(&self.guideline.points).unwrap_or_default()
    }
}

/// Frame around the enlarged copy
#[derive(Debug, Clone, PartialEq)]
pub struct CloneOutlineShape {
    pub rect: Rect,
}

impl Shape for CloneOutlineShape {
    fn role(&self) -> Role {
        Role::CloneOutline
    }
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// The region's artwork again, enlarged by `transform`
#[derive(Debug, Clone, PartialEq)]
pub struct CloneShape {
    /// Name of the region being duplicated
    pub source: String,
    /// Identifier for the duplicate (`<source>_enlarged`)
    pub id: String,
    pub rect: Rect,
    pub transform: CloneTransform,
}

impl CloneShape {
    pub fn new(source: &str, rect: Rect, transform: CloneTransform) -> Self {
        Self {
            source: source.to_string(),
            id: format!("{source}_enlarged"),
            rect,
            transform,
        }
    }
}

impl Shape for CloneShape {
    fn role(&self) -> Role {
        Role::Clone
    }
    fn bounds(&self) -> Rect {
        self.rect
    }
    fn emphasized(&self) -> bool {
        false
    }
}

/// A shape enum wrapping all shape types
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEnum {
    Outline(OutlineShape),
    QuadrantMarker(QuadrantShape),
    Guideline(GuidelineShape),
    CloneOutline(CloneOutlineShape),
    Clone(CloneShape),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::quadrant::Direction;
    use crate::types::Scalar;
    use glam::DVec2;

    #[test]
    fn dispatch_reaches_each_variant() {
        let outline: ShapeEnum = OutlineShape::new("Cuba", Rect::new(90.0, 40.0, 60.0, 40.0), false).into();
        assert_eq!(outline.role(), Role::Outline);
        assert!(!outline.emphasized());
        match outline {
            ShapeEnum::Outline(shape) => assert_eq!(shape.source, "Cuba"),
            other => panic!("expected an outline, got {other:?}"),
        }

        let quadrant: ShapeEnum = QuadrantShape {
            quadrant: Quadrant {
                direction: Direction::Bottom,
                rect: Rect::new(0.0, 80.0, 400.0, 220.0),
            },
        }
        .into();
        assert_eq!(quadrant.role(), Role::QuadrantMarker);
        assert_eq!(quadrant.bounds(), Rect::new(0.0, 80.0, 400.0, 220.0));
    }

    #[test]
    fn guideline_bounds_cover_points() {
        let shape: ShapeEnum = GuidelineShape {
            guideline: Guideline {
                points: [
                    DVec2::new(140.0, 70.0),
                    DVec2::new(225.0, 95.0),
                    DVec2::new(25.0, 95.0),
                    DVec2::new(100.0, 70.0),
                ],
                vertical_flip: false,
                horizontal_flip: false,
            },
        }
        .into();
        assert_eq!(shape.role(), Role::Guideline);
        assert_eq!(shape.bounds(), Rect::new(25.0, 70.0, 200.0, 25.0));
        assert!(shape.emphasized());
    }

    #[test]
    fn clone_shape_is_named_after_source() {
        let transform = CloneTransform {
            scale: Scalar(5.0),
            translate: DVec2::new(-95.0, -31.0),
        };
        let clone = CloneShape::new("Cuba", Rect::new(25.0, 95.0, 200.0, 100.0), transform);
        assert_eq!(clone.id, "Cuba_enlarged");
        assert_eq!(ShapeEnum::from(clone).role().as_str(), "clone");
    }
}
