//! Geometry primitives: axes, named corners, and axis-generic rectangle access
//!
//! Everything downstream of quadrant selection is written once against an
//! [`Axis`] instead of once per physical direction. A stage that works on
//! `(x, width)` for one quadrant works on `(y, height)` for the orthogonal one
//! simply by being handed the other axis.

use std::fmt;

use glam::DVec2;

use crate::types::{Length, Rect};

/// One of the two canvas axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The orthogonal axis
    pub fn flip(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named rectangle corners (canvas y grows downward, so "top" is the smaller y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Build a corner from whether it sits at the far end of x and of y
    pub fn from_far(far_x: bool, far_y: bool) -> Corner {
        match (far_x, far_y) {
            (false, false) => Corner::TopLeft,
            (true, false) => Corner::TopRight,
            (false, true) => Corner::BottomLeft,
            (true, true) => Corner::BottomRight,
        }
    }

    /// Whether this corner sits at the far (right or bottom) end of `axis`
    pub fn is_far(self, axis: Axis) -> bool {
        match axis {
            Axis::X => matches!(self, Corner::TopRight | Corner::BottomRight),
            Axis::Y => matches!(self, Corner::BottomLeft | Corner::BottomRight),
        }
    }

    /// Swap top and bottom
    pub fn mirror_vertical(self) -> Corner {
        Corner::from_far(self.is_far(Axis::X), !self.is_far(Axis::Y))
    }

    /// Swap left and right
    pub fn mirror_horizontal(self) -> Corner {
        Corner::from_far(!self.is_far(Axis::X), self.is_far(Axis::Y))
    }

    /// Exchange the roles of the two axes (reflect across the main diagonal)
    pub fn transpose(self) -> Corner {
        Corner::from_far(self.is_far(Axis::Y), self.is_far(Axis::X))
    }
}

impl Rect {
    /// Displacement of the near edge along `axis` (x or y)
    pub fn start(&self, axis: Axis) -> Length {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Size along `axis` (width or height)
    pub fn extent(&self, axis: Axis) -> Length {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Displacement of the far edge along `axis`
    pub fn end(&self, axis: Axis) -> Length {
        self.start(axis) + self.extent(axis)
    }

    /// Copy with the span along `axis` replaced
    pub fn with_axis(self, axis: Axis, start: Length, extent: Length) -> Rect {
        match axis {
            Axis::X => Rect { x: start, width: extent, ..self },
            Axis::Y => Rect { y: start, height: extent, ..self },
        }
    }

    /// Coordinates of a named corner
    pub fn corner(&self, corner: Corner) -> DVec2 {
        let pick = |axis: Axis| {
            if corner.is_far(axis) {
                self.end(axis)
            } else {
                self.start(axis)
            }
        };
        DVec2::new(pick(Axis::X).raw(), pick(Axis::Y).raw())
    }
}
