//! Quadrant selection: the largest empty band beside the region

use std::fmt;

use crate::log::trace;
use crate::types::{Length, Rect, Size};

/// Which side of the region a quadrant lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    /// Candidate order; earlier entries win area ties.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Top => "top",
            Direction::Right => "right",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate area tagged with the side it lies on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrant {
    pub direction: Direction,
    pub rect: Rect,
}

impl Quadrant {
    /// The band on `direction`'s side of `region`, spanning the whole canvas
    /// in the other dimension.
    pub fn beside(region: &Rect, canvas: Size, direction: Direction) -> Quadrant {
        let zero = Length::ZERO;
        let rect = match direction {
            Direction::Left => Rect {
                x: zero,
                y: zero,
                width: region.x,
                height: canvas.height,
            },
            Direction::Top => Rect {
                x: zero,
                y: zero,
                width: canvas.width,
                height: region.y,
            },
            Direction::Right => Rect {
                x: region.right(),
                y: zero,
                width: canvas.width - region.right(),
                height: canvas.height,
            },
            Direction::Bottom => Rect {
                x: zero,
                y: region.bottom(),
                width: canvas.width,
                height: canvas.height - region.bottom(),
            },
        };
        Quadrant { direction, rect }
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }
}

/// All four candidates, in tie-break order
pub fn candidates(region: &Rect, canvas: Size) -> [Quadrant; 4] {
    Direction::ALL.map(|direction| Quadrant::beside(region, canvas, direction))
}

/// The candidate with the largest positive area, if any.
///
/// Ties go to the earliest candidate in [`Direction::ALL`]. A region that
/// covers the canvas (or whose outline spills past every edge) has no
/// candidate with positive area and yields `None`.
pub fn largest_quadrant(region: &Rect, canvas: Size) -> Option<Quadrant> {
    let mut best: Option<Quadrant> = None;
    let mut best_area = 0.0;
    for quadrant in candidates(region, canvas) {
        let area = quadrant.area();
        trace!(direction = %quadrant.direction, area, "quadrant candidate");
        if area > best_area {
            best_area = area;
            best = Some(quadrant);
        }
    }
    best
}
