//! Guideline: the trapezoid joining the facing edges of region and clone

use glam::DVec2;

use crate::types::Rect;

use super::geometry::{Axis, Corner};
use super::placement::Placement;

/// Four points: region corner, clone corner, clone corner, region corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guideline {
    pub points: [DVec2; 4],
    /// Clone sits above the region
    pub vertical_flip: bool,
    /// Clone sits left of the region
    pub horizontal_flip: bool,
}

/// Corners for a clone below the region, before any transposing or mirroring
const REGION_NEAR: [Corner; 2] = [Corner::BottomLeft, Corner::BottomRight];
const CLONE_NEAR: [Corner; 2] = [Corner::TopLeft, Corner::TopRight];

pub fn guideline(region: &Rect, placement: &Placement) -> Guideline {
    let axis = placement.dividing_axis;
    let fixed = placement.fixed_axis();
    let before = placement.clone.start(fixed) < region.start(fixed);
    let vertical_flip = before && axis == Axis::X;
    let horizontal_flip = before && axis == Axis::Y;
    let transposed = axis == Axis::Y;

    let orient = |corner: Corner| {
        let corner = if transposed { corner.transpose() } else { corner };
        let corner = if vertical_flip { corner.mirror_vertical() } else { corner };
        if horizontal_flip { corner.mirror_horizontal() } else { corner }
    };

    let clone = &placement.clone;
    let mut points = [
        region.corner(orient(REGION_NEAR[0])),
        clone.corner(orient(CLONE_NEAR[0])),
        clone.corner(orient(CLONE_NEAR[1])),
        region.corner(orient(REGION_NEAR[1])),
    ];
    // Transposing and mirroring each reverse the winding of the base order,
    // which is anticlockwise on screen.
    if transposed == before {
        points.reverse();
    }

    Guideline {
        points,
        vertical_flip,
        horizontal_flip,
    }
}

/// Shoelace sum over the closed polygon; positive is clockwise on a y-down canvas
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Length;

    fn placed(clone: Rect, dividing_axis: Axis) -> Placement {
        Placement {
            clone,
            dividing_axis,
            padding: Length(25.0),
        }
    }

    fn pts(coords: [(f64, f64); 4]) -> [DVec2; 4] {
        coords.map(|(x, y)| DVec2::new(x, y))
    }

    #[test]
    fn clone_below() {
        let region = Rect::new(100.0, 50.0, 40.0, 20.0);
        let g = guideline(&region, &placed(Rect::new(25.0, 95.0, 200.0, 100.0), Axis::X));
        assert!(!g.vertical_flip && !g.horizontal_flip);
        assert_eq!(
            g.points,
            pts([(140.0, 70.0), (225.0, 95.0), (25.0, 95.0), (100.0, 70.0)])
        );
    }

    #[test]
    fn clone_above() {
        let region = Rect::new(180.0, 250.0, 40.0, 20.0);
        let g = guideline(&region, &placed(Rect::new(100.0, 125.0, 200.0, 100.0), Axis::X));
        assert!(g.vertical_flip && !g.horizontal_flip);
        assert_eq!(
            g.points,
            pts([(180.0, 250.0), (100.0, 225.0), (300.0, 225.0), (220.0, 250.0)])
        );
    }

    #[test]
    fn clone_right() {
        let region = Rect::new(20.0, 100.0, 20.0, 40.0);
        let g = guideline(&region, &placed(Rect::new(65.0, 45.0, 75.0, 150.0), Axis::Y));
        assert!(!g.vertical_flip && !g.horizontal_flip);
        assert_eq!(
            g.points,
            pts([(40.0, 100.0), (65.0, 45.0), (65.0, 195.0), (40.0, 140.0)])
        );
    }

    #[test]
    fn clone_left() {
        let region = Rect::new(340.0, 250.0, 20.0, 40.0);
        let g = guideline(&region, &placed(Rect::new(240.0, 125.0, 75.0, 150.0), Axis::Y));
        assert!(!g.vertical_flip && g.horizontal_flip);
        assert_eq!(
            g.points,
            pts([(340.0, 290.0), (315.0, 275.0), (315.0, 125.0), (340.0, 250.0)])
        );
    }

    #[test]
    fn winding_is_consistent_for_every_side() {
        let cases = [
            (Rect::new(100.0, 50.0, 40.0, 20.0), Rect::new(25.0, 95.0, 200.0, 100.0), Axis::X),
            (Rect::new(180.0, 250.0, 40.0, 20.0), Rect::new(100.0, 125.0, 200.0, 100.0), Axis::X),
            (Rect::new(20.0, 100.0, 20.0, 40.0), Rect::new(65.0, 45.0, 75.0, 150.0), Axis::Y),
            (Rect::new(340.0, 250.0, 20.0, 40.0), Rect::new(240.0, 125.0, 75.0, 150.0), Axis::Y),
        ];
        for (region, clone, axis) in cases {
            let g = guideline(&region, &placed(clone, axis));
            assert!(signed_area(&g.points) > 0.0, "{:?}", g.points);
        }
    }

    #[test]
    fn connects_facing_edges() {
        // Region points sit on the region edge facing the clone and vice versa.
        let region = Rect::new(340.0, 250.0, 20.0, 40.0);
        let clone = Rect::new(240.0, 125.0, 75.0, 150.0);
        let g = guideline(&region, &placed(clone, Axis::Y));
        assert_eq!(g.points[0].x, region.x.raw());
        assert_eq!(g.points[3].x, region.x.raw());
        assert_eq!(g.points[1].x, clone.right().raw());
        assert_eq!(g.points[2].x, clone.right().raw());
    }

    #[test]
    fn signed_area_of_unit_square() {
        let cw = pts([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        assert_eq!(signed_area(&cw), 1.0);
        let mut ccw = cw;
        ccw.reverse();
        assert_eq!(signed_area(&ccw), -1.0);
    }
}
