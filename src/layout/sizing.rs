//! Clone sizing: the largest aspect-preserving enlargement that fits

use crate::log::trace;
use crate::types::{Length, Rect, Scalar, Size};

use super::AbortReason;
use super::geometry::Axis;
use super::options::LayoutOptions;

/// Size of the enlarged copy, before it has a position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloneSize {
    pub width: Length,
    pub height: Length,
    /// Ratio between clone and region (identical on both axes)
    pub scale: Scalar,
}

impl CloneSize {
    pub fn extent(&self, axis: Axis) -> Length {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Fit the clone into `quadrant` with `padding` reserved on both sides.
///
/// The clone is capped at `max_clone_fraction` of the canvas per axis, then
/// shrunk on whichever axis is not the binding constraint so it keeps the
/// region's aspect ratio. A clone that would not be at least `min_scale`
/// times the region is abandoned.
pub fn size_clone(
    quadrant: &Rect,
    region: &Rect,
    canvas: Size,
    padding: Length,
    options: &LayoutOptions,
) -> Result<CloneSize, AbortReason> {
    let mut width = (quadrant.width - padding * 2.0).min(canvas.width * options.max_clone_fraction);
    let mut height =
        (quadrant.height - padding * 2.0).min(canvas.height * options.max_clone_fraction);
    if width <= Length::ZERO || height <= Length::ZERO {
        return Err(AbortReason::DegenerateClone);
    }

    let aspect = region
        .width
        .checked_div(region.height)
        .filter(|a| a.is_finite() && *a > Scalar::ZERO)
        .ok_or(AbortReason::DegenerateClone)?;

    if height * aspect < width {
        width = height * aspect;
    } else if width / aspect < height {
        height = width / aspect;
    }

    let scale = width
        .checked_div(region.width)
        .ok_or(AbortReason::DegenerateClone)?;
    trace!(width = width.raw(), height = height.raw(), scale = scale.raw(), "clone size");
    if scale < options.min_scale {
        return Err(AbortReason::ScaleBelowMinimum { scale });
    }

    Ok(CloneSize { width, height, scale })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Size {
        Size::new(400.0, 300.0)
    }

    fn size(quadrant: Rect, region: Rect) -> Result<CloneSize, AbortReason> {
        let options = LayoutOptions::default();
        size_clone(&quadrant, &region, canvas(), options.padding(canvas()), &options)
    }

    #[test]
    fn width_bound_region_shrinks_height() {
        let quadrant = Rect::new(0.0, 70.0, 400.0, 230.0);
        let region = Rect::new(100.0, 50.0, 40.0, 20.0);
        let clone = size(quadrant, region).expect("fits");
        assert_eq!(clone.width, Length(200.0));
        assert_eq!(clone.height, Length(100.0));
        assert_eq!(clone.scale, Scalar(5.0));
    }

    #[test]
    fn height_bound_region_shrinks_width() {
        let quadrant = Rect::new(40.0, 0.0, 360.0, 300.0);
        let region = Rect::new(20.0, 100.0, 20.0, 40.0);
        let clone = size(quadrant, region).expect("fits");
        assert_eq!(clone.width, Length(75.0));
        assert_eq!(clone.height, Length(150.0));
        assert_eq!(clone.scale, Scalar(3.75));
    }

    #[test]
    fn clone_respects_half_canvas_cap_and_aspect() {
        let region = Rect::new(150.0, 10.0, 30.0, 7.0);
        let quadrant = Rect::new(0.0, 17.0, 400.0, 283.0);
        let clone = size(quadrant, region).expect("fits");
        assert!(clone.width <= Length(200.0));
        assert!(clone.height <= Length(150.0));
        let clone_aspect = clone.width.raw() / clone.height.raw();
        assert!((clone_aspect - 30.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn small_enlargement_is_abandoned() {
        let quadrant = Rect::new(60.0, 0.0, 340.0, 300.0);
        let region = Rect::new(20.0, 100.0, 40.0, 80.0);
        assert_eq!(
            size(quadrant, region),
            Err(AbortReason::ScaleBelowMinimum { scale: Scalar(1.875) })
        );
    }

    #[test]
    fn quadrant_thinner_than_padding_is_degenerate() {
        let quadrant = Rect::new(380.0, 0.0, 20.0, 300.0);
        let region = Rect::new(0.0, 0.0, 380.0, 290.0);
        assert_eq!(size(quadrant, region), Err(AbortReason::DegenerateClone));
    }

    #[test]
    fn flat_region_is_degenerate() {
        let quadrant = Rect::new(0.0, 70.0, 400.0, 230.0);
        let region = Rect::new(100.0, 70.0, 40.0, 0.0);
        assert_eq!(size(quadrant, region), Err(AbortReason::DegenerateClone));
    }
}
