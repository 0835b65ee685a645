//! Strongly-typed numeric primitives for locator (zero-cost newtypes).
//!
//! All canvas coordinates are `Length`s in the canvas' own user units with y
//! growing downward. Ratios between lengths are `Scalar`s and can only be
//! produced through [`Length::checked_div`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use glam::DVec2;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// A distance or coordinate in canvas units
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_non_negative(val)?;
        if val == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(len)
        }
    }

    #[inline]
    pub fn min(self, other: Length) -> Length {
        Length(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Length) -> Length {
        Length(self.0.max(other.0))
    }

    /// Clamp into `[lower, upper]`, letting `lower` win when the range is empty
    #[inline]
    pub fn clamp_low(self, lower: Length, upper: Length) -> Length {
        self.min(upper).max(lower)
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Checked division returning None if divisor is zero
    #[inline]
    pub fn checked_div(self, rhs: Length) -> Option<Scalar> {
        if rhs.0 == 0.0 {
            None
        } else {
            Some(Scalar(self.0 / rhs.0))
        }
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length { Length(self.0 + rhs.0) }
}
impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length { Length(self.0 - rhs.0) }
}
impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length { Length(self.0 * rhs) }
}
impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length { Length(self.0 / rhs) }
}

// NOTE: Length / Length is intentionally NOT implemented as a trait.
// Use Length::checked_div() which returns Option<Scalar> and handles zero divisor.

/// Unitless scalar (aspect ratios, scale factors)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Scalar(pub f64);

impl Scalar {
    pub const ZERO: Scalar = Scalar(0.0);

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// Scalar * Length = Length (scaling a length)
impl Mul<Length> for Scalar {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self.0 * rhs.0)
    }
}

/// Length * Scalar = Length (scaling a length)
impl Mul<Scalar> for Length {
    type Output = Length;
    fn mul(self, rhs: Scalar) -> Length {
        Length(self.0 * rhs.0)
    }
}

/// Length / Scalar = Length (undoing a scale)
impl Div<Scalar> for Length {
    type Output = Length;
    fn div(self, rhs: Scalar) -> Length {
        Length(self.0 / rhs.0)
    }
}

/// Canvas extents
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: Length,
    pub height: Length,
}

impl Size {
    /// Create a Size (unchecked).
    /// Use `try_new` for values coming from a map source.
    pub fn new(width: f64, height: f64) -> Self {
        Size { width: Length(width), height: Length(height) }
    }

    /// Create a Size with validation (both extents finite and positive)
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Size {
            width: Length::try_positive(width)?,
            height: Length::try_positive(height)?,
        })
    }

    /// The larger of the two extents
    pub fn longest_side(&self) -> Length {
        self.width.max(self.height)
    }
}

/// Axis-aligned rectangle, origin at its top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    /// Create a Rect (unchecked).
    /// Use `try_new` for values coming from a map source.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x: Length(x),
            y: Length(y),
            width: Length(width),
            height: Length(height),
        }
    }

    /// Create a Rect with validation (finite origin, non-negative size)
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Rect {
            x: Length::try_new(x)?,
            y: Length::try_new(y)?,
            width: Length::try_non_negative(width)?,
            height: Length::try_non_negative(height)?,
        })
    }

    /// Re-validate an existing Rect (e.g. one handed over by a collaborator)
    pub fn validated(self) -> Result<Self, NumericError> {
        Self::try_new(self.x.0, self.y.0, self.width.0, self.height.0)
    }

    /// Area as a raw number (Length² has no type of its own)
    pub fn area(&self) -> f64 {
        self.width.0 * self.height.0
    }

    /// Grow by `by` on every side
    pub fn inflate(&self, by: Length) -> Rect {
        Rect {
            x: self.x - by,
            y: self.y - by,
            width: self.width + by * 2.0,
            height: self.height + by * 2.0,
        }
    }

    pub fn right(&self) -> Length {
        self.x + self.width
    }

    pub fn bottom(&self) -> Length {
        self.y + self.height
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x.0, self.y.0)
    }

    /// True when the two rectangles share a region of positive area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self` (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Bounding box of a set of points; `None` when there are none
pub fn bounds_of(points: &[DVec2]) -> Option<Rect> {
    let first = *points.first()?;
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p)));
    Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
}
