//! Layout options - the tunable constants of one highlight request

use crate::errors::ConfigError;
use crate::types::{Length, Scalar, Size};

use super::defaults;

/// Knobs for outlining, padding, clone size cap and scale floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Gap added on every side of the region's bounding box to form its outline
    pub outline_padding: Length,
    /// `padding = max(canvas.width, canvas.height) / padding_divisor`
    pub padding_divisor: f64,
    /// Upper bound for the clone as a fraction of the canvas, per axis
    pub max_clone_fraction: f64,
    /// Requests whose clone would be scaled by less than this are abandoned
    pub min_scale: Scalar,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            outline_padding: defaults::OUTLINE_PADDING,
            padding_divisor: defaults::PADDING_DIVISOR,
            max_clone_fraction: defaults::MAX_CLONE_FRACTION,
            min_scale: defaults::MIN_SCALE,
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outline_padding(mut self, padding: f64) -> Self {
        self.outline_padding = Length(padding);
        self
    }

    pub fn with_padding_divisor(mut self, divisor: f64) -> Self {
        self.padding_divisor = divisor;
        self
    }

    pub fn with_max_clone_fraction(mut self, fraction: f64) -> Self {
        self.max_clone_fraction = fraction;
        self
    }

    pub fn with_min_scale(mut self, scale: f64) -> Self {
        self.min_scale = Scalar(scale);
        self
    }

    /// Padding reserved between region, clone and quadrant edges
    pub fn padding(&self, canvas: Size) -> Length {
        canvas.longest_side() / self.padding_divisor
    }

    /// Check every option is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |option: &'static str, value: f64, reason: &'static str| {
            ConfigError::InvalidOption { option, value, reason }
        };

        let outline = self.outline_padding.raw();
        if !outline.is_finite() || outline < 0.0 {
            return Err(invalid("outline_padding", outline, "must be finite and non-negative"));
        }
        if !self.padding_divisor.is_finite() || self.padding_divisor <= 0.0 {
            return Err(invalid(
                "padding_divisor",
                self.padding_divisor,
                "must be finite and positive",
            ));
        }
        let fraction = self.max_clone_fraction;
        if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
            return Err(invalid("max_clone_fraction", fraction, "must be in (0, 1]"));
        }
        let scale = self.min_scale.raw();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid("min_scale", scale, "must be finite and positive"));
        }
        Ok(())
    }
}
