//! Plain-text report of a highlight, one fact per line
//!
//! The report is what the fixture tests and the sweep tool compare against,
//! so numbers are printed with a fixed precision and trailing zeros trimmed.

use std::fmt;

use glam::DVec2;

use crate::types::{Rect, Size};

use super::{AbortReason, Highlight, Outcome, Stage};

/// Format a number with at most three decimals, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {}x{}",
            fmt_num(self.x.raw()),
            fmt_num(self.y.raw()),
            fmt_num(self.width.raw()),
            fmt_num(self.height.raw())
        )
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", fmt_num(self.width.raw()), fmt_num(self.height.raw()))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::NoQuadrant => f.write_str("no-quadrant"),
            AbortReason::DegenerateClone => f.write_str("degenerate-clone"),
            AbortReason::ScaleBelowMinimum { scale } => {
                write!(f, "scale-below-minimum (scale {})", fmt_num(scale.raw()))
            }
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "outline {}", self.region)?;
        writeln!(f, "canvas {}", self.canvas)?;
        match &self.outcome {
            Outcome::Inset(inset) => {
                let q = &inset.quadrant;
                writeln!(f, "quadrant {} {}", q.direction, q.rect)?;
                writeln!(f, "padding {}", fmt_num(inset.placement.padding.raw()))?;
                writeln!(f, "clone {}", inset.placement.clone)?;
                writeln!(f, "scale {}", fmt_num(inset.size.scale.raw()))?;
                writeln!(f, "axis {}", inset.placement.dividing_axis)?;
                let flip = match (inset.guideline.vertical_flip, inset.guideline.horizontal_flip) {
                    (true, _) => "vertical",
                    (_, true) => "horizontal",
                    _ => "none",
                };
                writeln!(f, "flip {flip}")?;
                let points: Vec<String> = inset.guideline.points.iter().map(|p| fmt_point(*p)).collect();
                writeln!(f, "guideline {}", points.join(" "))?;
                writeln!(f, "transform {}", inset.transform)?;
            }
            Outcome::Aborted(reason) => {
                writeln!(f, "aborted {reason}")?;
            }
        }
        write!(f, "stage {}", self.stage())
    }
}
