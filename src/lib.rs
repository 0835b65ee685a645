//! Locator maps: highlight a region of a map and draw an enlarged inset of it
//! in the largest empty part of the canvas.
//!
//! The layout core ([`layout::locate`]) is a pure function of the region's
//! box, the canvas size and the [`LayoutOptions`]. The [`Highlighter`] wraps
//! it for applications: it resolves region names through a [`MapSource`] and
//! hands finished shapes to a [`ShapeSink`].
//!
//! ```
//! use locator::{Highlighter, InMemoryMap, Rect, ShapeList, Size, Stage};
//!
//! let map = InMemoryMap::new(Size::new(400.0, 300.0))
//!     .with_region("Cuba", Rect::new(110.0, 60.0, 20.0, 10.0));
//! let mut shapes = ShapeList::default();
//! let highlight = Highlighter::default().highlight(&map, "Cuba", &mut shapes)?;
//! assert_eq!(highlight.stage(), Stage::Done);
//! assert_eq!(shapes.shapes.len(), 5);
//! # Ok::<(), locator::LocateError>(())
//! ```

pub mod errors;
pub mod highlighter;
pub mod layout;
pub mod log;
pub mod types;

pub use errors::{ConfigError, LocateError};
pub use highlighter::{Highlighter, InMemoryMap, MapSource, ShapeList, ShapeSink};
pub use layout::{
    AbortReason, Highlight, Inset, LayoutOptions, Outcome, Role, Shape, ShapeEnum, Stage, locate,
};
pub use types::{Length, NumericError, Rect, Scalar, Size};
