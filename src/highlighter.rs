//! Collaborator seam: where map documents and renderers plug in
//!
//! A [`MapSource`] answers "where is this region and how big is the canvas",
//! a [`ShapeSink`] receives what should be drawn. The [`Highlighter`] ties one
//! request together: clear, resolve, outline, lay out, emit.

use std::collections::BTreeMap;

use crate::errors::{ConfigError, LocateError};
use crate::layout::{self, Highlight, LayoutOptions, ShapeEnum};
use crate::log::debug;
use crate::types::{Rect, Size};

/// Read access to the map being highlighted
pub trait MapSource {
    /// Bounding box of a named region in canvas coordinates
    fn bounding_box(&self, name: &str) -> Option<Rect>;

    /// Extents of the whole drawable canvas
    fn canvas_size(&self) -> Size;

    /// Names of every selectable region, for navigation and suggestions
    fn region_names(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Receives the shapes produced by a request
pub trait ShapeSink {
    /// Remove every shape emitted by the previous request
    fn clear_previous(&mut self);

    fn emit(&mut self, shape: ShapeEnum);
}

/// Runs highlight requests with a fixed set of options
#[derive(Debug, Clone, Default)]
pub struct Highlighter {
    options: LayoutOptions,
}

impl Highlighter {
    pub fn new(options: LayoutOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Drop the previous request's shapes without drawing anything new
    pub fn clear(&self, sink: &mut impl ShapeSink) {
        sink.clear_previous();
    }

    /// Highlight `name`: outline it and, when there is room, draw an enlarged
    /// inset next to it.
    ///
    /// Previous shapes are cleared first, even if the request then fails.
    /// A request that lays out no inset still succeeds; the returned
    /// `Highlight` says how far it got.
    pub fn highlight(
        &self,
        source: &impl MapSource,
        name: &str,
        sink: &mut impl ShapeSink,
    ) -> Result<Highlight, LocateError> {
        sink.clear_previous();

        let raw_canvas = source.canvas_size();
        let canvas = Size::try_new(raw_canvas.width.raw(), raw_canvas.height.raw()).map_err(
            |err| LocateError::InvalidCanvas {
                width: raw_canvas.width.raw(),
                height: raw_canvas.height.raw(),
                source: err,
            },
        )?;

        let bbox = source
            .bounding_box(name)
            .ok_or_else(|| LocateError::UnknownRegion {
                name: name.to_string(),
                suggestion: suggest(name, &source.region_names()),
            })?
            .validated()
            .map_err(|err| LocateError::InvalidRegion {
                name: name.to_string(),
                source: err,
            })?;

        let outline = bbox.inflate(self.options.outline_padding);
        debug!(region = name, %bbox, %outline, "highlight");

        let highlight = layout::locate(outline, canvas, &self.options);
        for shape in highlight.shapes(name) {
            sink.emit(shape);
        }
        Ok(highlight)
    }
}

/// A close match for a mistyped region name
fn suggest(name: &str, known: &[String]) -> Option<String> {
    let lower = name.to_lowercase();
    known
        .iter()
        .find(|k| k.to_lowercase() == lower)
        .or_else(|| {
            known
                .iter()
                .find(|k| !lower.is_empty() && k.to_lowercase().starts_with(&lower))
        })
        .map(|k| format!("did you mean `{k}`?"))
}

// ============================================================================
// In-memory collaborators
// ============================================================================

/// A map held as a table of named bounding boxes
#[derive(Debug, Clone, Default)]
pub struct InMemoryMap {
    canvas: Size,
    regions: BTreeMap<String, Rect>,
}

impl InMemoryMap {
    pub fn new(canvas: Size) -> Self {
        Self {
            canvas,
            regions: BTreeMap::new(),
        }
    }

    pub fn with_region(mut self, name: impl Into<String>, bbox: Rect) -> Self {
        self.insert(name, bbox);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, bbox: Rect) {
        self.regions.insert(name.into(), bbox);
    }
}

impl MapSource for InMemoryMap {
    fn bounding_box(&self, name: &str) -> Option<Rect> {
        self.regions.get(name).copied()
    }

    fn canvas_size(&self) -> Size {
        self.canvas
    }

    fn region_names(&self) -> Vec<String> {
        self.regions.keys().cloned().collect()
    }
}

/// Sink that keeps the current request's shapes in a list
#[derive(Debug, Clone, Default)]
pub struct ShapeList {
    pub shapes: Vec<ShapeEnum>,
    /// How many times the list has been cleared
    pub clears: usize,
}

impl ShapeSink for ShapeList {
    fn clear_previous(&mut self) {
        self.shapes.clear();
        self.clears += 1;
    }

    fn emit(&mut self, shape: ShapeEnum) {
        self.shapes.push(shape);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Role, Shape, Stage};

    fn antilles() -> InMemoryMap {
        InMemoryMap::new(Size::new(400.0, 300.0))
            .with_region("Cuba", Rect::new(110.0, 60.0, 20.0, 10.0))
            .with_region("Curacao", Rect::new(20.0, 110.0, 20.0, 60.0))
            .with_region("Everything", Rect::new(10.0, 10.0, 380.0, 280.0))
    }

    #[test]
    fn highlight_emits_outline_and_inset() {
        let map = antilles();
        let mut sink = ShapeList::default();
        let h = Highlighter::default()
            .highlight(&map, "Cuba", &mut sink)
            .expect("known region");

        // bbox inflated by the outline padding on every side
        assert_eq!(h.region, Rect::new(100.0, 50.0, 40.0, 30.0));
        assert_eq!(h.stage(), Stage::Done);
        assert_eq!(sink.shapes.len(), 5);
        assert_eq!(sink.clears, 1);
        match &sink.shapes[0] {
            ShapeEnum::Outline(outline) => {
                assert_eq!(outline.source, "Cuba");
                assert_eq!(outline.rect, h.region);
            }
            other => panic!("expected outline first, got {other:?}"),
        }
        match &sink.shapes[4] {
            ShapeEnum::Clone(clone) => {
                assert_eq!(clone.id, "Cuba_enlarged");
                assert_eq!(clone.rect, Rect::new(25.0, 105.0, 200.0, 150.0));
            }
            other => panic!("expected clone last, got {other:?}"),
        }
    }

    #[test]
    fn too_large_region_keeps_outline_only() {
        let map = antilles();
        let mut sink = ShapeList::default();
        let h = Highlighter::default()
            .highlight(&map, "Everything", &mut sink)
            .expect("known region");
        assert_eq!(h.stage(), Stage::RegionSelected);
        assert_eq!(sink.shapes.len(), 1);
        assert_eq!(sink.shapes[0].role(), Role::Outline);
    }

    #[test]
    fn each_request_replaces_the_previous_one() {
        let map = antilles();
        let mut sink = ShapeList::default();
        let highlighter = Highlighter::default();
        highlighter.highlight(&map, "Cuba", &mut sink).expect("Cuba");
        highlighter.highlight(&map, "Everything", &mut sink).expect("Everything");
        assert_eq!(sink.clears, 2);
        assert_eq!(sink.shapes.len(), 1);

        highlighter.clear(&mut sink);
        assert!(sink.shapes.is_empty());
        assert_eq!(sink.clears, 3);
    }

    #[test]
    fn unknown_region_suggests_a_name() {
        let map = antilles();
        let mut sink = ShapeList::default();
        let err = Highlighter::default()
            .highlight(&map, "cuba", &mut sink)
            .expect_err("case differs");
        assert_eq!(
            err,
            LocateError::UnknownRegion {
                name: "cuba".to_string(),
                suggestion: Some("did you mean `Cuba`?".to_string()),
            }
        );
        // the previous request is cleared regardless
        assert_eq!(sink.clears, 1);

        let err = Highlighter::default()
            .highlight(&map, "Jamaica", &mut sink)
            .expect_err("not on the map");
        assert!(matches!(err, LocateError::UnknownRegion { suggestion: None, .. }));
    }

    #[test]
    fn prefix_suggestion() {
        let known = ["Curacao".to_string(), "Cuba".to_string()];
        assert_eq!(suggest("cura", &known).as_deref(), Some("did you mean `Curacao`?"));
        assert_eq!(suggest("", &known), None);
    }

    #[test]
    fn invalid_inputs_are_reported() {
        let mut sink = ShapeList::default();
        let flat = InMemoryMap::new(Size::new(400.0, 0.0)).with_region("Cuba", Rect::new(0.0, 0.0, 1.0, 1.0));
        let err = Highlighter::default()
            .highlight(&flat, "Cuba", &mut sink)
            .expect_err("zero height canvas");
        assert!(matches!(err, LocateError::InvalidCanvas { .. }));

        let broken = InMemoryMap::new(Size::new(400.0, 300.0))
            .with_region("Cuba", Rect::new(f64::NAN, 0.0, 1.0, 1.0));
        let err = Highlighter::default()
            .highlight(&broken, "Cuba", &mut sink)
            .expect_err("NaN origin");
        assert!(matches!(err, LocateError::InvalidRegion { .. }));
    }

    #[test]
    fn options_are_validated() {
        let bad = LayoutOptions::default().with_max_clone_fraction(0.0);
        assert!(Highlighter::new(bad).is_err());
        let good = LayoutOptions::default().with_outline_padding(0.0);
        let highlighter = Highlighter::new(good).expect("valid");

        let map = antilles();
        let mut sink = ShapeList::default();
        let h = highlighter.highlight(&map, "Cuba", &mut sink).expect("Cuba");
        assert_eq!(h.region, Rect::new(110.0, 60.0, 20.0, 10.0));
    }
}
