use camino::{Utf8Path, Utf8PathBuf};
use locator::layout::guideline::signed_area;
use locator::{
    Highlight, Highlighter, InMemoryMap, LayoutOptions, MapSource, Rect, ShapeEnum, ShapeList,
    Size, locate,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::process::ExitCode;

const CANVAS: (f64, f64) = (400.0, 300.0);

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  sweep      Lay out insets for a grid of regions and check the results");
        eprintln!("  gallery    Write an HTML page previewing sample layouts");
        return ExitCode::FAILURE;
    }

    let result = match args[1].as_str() {
        "sweep" => sweep(),
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            return ExitCode::FAILURE;
        }
    };
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn workspace_root() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

fn canvas() -> Size {
    Size::new(CANVAS.0, CANVAS.1)
}

// ============================================================================
// sweep
// ============================================================================

/// Every region on a 5-unit grid, in a handful of shapes
fn sweep_regions() -> Vec<Rect> {
    let sizes = [(10.0, 10.0), (40.0, 20.0), (20.0, 40.0), (60.0, 15.0), (120.0, 90.0)];
    let mut regions = Vec::new();
    for (w, h) in sizes {
        let mut y = 0.0;
        while y + h <= CANVAS.1 {
            let mut x = 0.0;
            while x + w <= CANVAS.0 {
                regions.push(Rect::new(x, y, w, h));
                x += 5.0;
            }
            y += 5.0;
        }
    }
    regions
}

/// Problems with a finished layout, empty when it is sound
fn check(highlight: &Highlight, options: &LayoutOptions) -> Vec<String> {
    let mut problems = Vec::new();
    let Some(inset) = highlight.inset() else {
        return problems;
    };
    let region = highlight.region;
    let clone = inset.placement.clone;
    let bounds = Rect::new(0.0, 0.0, CANVAS.0, CANVAS.1);

    if !bounds.contains(&clone) {
        problems.push(format!("clone {clone} leaves the canvas"));
    }
    if clone.overlaps(&region) {
        problems.push(format!("clone {clone} covers the region"));
    }
    let aspect = clone.width.raw() / clone.height.raw();
    let expected = region.width.raw() / region.height.raw();
    if (aspect - expected).abs() > 1e-9 {
        problems.push(format!("aspect {aspect} differs from {expected}"));
    }
    if inset.size.scale < options.min_scale {
        problems.push(format!("scale {} below minimum", inset.size.scale.raw()));
    }
    if signed_area(&inset.guideline.points) <= 0.0 {
        problems.push("guideline winds anticlockwise".to_string());
    }
    problems
}

fn sweep() -> Result<bool, std::io::Error> {
    let options = LayoutOptions::default();
    let regions = sweep_regions();
    eprintln!("Laying out {} regions...", regions.len());

    let results: Vec<(Highlight, Vec<String>)> = regions
        .par_iter()
        .map(|region| {
            let highlight = locate(*region, canvas(), &options);
            let problems = check(&highlight, &options);
            (highlight, problems)
        })
        .collect();

    let mut by_outcome: BTreeMap<String, usize> = BTreeMap::new();
    let mut failures = Vec::new();
    for (highlight, problems) in &results {
        let key = match (highlight.inset(), highlight.abort_reason()) {
            (Some(inset), _) => format!("inset {}", inset.quadrant.direction),
            (None, Some(reason)) => format!("aborted {reason}"),
            (None, None) => "unknown".to_string(),
        };
        *by_outcome.entry(key).or_default() += 1;
        for problem in problems {
            failures.push(format!("{}: {}", highlight.region, problem));
        }
    }

    let mut report = String::new();
    report.push_str(&format!("regions {}\n", results.len()));
    for (key, count) in &by_outcome {
        report.push_str(&format!("{key} {count}\n"));
    }
    report.push_str(&format!("failures {}\n", failures.len()));
    for failure in &failures {
        report.push_str(failure);
        report.push('\n');
    }

    let output_path = workspace_root().join("target").join("sweep.txt");
    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&output_path, &report)?;

    print!("{report}");
    eprintln!("Wrote {output_path}");
    Ok(failures.is_empty())
}

// ============================================================================
// gallery
// ============================================================================

/// Named regions spread over the canvas so every quadrant and abort shows up
fn sample_map() -> InMemoryMap {
    InMemoryMap::new(canvas())
        .with_region("north", Rect::new(110.0, 60.0, 20.0, 10.0))
        .with_region("south", Rect::new(190.0, 260.0, 20.0, 10.0))
        .with_region("west", Rect::new(30.0, 110.0, 10.0, 30.0))
        .with_region("east", Rect::new(350.0, 260.0, 10.0, 20.0))
        .with_region("centre", Rect::new(190.0, 150.0, 20.0, 10.0))
        .with_region("sprawl", Rect::new(30.0, 110.0, 20.0, 60.0))
        .with_region("everything", Rect::new(10.0, 10.0, 380.0, 280.0))
}

fn svg_rect(rect: &Rect, class: &str) -> String {
    format!(
        r#"<rect class="{class}" x="{}" y="{}" width="{}" height="{}"/>"#,
        rect.x.raw(),
        rect.y.raw(),
        rect.width.raw(),
        rect.height.raw()
    )
}

fn render_svg(artwork: &Rect, shapes: &ShapeList) -> String {
    let mut body = String::new();
    body.push_str(&svg_rect(artwork, "artwork"));
    for shape in &shapes.shapes {
        let element = match shape {
            ShapeEnum::Outline(s) if s.emphasized => svg_rect(&s.rect, "outline bold"),
            ShapeEnum::Outline(s) => svg_rect(&s.rect, "outline"),
            ShapeEnum::QuadrantMarker(s) => svg_rect(&s.quadrant.rect, "quadrant"),
            ShapeEnum::Guideline(s) => {
                let points: Vec<String> = s
                    .guideline
                    .points
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect();
                format!(r#"<polygon class="guideline" points="{}"/>"#, points.join(" "))
            }
            ShapeEnum::CloneOutline(s) => svg_rect(&s.rect, "clone-outline"),
            ShapeEnum::Clone(s) => format!(
                r#"<g id="{}" transform="{}">{}</g>"#,
                s.id,
                s.transform,
                svg_rect(artwork, "artwork")
            ),
        };
        body.push_str(&element);
    }
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">{}</svg>"#,
        CANVAS.0, CANVAS.1, CANVAS.0, CANVAS.1, body
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn gallery() -> Result<bool, std::io::Error> {
    let map = sample_map();
    let highlighter = Highlighter::default();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Locator layouts</title>
<style>
body { font-family: sans-serif; margin: 20px; }
.case { display: inline-block; vertical-align: top; margin: 0 20px 20px 0; }
svg { border: 1px solid #ccc; background: #fafafa; }
pre { font-size: 11px; }
.artwork { fill: #8ab; }
.outline { fill: none; stroke: #c33; stroke-width: 1; }
.outline.bold { stroke-width: 2; }
.quadrant { fill: #ffd; stroke: #dd9; stroke-dasharray: 4 2; }
.guideline { fill: #c33; fill-opacity: 0.15; stroke: #c33; stroke-width: 0.5; }
.clone-outline { fill: #fff; stroke: #333; stroke-width: 1; }
</style>
</head>
<body>
<h1>Locator layouts</h1>
"#,
    );

    let mut all_ok = true;
    for name in map.region_names() {
        let mut shapes = ShapeList::default();
        let highlight = match highlighter.highlight(&map, &name, &mut shapes) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("{name}: {e}");
                all_ok = false;
                continue;
            }
        };
        let artwork = map.bounding_box(&name).unwrap_or_default();
        html.push_str(&format!(
            "<div class=\"case\"><h3>{}</h3>{}<pre>{}</pre></div>\n",
            html_escape(&name),
            render_svg(&artwork, &shapes),
            html_escape(&highlight.to_string())
        ));
    }
    html.push_str("</body></html>\n");

    let output_path = workspace_root().join("gallery.html");
    fs::write(&output_path, html)?;
    eprintln!("Wrote {output_path}");
    Ok(all_ok)
}
