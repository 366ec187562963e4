//! SVG export of the sampled centerline.
//!
//! Renders the sample polyline with per-sample markers, equal scale on both
//! axes and the y-axis flipped into SVG screen coordinates.

use std::path::Path;

use svg::node::element::{Circle, Polyline, Rectangle};
use svg::Document;

use crate::compose::SamplePoint;
use crate::error::Result;

const SCALE: f64 = 2.0; // pixels per length unit
const MARGIN: f64 = 20.0;
const LINE_COLOR: &str = "#0072B2";
const MARKER_COLOR: &str = "#D55E00";
const MARKER_RADIUS: f64 = 1.5;

fn bounds(samples: &[SamplePoint]) -> (f64, f64, f64, f64) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in samples {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    (min_x, min_y, max_x, max_y)
}

/// Build the SVG document for a sample polyline.
pub fn svg_document(samples: &[SamplePoint]) -> Document {
    if samples.is_empty() {
        return Document::new().set("width", 1).set("height", 1);
    }

    let (min_x, min_y, max_x, max_y) = bounds(samples);
    let width = (max_x - min_x) * SCALE + 2.0 * MARGIN;
    let height = (max_y - min_y) * SCALE + 2.0 * MARGIN;

    // y grows upward in road coordinates, downward on screen
    let to_screen = |p: &SamplePoint| -> (f64, f64) {
        (
            (p.x - min_x) * SCALE + MARGIN,
            height - ((p.y - min_y) * SCALE + MARGIN),
        )
    };

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {width} {height}"));

    doc = doc.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", "white"),
    );

    let points: String = samples
        .iter()
        .map(|p| {
            let (x, y) = to_screen(p);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ");

    doc = doc.add(
        Polyline::new()
            .set("points", points)
            .set("fill", "none")
            .set("stroke", LINE_COLOR)
            .set("stroke-width", 1.5)
            .set("stroke-linecap", "round")
            .set("stroke-linejoin", "round"),
    );

    for p in samples {
        let (x, y) = to_screen(p);
        doc = doc.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", MARKER_RADIUS)
                .set("fill", MARKER_COLOR),
        );
    }

    doc
}

/// Write the centerline plot to `file`.
pub fn write_svg(samples: &[SamplePoint], file: impl AsRef<Path>) -> Result<()> {
    let file = file.as_ref();
    svg::save(file, &svg_document(samples))?;
    log::info!("wrote centerline plot to {}", file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<SamplePoint> {
        vec![
            SamplePoint { x: 0.0, y: 0.0 },
            SamplePoint { x: 10.0, y: 0.0 },
            SamplePoint { x: 20.0, y: 5.0 },
            SamplePoint { x: 20.0, y: -5.0 },
        ]
    }

    #[test]
    fn document_has_polyline_and_markers() {
        let doc = svg_document(&samples()).to_string();
        assert_eq!(doc.matches("<polyline").count(), 1);
        assert_eq!(doc.matches("<circle").count(), 4);
        assert!(doc.contains("stroke-linejoin=\"round\""));
    }

    #[test]
    fn document_size_covers_extent() {
        // x extent 20, y extent 10, scale 2, margin 20 each side
        let doc = svg_document(&samples()).to_string();
        assert!(doc.contains("width=\"80\""));
        assert!(doc.contains("height=\"60\""));
    }

    #[test]
    fn empty_samples_yield_empty_document() {
        let doc = svg_document(&[]).to_string();
        assert!(!doc.contains("polyline"));
    }

    #[test]
    fn writes_to_disk() {
        let dir = std::env::temp_dir().join("road_plan_svg_test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("out.svg");
        write_svg(&samples(), &file).unwrap();
        let text = std::fs::read_to_string(&file).unwrap();
        assert!(text.contains("<svg"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
