//! SVG drawing surface.
//!
//! Model coordinates use +y up; SVG uses +y down. The surface negates y
//! when emitting, so the viewBox covers `(min_x, -max_y)` to
//! `(max_x, -min_y)` and the drawing appears with the model's +y upward.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use log::{debug, error, info};
use svg::Document;
use svg::node::element::{Circle, Line, Polyline};
use tempfile::NamedTempFile;

use section_core::{Bounds, Point};

use crate::diagram::Segment;
use crate::error::ExportError;
use crate::surface::Surface;

/// Outline stroke width in pixels.
const OUTLINE_WIDTH: f64 = 2.0;

/// Vertex marker radius in pixels.
const VERTEX_MARKER_RADIUS: f64 = 3.0;

/// Centroid marker radius in pixels.
const POINT_MARKER_RADIUS: f64 = 4.0;

enum Shape {
    Polyline(Vec<Point>),
    Marker(Point),
    Segment {
        segment: Segment,
        color: String,
        width: f64,
    },
}

/// A [`Surface`] that renders to an SVG file.
///
/// Drawing calls record shapes; [`save`](Surface::save) materializes the
/// document and writes it through a temporary file in the destination
/// directory, persisted atomically so a failed write leaves nothing
/// behind.
pub struct SvgSurface {
    path: PathBuf,
    pixel_size: (f64, f64),
    viewport: Option<Bounds>,
    shapes: Vec<Shape>,
}

impl SvgSurface {
    /// Creates a surface that will write to `path` with the given canvas
    /// dimensions in pixels.
    pub fn new(path: impl Into<PathBuf>, pixel_size: (f64, f64)) -> Self {
        Self {
            path: path.into(),
            pixel_size,
            viewport: None,
            shapes: Vec::new(),
        }
    }

    /// Model units per pixel under the equal-aspect "meet" fit.
    ///
    /// Stroke widths and marker radii are specified in pixels; scaling
    /// them by this factor keeps their on-canvas size independent of the
    /// model's coordinate range.
    fn model_per_pixel(&self, viewport: Bounds) -> f64 {
        let (width, height) = self.pixel_size;
        (viewport.width() / width).max(viewport.height() / height)
    }

    fn document(&self) -> Result<Document, ExportError> {
        let (canvas_width, canvas_height) = self.pixel_size;
        if !(canvas_width > 0.0 && canvas_height > 0.0) {
            return Err(ExportError::Render(format!(
                "canvas has no extent: {canvas_width} x {canvas_height} px"
            )));
        }
        let viewport = self
            .viewport
            .ok_or_else(|| ExportError::Render("no viewport set before save".to_string()))?;
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            return Err(ExportError::Render(format!(
                "viewport has no extent: {:.3} x {:.3}",
                viewport.width(),
                viewport.height()
            )));
        }

        let scale = self.model_per_pixel(viewport);
        let mut document = Document::new()
            .set("width", self.pixel_size.0)
            .set("height", self.pixel_size.1)
            .set(
                "viewBox",
                (
                    viewport.min_x(),
                    -viewport.max_y(),
                    viewport.width(),
                    viewport.height(),
                ),
            )
            .set("preserveAspectRatio", "xMidYMid meet");

        for shape in &self.shapes {
            match shape {
                Shape::Polyline(points) => {
                    let attribute = points
                        .iter()
                        .map(|p| format!("{},{}", p.x(), -p.y()))
                        .collect::<Vec<_>>()
                        .join(" ");
                    document = document.add(
                        Polyline::new()
                            .set("points", attribute)
                            .set("fill", "none")
                            .set("stroke", "black")
                            .set("stroke-width", OUTLINE_WIDTH * scale),
                    );
                    for point in points.iter() {
                        document = document.add(
                            Circle::new()
                                .set("cx", point.x())
                                .set("cy", -point.y())
                                .set("r", VERTEX_MARKER_RADIUS * scale)
                                .set("fill", "black"),
                        );
                    }
                }
                Shape::Marker(point) => {
                    document = document.add(
                        Circle::new()
                            .set("cx", point.x())
                            .set("cy", -point.y())
                            .set("r", POINT_MARKER_RADIUS * scale)
                            .set("fill", "black")
                            .set("stroke", "black"),
                    );
                }
                Shape::Segment {
                    segment,
                    color,
                    width,
                } => {
                    document = document.add(
                        Line::new()
                            .set("x1", segment.start().x())
                            .set("y1", -segment.start().y())
                            .set("x2", segment.end().x())
                            .set("y2", -segment.end().y())
                            .set("stroke", color.as_str())
                            .set("stroke-width", width * scale),
                    );
                }
            }
        }

        Ok(document)
    }
}

impl Surface for SvgSurface {
    fn set_equal_aspect(&mut self, viewport: Bounds) {
        self.viewport = Some(viewport);
    }

    fn draw_polyline(&mut self, points: &[Point]) {
        self.shapes.push(Shape::Polyline(points.to_vec()));
    }

    fn draw_point(&mut self, point: Point) {
        self.shapes.push(Shape::Marker(point));
    }

    fn draw_segment(&mut self, segment: Segment, color: &str, width: f64) {
        self.shapes.push(Shape::Segment {
            segment,
            color: color.to_string(),
            width,
        });
    }

    fn save(&mut self) -> Result<(), ExportError> {
        let document = self.document()?;

        info!(path = self.path.display().to_string(); "Creating SVG file");

        // Stage next to the destination so persist is an atomic rename.
        let directory = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut staged = NamedTempFile::new_in(directory).inspect_err(|err| {
            error!(path = self.path.display().to_string(), err:% = err; "Failed to stage SVG file");
        })?;

        write!(staged, "{document}")?;
        staged.flush()?;
        staged
            .persist(&self.path)
            .map_err(|err| ExportError::Io(err.error))?;

        debug!(path = self.path.display().to_string(); "SVG file persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{DiagramSpec, MAJOR_AXIS_COLOR, MINOR_AXIS_COLOR};
    use section_core::{Polygon, SectionProperties};

    fn triangle_spec() -> DiagramSpec {
        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 3.0),
        ])
        .unwrap();
        let properties = SectionProperties::of(&polygon).unwrap();
        DiagramSpec::from_properties(&polygon, &properties)
    }

    #[test]
    fn test_render_writes_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.svg");

        let mut surface = SvgSurface::new(&path, (800.0, 800.0));
        triangle_spec().render(&mut surface).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("polyline"));
        assert!(content.contains(MAJOR_AXIS_COLOR));
        assert!(content.contains(MINOR_AXIS_COLOR));
        assert!(content.contains("preserveAspectRatio"));
    }

    #[test]
    fn test_viewbox_flips_y() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rectangle.svg");

        let polygon = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
            Point::new(0.0, 10.0),
        ])
        .unwrap();
        let properties = SectionProperties::of(&polygon).unwrap();
        let spec = DiagramSpec::from_properties(&polygon, &properties);

        let mut surface = SvgSurface::new(&path, (800.0, 600.0));
        spec.render(&mut surface).unwrap();

        // Outline bounds are 20x10, margin 1; viewBox min-y is -max_y.
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("viewBox=\"-1 -11 22 12\""));
    }

    #[test]
    fn test_save_without_viewport_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let mut surface = SvgSurface::new(&path, (800.0, 800.0));
        surface.draw_point(Point::new(0.0, 0.0));
        let err = surface.save().unwrap_err();
        assert!(matches!(err, ExportError::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_with_empty_canvas_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");

        let mut surface = SvgSurface::new(&path, (0.0, 0.0));
        let err = triangle_spec().render(&mut surface).unwrap_err();
        assert!(matches!(err, ExportError::Render(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_failed_save_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");

        let mut surface = SvgSurface::new(&path, (800.0, 800.0));
        let err = triangle_spec().render(&mut surface).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
        assert!(!path.exists());
    }
}
