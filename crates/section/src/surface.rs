//! The drawing-surface abstraction.
//!
//! Diagram geometry is handed to a [`Surface`] rather than to any
//! particular rendering backend, so the geometry side has zero
//! dependency on how pixels or paths get produced. A surface is a
//! scoped handle: it is created per render, drawn onto, and consumed by
//! one [`save`](Surface::save). Nothing is shared across concurrent
//! renders as long as each uses its own surface.

use section_core::{Bounds, Point};

use crate::diagram::Segment;
use crate::error::ExportError;

/// A drawing surface for outline diagrams.
pub trait Surface {
    /// Fixes the projection: the given bounds map onto the canvas with
    /// equal scaling on both axes.
    fn set_equal_aspect(&mut self, viewport: Bounds);

    /// Draws a connected polyline with a marker at every vertex.
    fn draw_polyline(&mut self, points: &[Point]);

    /// Draws a single point marker.
    fn draw_point(&mut self, point: Point);

    /// Draws a straight segment with the given stroke color and width.
    fn draw_segment(&mut self, segment: Segment, color: &str, width: f64);

    /// Writes the surface to its destination, flushing and releasing it
    /// on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when the write fails; implementations
    /// must not leave a partial file behind.
    fn save(&mut self) -> Result<(), ExportError>;
}
