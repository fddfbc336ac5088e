//! Outline diagram geometry.
//!
//! [`DiagramSpec`] derives everything the drawing surface needs from a
//! polygon and its computed properties: the closed outline, the centroid
//! marker, the two principal-axis segments, and the equal-aspect
//! viewport with its whitespace margin. It is purely derived data and is
//! never persisted.

use std::f64::consts::FRAC_PI_2;

use log::debug;

use section_core::{Bounds, Point, Polygon, SectionProperties};

use crate::error::ExportError;
use crate::surface::Surface;

/// Color of the major principal-axis segment (colorblind-safe blue).
pub const MAJOR_AXIS_COLOR: &str = "#0072B2";

/// Color of the minor principal-axis segment (colorblind-safe vermillion).
pub const MINOR_AXIS_COLOR: &str = "#D55E00";

/// Whitespace margin as a fraction of the larger outline dimension.
const MARGIN_FRACTION: f64 = 0.05;

/// Axis half-length as a fraction of the smaller outline dimension.
const AXIS_FRACTION: f64 = 0.1;

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a segment between two endpoints
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment through `center` at `angle`, extending `half_length` in
    /// both directions.
    pub fn through(center: Point, angle: f64, half_length: f64) -> Self {
        Self {
            start: center.offset_along(angle, -half_length),
            end: center.offset_along(angle, half_length),
        }
    }

    /// Returns the start point of the segment
    pub fn start(self) -> Point {
        self.start
    }

    /// Returns the end point of the segment
    pub fn end(self) -> Point {
        self.end
    }

    /// Returns the midpoint of the segment.
    ///
    /// Axis segments built by [`Segment::through`] have their midpoint
    /// at the centroid they pass through.
    pub fn midpoint(self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Derived geometry for one outline diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSpec {
    outline: Vec<Point>,
    centroid: Point,
    major_axis: Segment,
    minor_axis: Segment,
    viewport: Bounds,
}

impl DiagramSpec {
    /// Computes the diagram geometry for a polygon.
    ///
    /// The whitespace margin is 5% of the larger bounding-box dimension;
    /// each axis segment extends 10% of the smaller dimension from the
    /// centroid in both directions, at the principal angle and its
    /// perpendicular.
    pub fn from_properties(polygon: &Polygon, properties: &SectionProperties) -> Self {
        let bounds = polygon.bounds();
        let margin = MARGIN_FRACTION * bounds.width().max(bounds.height());
        let half_length = AXIS_FRACTION * bounds.width().min(bounds.height());

        let centroid = properties.centroid();
        let theta = properties.principal().theta();

        debug!(margin, half_length, theta; "Composed diagram geometry");

        Self {
            outline: polygon.ring().to_vec(),
            centroid,
            major_axis: Segment::through(centroid, theta, half_length),
            minor_axis: Segment::through(centroid, theta + FRAC_PI_2, half_length),
            viewport: bounds.add_margin(margin),
        }
    }

    /// Returns the closed outline ring
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Returns the centroid marker position
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    /// Returns the major principal-axis segment
    pub fn major_axis(&self) -> Segment {
        self.major_axis
    }

    /// Returns the minor principal-axis segment
    pub fn minor_axis(&self) -> Segment {
        self.minor_axis
    }

    /// Returns the equal-aspect viewport, margin included
    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    /// Draws the diagram onto a surface and saves it.
    ///
    /// # Errors
    ///
    /// Propagates the surface's failures unchanged.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), ExportError> {
        surface.set_equal_aspect(self.viewport);
        surface.draw_polyline(&self.outline);
        surface.draw_segment(self.major_axis, MAJOR_AXIS_COLOR, 2.0);
        surface.draw_segment(self.minor_axis, MINOR_AXIS_COLOR, 1.5);
        surface.draw_point(self.centroid);
        surface.save()
    }
}
