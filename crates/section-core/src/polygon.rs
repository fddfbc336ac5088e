//! Closed polygon rings and the shoelace line integrals.
//!
//! All five section metrics (area, centroid, second moments, principal
//! values) derive from the same discretized line integral evaluated over
//! the edges of one closed vertex ring. [`Polygon`] normalizes the ring
//! exactly once at construction and every integral walks that same edge
//! list, so sign conventions stay consistent between the metrics.
//!
//! Behavior for self-intersecting rings is unspecified: the sums are
//! well-defined but geometrically meaningless, and construction makes no
//! attempt to detect intersections.

use crate::error::GeometryError;
use crate::geometry::{Bounds, Point};
use crate::tensor::InertiaTensor;

/// A simple closed 2D polygon.
///
/// Construction accepts vertices in either winding order, open or
/// pre-closed. The ring is closed by appending a copy of the first vertex
/// when the last does not already equal it by exact value comparison;
/// supplying an already-closed sequence yields identical results to the
/// open form. Interior duplicate vertices are left untouched.
///
/// Counter-clockwise winding encloses positive
/// [signed area](Polygon::signed_area).
///
/// # Examples
///
/// ```
/// # use section_core::{Point, Polygon};
/// let square = Polygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
/// ])?;
///
/// assert_eq!(square.signed_area(), 1.0);
/// assert_eq!(square.centroid()?, Point::new(0.5, 0.5));
/// # Ok::<(), section_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Closed vertex ring: first and last entries are equal.
    ring: Vec<Point>,
}

/// Edge integrals accumulated in a single pass over the closed ring.
///
/// `cross` is the full shoelace sum (twice the signed area); the remaining
/// fields are the raw first- and second-moment sums before their `1/6`,
/// `1/12`, and `1/24` divisors.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct EdgeSums {
    pub cross: f64,
    pub sx: f64,
    pub sy: f64,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

impl EdgeSums {
    /// Signed area enclosed by the ring.
    pub fn area(self) -> f64 {
        self.cross / 2.0
    }

    /// Area-weighted centroid, or `DegeneratePolygon` when the enclosed
    /// area is zero and the division is undefined.
    pub fn centroid(self) -> Result<Point, GeometryError> {
        let area = self.area();
        if area == 0.0 {
            return Err(GeometryError::DegeneratePolygon);
        }
        Ok(Point::new(self.sx / (6.0 * area), self.sy / (6.0 * area)))
    }

    /// Second moments about the centroid, via the parallel-axis
    /// correction of the origin moments.
    ///
    /// Every raw sum flips sign with the winding direction, so the
    /// tensor is normalized to the geometric (positive-area) convention:
    /// the result is winding-independent and `ixx`/`iyy` are
    /// non-negative for any simple ring.
    pub fn inertia(self) -> Result<InertiaTensor, GeometryError> {
        let area = self.area();
        let centroid = self.centroid()?;
        let (cx, cy) = (centroid.x(), centroid.y());
        let sign = if area < 0.0 { -1.0 } else { 1.0 };
        Ok(InertiaTensor::new(
            sign * (self.sxx / 12.0 - area * cy * cy),
            sign * (self.syy / 12.0 - area * cx * cx),
            sign * (self.sxy / 24.0 - area * cx * cy),
        ))
    }
}

impl Polygon {
    /// Creates a polygon from an open or pre-closed vertex sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InsufficientVertices`] when fewer than
    /// three points are supplied.
    pub fn new(points: impl Into<Vec<Point>>) -> Result<Self, GeometryError> {
        let mut ring = points.into();
        if ring.len() < 3 {
            return Err(GeometryError::InsufficientVertices { count: ring.len() });
        }
        if ring.first() != ring.last() {
            ring.push(ring[0]);
        }
        Ok(Self { ring })
    }

    /// Returns the closed vertex ring (first and last entries equal).
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Axis-aligned bounding box of the ring.
    pub fn bounds(&self) -> Bounds {
        // The ring is never empty once constructed.
        Bounds::of(&self.ring).unwrap_or_default()
    }

    /// Accumulates every shoelace sum in one pass over the closed edges.
    pub(crate) fn edge_sums(&self) -> EdgeSums {
        let mut sums = EdgeSums::default();
        for edge in self.ring.windows(2) {
            let (p, q) = (edge[0], edge[1]);
            let cross = p.x() * q.y() - q.x() * p.y();
            sums.cross += cross;
            sums.sx += (p.x() + q.x()) * cross;
            sums.sy += (p.y() + q.y()) * cross;
            sums.sxx += (p.y() * p.y() + p.y() * q.y() + q.y() * q.y()) * cross;
            sums.syy += (p.x() * p.x() + p.x() * q.x() + q.x() * q.x()) * cross;
            sums.sxy +=
                (p.x() * q.y() + 2.0 * p.x() * p.y() + 2.0 * q.x() * q.y() + q.x() * p.y()) * cross;
        }
        sums
    }

    /// Signed area of the cross-section.
    ///
    /// Positive for counter-clockwise winding. Degenerate (collinear or
    /// self-canceling) rings return `0.0`; callers that divide by the
    /// area must treat that as [`GeometryError::DegeneratePolygon`].
    pub fn signed_area(&self) -> f64 {
        self.edge_sums().area()
    }

    /// Location of the centroid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePolygon`] when the signed area
    /// is zero.
    pub fn centroid(&self) -> Result<Point, GeometryError> {
        self.edge_sums().centroid()
    }

    /// Moments and product of inertia about the centroid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePolygon`] when the signed area
    /// is zero.
    pub fn inertia(&self) -> Result<InertiaTensor, GeometryError> {
        self.edge_sums().inertia()
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    /// Regular n-gon: always simple and convex, with a known center.
    fn regular_polygon(center: Point, radius: f64, sides: usize) -> Vec<Point> {
        (0..sides)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / sides as f64;
                center.offset_along(angle, radius)
            })
            .collect()
    }

    proptest! {
        #[test]
        fn closure_is_idempotent(
            cx in -100.0f64..100.0,
            cy in -100.0f64..100.0,
            radius in 0.1f64..50.0,
            sides in 3usize..12,
        ) {
            let open = regular_polygon(Point::new(cx, cy), radius, sides);
            let from_open = Polygon::new(open.clone()).unwrap();

            let mut closed = open;
            closed.push(closed[0]);
            let from_closed = Polygon::new(closed).unwrap();

            prop_assert_eq!(from_open.ring(), from_closed.ring());
            prop_assert_eq!(from_open.signed_area(), from_closed.signed_area());
        }

        #[test]
        fn reversal_negates_area_only(
            cx in -100.0f64..100.0,
            cy in -100.0f64..100.0,
            radius in 0.1f64..50.0,
            sides in 3usize..12,
        ) {
            let vertices = regular_polygon(Point::new(cx, cy), radius, sides);
            let forward = Polygon::new(vertices.clone()).unwrap();
            let mut reversed = vertices;
            reversed.reverse();
            let backward = Polygon::new(reversed).unwrap();

            let tolerance = 1e-9 * radius * radius;
            prop_assert!((forward.signed_area() + backward.signed_area()).abs() < tolerance);

            let c1 = forward.centroid().unwrap();
            let c2 = backward.centroid().unwrap();
            prop_assert!(c1.sub_point(c2).hypot() < 1e-9 * radius);
        }

        #[test]
        fn ccw_regular_polygon_has_positive_area(
            radius in 0.1f64..50.0,
            sides in 3usize..12,
        ) {
            let polygon =
                Polygon::new(regular_polygon(Point::default(), radius, sides)).unwrap();
            prop_assert!(polygon.signed_area() > 0.0);
        }
    }
}
