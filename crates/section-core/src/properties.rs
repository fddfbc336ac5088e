//! One-pass aggregation of all cross-sectional properties.

use log::debug;

use crate::error::GeometryError;
use crate::geometry::Point;
use crate::polygon::Polygon;
use crate::tensor::{InertiaTensor, Principal};

/// Every section metric for one polygon, computed from a single pass
/// over its closed edge ring.
///
/// The edge integrals are accumulated once and shared: the centroid
/// divides by the same signed area the area metric reports, and the
/// inertia correction uses that same area and centroid. Computing the
/// metrics through separate [`Polygon`] calls is equivalent but repeats
/// the integration.
///
/// # Examples
///
/// ```
/// # use section_core::{Point, Polygon, SectionProperties};
/// let triangle = Polygon::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(0.0, 3.0),
/// ])?;
///
/// let properties = SectionProperties::of(&triangle)?;
/// assert_eq!(properties.area(), 6.0);
/// # Ok::<(), section_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProperties {
    area: f64,
    centroid: Point,
    inertia: InertiaTensor,
    principal: Principal,
}

impl SectionProperties {
    /// Computes all properties of the given polygon.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegeneratePolygon`] when the polygon
    /// encloses zero signed area.
    pub fn of(polygon: &Polygon) -> Result<Self, GeometryError> {
        let sums = polygon.edge_sums();
        let area = sums.area();
        let centroid = sums.centroid()?;
        let inertia = sums.inertia()?;
        let principal = inertia.principal();

        debug!(
            area,
            cx = centroid.x(),
            cy = centroid.y(),
            theta = principal.theta();
            "Section properties computed"
        );

        Ok(Self {
            area,
            centroid,
            inertia,
            principal,
        })
    }

    /// Signed area of the cross-section
    pub fn area(self) -> f64 {
        self.area
    }

    /// Location of the centroid
    pub fn centroid(self) -> Point {
        self.centroid
    }

    /// Centroidal inertia tensor
    pub fn inertia(self) -> InertiaTensor {
        self.inertia
    }

    /// Principal moments and major-axis orientation
    pub fn principal(self) -> Principal {
        self.principal
    }
}
