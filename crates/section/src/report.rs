//! Text summary of cross-sectional properties.

use std::fmt;

use section_core::SectionProperties;

/// A read-only structured report of every section property.
///
/// [`Summary`] applies no further computation beyond the
/// radians-to-degrees conversion for display. The [`fmt::Display`]
/// implementation produces the conventional plain-text block; callers
/// needing other layouts can read the fields through
/// [`Summary::properties`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    properties: SectionProperties,
}

impl Summary {
    /// Wraps computed properties in a report.
    pub fn new(properties: SectionProperties) -> Self {
        Self { properties }
    }

    /// Returns the underlying properties.
    pub fn properties(&self) -> SectionProperties {
        self.properties
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.properties;
        let tensor = p.inertia();
        let principal = p.principal();
        write!(
            f,
            "Area\n  A = {}\nCentroid\n  cx = {}\n  cy = {}\n\
             Moments and product of inertia\n  Ixx = {}\n  Iyy = {}\n  Ixy = {}\n\
             Principal moments of inertia and direction\n  I1 = {}\n  I2 = {}\n  θ = {}°",
            p.area(),
            p.centroid().x(),
            p.centroid().y(),
            tensor.ixx(),
            tensor.iyy(),
            tensor.ixy(),
            principal.i1(),
            principal.i2(),
            principal.theta_degrees(),
        )
    }
}
