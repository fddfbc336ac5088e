//! Section Core
//!
//! Cross-sectional property math for simple closed 2D polygons. It includes:
//!
//! - **Geometry**: Basic geometric value types ([`geometry`] module)
//! - **Polygon**: Closed-ring normalization and the shoelace line integrals
//!   for area, centroid, and centroidal inertia ([`polygon`] module)
//! - **Tensor**: Principal-axis resolution of the 2x2 inertia tensor
//!   ([`tensor`] module)
//! - **Properties**: One-pass aggregation of all section properties
//!   ([`properties`] module)

pub mod geometry;
pub mod polygon;
pub mod properties;
pub mod tensor;

mod error;

pub use error::GeometryError;
pub use geometry::{Bounds, Point};
pub use polygon::Polygon;
pub use properties::SectionProperties;
pub use tensor::{InertiaTensor, Principal};
