//! Error types for section property computations.

use thiserror::Error;

/// Errors produced while validating or integrating over a polygon.
///
/// Degeneracy is detected at the point of division: [`super::Polygon`]
/// computations that divide by the signed area signal
/// [`GeometryError::DegeneratePolygon`] instead of returning NaN or
/// infinity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Fewer than three vertices were supplied for a polygon.
    #[error("polygon requires at least 3 vertices, got {count}")]
    InsufficientVertices { count: usize },

    /// The polygon encloses zero signed area (collinear vertices or
    /// self-canceling winding); centroid and inertia are undefined.
    #[error("degenerate polygon: signed area is zero")]
    DegeneratePolygon,
}
