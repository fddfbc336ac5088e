//! Section - Cross-section property reports and outline diagrams.
//!
//! This crate composes the math in [`section_core`] into the two
//! user-facing products: a structured property [`report`](crate::report)
//! and an outline [`diagram`](crate::diagram) rendered through a
//! backend-agnostic drawing [`surface`](crate::surface). The bundled
//! backend writes SVG.
//!
//! # Examples
//!
//! ```no_run
//! use section::{OutlineConfig, Point, Polygon};
//!
//! let polygon = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(0.0, 3.0),
//! ])?;
//!
//! // Print the property report.
//! println!("{}", section::summary(&polygon)?);
//!
//! // Write `section.svg` with centroid and principal axes overlaid.
//! section::outline(&polygon, &OutlineConfig::default())?;
//! # Ok::<(), section::SectionError>(())
//! ```

pub mod config;
pub mod diagram;
pub mod report;
pub mod surface;

mod error;
mod svg_surface;

pub use config::{OutlineConfig, OutputFormat};
pub use diagram::{DiagramSpec, Segment};
pub use error::{ExportError, SectionError};
pub use report::Summary;
pub use surface::Surface;
pub use svg_surface::SvgSurface;

pub use section_core::{
    Bounds, GeometryError, InertiaTensor, Point, Polygon, Principal, SectionProperties,
};

use log::info;

/// Computes the full property report for a polygon.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePolygon`] for zero-area input.
pub fn summary(polygon: &Polygon) -> Result<Summary, GeometryError> {
    SectionProperties::of(polygon).map(Summary::new)
}

/// Renders the outline diagram of a polygon to a file.
///
/// The output is `<basename>.<format>` per the configuration: the closed
/// outline as a marked polyline, the centroid marker, and the two
/// principal-axis segments under an equal-aspect projection.
///
/// # Errors
///
/// Returns [`SectionError::Config`] when the configuration describes an
/// empty canvas, [`SectionError::Geometry`] for degenerate input and
/// [`SectionError::Export`] when the write fails; a failed write leaves
/// no partial file behind.
pub fn outline(polygon: &Polygon, config: &OutlineConfig) -> Result<(), SectionError> {
    config.validate().map_err(SectionError::Config)?;
    let properties = SectionProperties::of(polygon)?;
    let spec = DiagramSpec::from_properties(polygon, &properties);

    let path = config.output_path();
    info!(path = path.display().to_string(); "Rendering outline diagram");

    let mut surface = SvgSurface::new(&path, config.pixel_size());
    spec.render(&mut surface)?;
    Ok(())
}
