//! Configuration types for outline diagram rendering.
//!
//! [`OutlineConfig`] controls where and how the outline diagram is
//! written. All fields have defaults and the struct implements
//! [`serde::Deserialize`] for loading from external sources such as a
//! TOML file.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;

/// Output file format for the outline diagram.
///
/// Only vector output is supported: the drawing backend builds SVG
/// documents. The configured canvas size and resolution still determine
/// the emitted pixel dimensions, so downstream rasterization honors
/// them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            other => Err(format!("unsupported output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
        }
    }
}

/// Rendering options for the outline diagram.
///
/// Defaults mirror the conventional values: basename `section`, SVG
/// output, an 8x8 canvas at 100 dpi.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Output file stem; the extension comes from `format`.
    basename: String,

    /// Output encoding.
    format: OutputFormat,

    /// Canvas dimensions in output units (width, height).
    size: (f64, f64),

    /// Raster resolution in dots per unit.
    dpi: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            basename: "section".to_string(),
            format: OutputFormat::default(),
            size: (8.0, 8.0),
            dpi: 100,
        }
    }
}

impl OutlineConfig {
    /// Returns the output file stem.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the canvas dimensions in output units.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Returns the raster resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns a copy with the given basename.
    pub fn with_basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = basename.into();
        self
    }

    /// Returns a copy with the given output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The output path `<basename>.<format>`.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.basename, self.format))
    }

    /// Canvas dimensions in pixels (`size` scaled by `dpi`).
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            self.size.0 * f64::from(self.dpi),
            self.size.1 * f64::from(self.dpi),
        )
    }

    /// Checks that the configuration describes a drawable canvas.
    ///
    /// The canvas dimensions must be finite and positive and `dpi`
    /// must be non-zero, otherwise the pixel canvas collapses to zero
    /// extent.
    pub fn validate(&self) -> Result<(), String> {
        let (width, height) = self.size;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(format!(
                "canvas size must be finite and positive, got {width}x{height}"
            ));
        }
        if self.dpi == 0 {
            return Err("dpi must be non-zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OutlineConfig::default();
        assert_eq!(config.basename(), "section");
        assert_eq!(config.format(), OutputFormat::Svg);
        assert_eq!(config.size(), (8.0, 8.0));
        assert_eq!(config.dpi(), 100);
        assert_eq!(config.output_path(), PathBuf::from("section.svg"));
        assert_eq!(config.pixel_size(), (800.0, 800.0));
    }

    #[test]
    fn test_with_basename() {
        let config = OutlineConfig::default().with_basename("beam");
        assert_eq!(config.output_path(), PathBuf::from("beam.svg"));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("svg".parse::<OutputFormat>(), Ok(OutputFormat::Svg));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(OutlineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_dpi() {
        let config: OutlineConfig = toml::from_str("dpi = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_size() {
        for toml in ["size = [0.0, 0.0]", "size = [8.0, -1.0]", "size = [inf, 8.0]"] {
            let config: OutlineConfig = toml::from_str(toml).unwrap();
            assert!(config.validate().is_err(), "accepted {toml}");
        }
    }

    #[test]
    fn test_format_display_round_trip() {
        let format = OutputFormat::Svg;
        assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
    }
}
