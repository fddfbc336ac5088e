//! CLI logic for the section analysis tool.
//!
//! Reads a vertex list, prints the cross-sectional property summary, and
//! optionally writes the outline diagram.

pub mod input;

mod args;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use section::{OutlineConfig, Polygon};

/// Run the section CLI application.
///
/// # Errors
///
/// Returns [`CliError`] for:
/// - File I/O errors
/// - Vertex-list or configuration parse errors
/// - Degenerate or undersized polygons
/// - Diagram export errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input_path = args.input; "Analyzing cross-section");

    let vertices = input::read_vertices(&args.input)?;
    let polygon = Polygon::new(vertices)?;

    let summary = section::summary(&polygon)?;
    println!("{summary}");

    if args.diagram {
        let config = outline_config(args)?;
        section::outline(&polygon, &config)?;
        info!(output_path = config.output_path().display().to_string(); "Diagram exported");
    }

    Ok(())
}

/// Loads the outline configuration and applies command-line overrides.
fn outline_config(args: &Args) -> Result<OutlineConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            toml::from_str(&text).map_err(|err| CliError::Config(err.to_string()))?
        }
        None => OutlineConfig::default(),
    };

    if let Some(output) = &args.output {
        config = config.with_basename(output);
    }
    if let Some(format) = args.format {
        config = config.with_format(format);
    }

    Ok(config)
}
