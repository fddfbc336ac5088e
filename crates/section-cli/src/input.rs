//! Vertex-list input parsing.
//!
//! The input format is one coordinate pair per line, separated by
//! whitespace or a comma. Blank lines and lines starting with `#` are
//! ignored.

use std::fs;
use std::path::Path;

use log::debug;

use section_core::Point;

use crate::error::CliError;

/// Reads a vertex list from a file.
pub fn read_vertices(path: impl AsRef<Path>) -> Result<Vec<Point>, CliError> {
    let text = fs::read_to_string(path.as_ref())?;
    let vertices = parse_vertices(&text)?;
    debug!(
        path = path.as_ref().display().to_string(),
        count = vertices.len();
        "Read vertex list"
    );
    Ok(vertices)
}

/// Parses a vertex list from text.
pub fn parse_vertices(text: &str) -> Result<Vec<Point>, CliError> {
    let mut vertices = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        vertices.push(parse_line(line).map_err(|message| {
            CliError::Input(format!("line {}: {message}", index + 1))
        })?);
    }
    Ok(vertices)
}

fn parse_line(line: &str) -> Result<Point, String> {
    let normalized = line.replace(',', " ");
    let fields: Vec<&str> = normalized.split_whitespace().collect();
    let [x, y] = fields.as_slice() else {
        return Err(format!(
            "expected two coordinates, got {} in {line:?}",
            fields.len()
        ));
    };
    let x = x
        .parse::<f64>()
        .map_err(|_| format!("invalid x-coordinate {x:?}"))?;
    let y = y
        .parse::<f64>()
        .map_err(|_| format!("invalid y-coordinate {y:?}"))?;
    Ok(Point::new(x, y))
}
