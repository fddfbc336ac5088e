//! Command-line argument definitions for the section CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control the input vertex list, diagram
//! output, configuration file selection, and logging verbosity.

use clap::Parser;

use section::OutputFormat;

/// Command-line arguments for the section analysis tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input vertex list (one "x y" or "x,y" pair per line)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Also write the outline diagram next to the summary
    #[arg(short, long)]
    pub diagram: bool,

    /// Output file stem for the diagram (overrides configuration)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Diagram output format (overrides configuration)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
