//! Command-line argument definitions for the Strata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the manifest path, the output directory,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Strata diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the diagram manifest (TOML)
    #[arg(help = "Path to the manifest file")]
    pub input: String,

    /// Directory the SVG files are written to
    #[arg(short, long, default_value = "diagrams")]
    pub output_dir: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
