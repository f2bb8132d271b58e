//! CLI logic for the Strata diagram tool.
//!
//! Reads a manifest of diagrams, renders every entry and writes one SVG
//! file per diagram into the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info, warn};
use rayon::prelude::*;

use strata::{DiagramBuilder, StrataError};

/// Run the Strata CLI application
///
/// Every diagram is rendered in memory, in parallel, before the first file
/// is written. If any diagram fails, nothing is written. Returns the number
/// of SVG files written.
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Manifest errors
/// - Layout errors
pub fn run(args: &Args) -> Result<usize, StrataError> {
    info!(
        input_path = args.input,
        output_dir = args.output_dir;
        "Processing manifest"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let manifest = builder.parse_manifest(&source)?;

    if manifest.is_empty() {
        warn!(input_path = args.input; "Manifest contains no diagrams");
        return Ok(0);
    }

    let rendered = manifest
        .entries()
        .par_iter()
        .map(|entry| -> Result<(String, String), StrataError> {
            let diagram = builder.diagram(entry);
            let svg = builder.render_svg(&diagram)?;
            Ok((entry.file_name(), svg))
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(diagrams = rendered.len(); "All diagrams rendered");

    let output_dir = Path::new(&args.output_dir);
    for (file_name, svg) in &rendered {
        strata::write_svg(output_dir.join(file_name), svg)?;
    }

    info!(
        diagrams = rendered.len(),
        output_dir = args.output_dir;
        "SVG files exported successfully"
    );

    Ok(rendered.len())
}
