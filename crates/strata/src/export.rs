//! Exporting rendered diagrams.
//!
//! [`svg`] turns a [`DiagramLayout`](crate::layout::DiagramLayout) into an SVG
//! document. [`write_svg`] is the separate file-write step.

pub mod svg;

use std::{fs, path::Path};

use log::{debug, error, info};

use crate::StrataError;

/// Writes rendered SVG text to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`StrataError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_svg(path: impl AsRef<Path>, svg: &str) -> Result<(), StrataError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        debug!(directory = parent.display().to_string(); "Ensuring output directory");
        if let Err(err) = fs::create_dir_all(parent) {
            error!(
                directory = parent.display().to_string(),
                err:err;
                "Failed to create output directory"
            );
            return Err(StrataError::Io(err));
        }
    }

    if let Err(err) = fs::write(path, svg) {
        error!(file_name = path.display().to_string(), err:err; "Failed to write SVG file");
        return Err(StrataError::Io(err));
    }

    info!(file_name = path.display().to_string(); "SVG file written");
    Ok(())
}
