//! SVG flamegraph output writer.
//!
//! Writes SVG content to files with proper encoding.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write SVG content to a file
///
/// **Public** - main entry point for SVG output
///
/// # Arguments
/// * `svg_content` - SVG string from the flamegraph generator
/// * `output_path` - Path to output SVG file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
///
/// # Example
/// ```ignore
/// let svg = generate_svg(&entries, &SvgConfig::default())?;
/// write_svg(&svg, "flamegraph.svg")?;
/// ```
pub fn write_svg(svg_content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing SVG to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory: {e}"))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(svg_content.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "SVG written successfully ({} bytes, {:.2} KB)",
        svg_content.len(),
        svg_content.len() as f64 / 1024.0
    );

    Ok(())
}

/// Validate an output path before writing
///
/// **Private** - internal validation, shared with the JSON writer
pub(crate) fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
