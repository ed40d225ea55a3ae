//! JSON layout profile output writer.
//!
//! Writes LayoutProfile structs to JSON files with proper formatting.

use crate::output::svg::validate_output_path;
use crate::parser::schema::LayoutProfile;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a layout profile to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `profile` - Profile data to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_profile(
    profile: &LayoutProfile,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing layout profile to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, profile).map_err(OutputError::SerializationFailed)?;

    info!(
        "Profile written successfully ({} frames)",
        profile.frame_count
    );

    Ok(())
}

/// Read a layout profile from a JSON file
///
/// **Public** - useful for validation, tooling, and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_profile(input_path: impl AsRef<Path>) -> Result<LayoutProfile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading layout profile from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let profile: LayoutProfile =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Profile loaded: version {}, {} frames",
        profile.version, profile.frame_count
    );

    Ok(profile)
}
