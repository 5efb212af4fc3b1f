// src/core/artifact.rs
//
// Persisting annotated images next to the run's output directory.

use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::artifact_path_in;
use crate::detection::ImageResult;
use crate::error::{InjuryError, InjuryResult};

/// Write the annotated image of `result` to `<output_dir>/annotated_<name>`.
///
/// Creates the directory if needed and overwrites any existing file. The
/// encoder follows the file extension; names without a writable extension
/// are encoded as PNG under the same name. Records the path on the result.
pub fn write_artifact(result: &mut ImageResult, output_dir: &Path) -> InjuryResult<PathBuf> {
    let path = artifact_path_in(output_dir, &result.file_name());

    let annotated = result
        .annotated
        .as_ref()
        .ok_or_else(|| InjuryError::output_write(&path, "no annotated image to write"))?;

    fs::create_dir_all(output_dir).map_err(|e| InjuryError::output_write(output_dir, e))?;

    let format = ImageFormat::from_path(&path)
        .ok()
        .filter(|f| f.writing_enabled())
        .unwrap_or(ImageFormat::Png);

    annotated
        .save_with_format(&path, format)
        .map_err(|e| InjuryError::output_write(&path, e))?;

    log::debug!("annotated image written to {}", path.display());
    result.artifact_path = Some(path.clone());
    Ok(path)
}
