//! Input discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{InjuryError, InjuryResult};

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "bmp", "webp", "tif", "tiff"];

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collect images for interactive mode.
///
/// A file is taken as-is, whatever its extension; a directory is walked and
/// filtered by extension. Paths come back sorted.
pub fn collect_images(path: &Path) -> InjuryResult<Vec<PathBuf>> {
    if !path.exists() {
        return Err(InjuryError::InputNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| has_image_extension(p))
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(InjuryError::NoImages(path.to_path_buf()));
    }
    Ok(files)
}

/// Validate the single image interop mode expects
pub fn require_single_image(path: &Path) -> InjuryResult<PathBuf> {
    if !path.exists() {
        return Err(InjuryError::InputNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(InjuryError::DirectoryInInteropMode(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
