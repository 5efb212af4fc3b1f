//! Per-image analysis result

use image::RgbImage;
use std::path::{Path, PathBuf};

use super::{Detection, Verdict};

/// Complete analysis result for one image
#[derive(Debug, Clone)]
pub struct ImageResult {
    pub image_path: PathBuf,
    pub detections: Vec<Detection>,
    pub annotated: Option<RgbImage>,
    pub verdict: Verdict,
    /// Where the annotated artifact was written, once it has been
    pub artifact_path: Option<PathBuf>,
}

impl ImageResult {
    /// Build a result; the verdict is derived from the detections here and nowhere else
    pub fn new(image_path: impl Into<PathBuf>, detections: Vec<Detection>) -> Self {
        let verdict = Verdict::from_detections(&detections);
        Self {
            image_path: image_path.into(),
            detections,
            annotated: None,
            verdict,
            artifact_path: None,
        }
    }

    pub fn with_annotated(mut self, annotated: RgbImage) -> Self {
        self.annotated = Some(annotated);
        self
    }

    pub fn path(&self) -> &Path {
        &self.image_path
    }

    /// File name of the input image, used to derive the artifact name
    pub fn file_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.png".to_string())
    }

    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}
