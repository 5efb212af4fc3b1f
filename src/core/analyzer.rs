// src/core/analyzer.rs
//
// High-level image analysis API with builder pattern.

use image::{DynamicImage, ImageReader};
use log::{debug, info};
use std::path::Path;

use super::annotate::annotate;
use super::Detector;
use crate::config::ClassMap;
use crate::detection::ImageResult;
use crate::error::{InjuryError, InjuryResult};

/// Builder for InjuryAnalyzer configuration
pub struct AnalyzerBuilder {
    annotate: bool,
    classes: ClassMap,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            annotate: true,
            classes: ClassMap::default(),
        }
    }

    /// Draw the annotated artifact for each image
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Class names used for the box labels
    pub fn classes(mut self, classes: ClassMap) -> Self {
        self.classes = classes;
        self
    }

    pub fn build<D: Detector>(self, detector: D) -> InjuryAnalyzer<D> {
        InjuryAnalyzer {
            detector,
            annotate: self.annotate,
            classes: self.classes,
        }
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the detector over images and reduces each to an ImageResult
pub struct InjuryAnalyzer<D: Detector> {
    detector: D,
    annotate: bool,
    classes: ClassMap,
}

impl<D: Detector> InjuryAnalyzer<D> {
    /// Create analyzer with default configuration
    pub fn new(detector: D) -> Self {
        AnalyzerBuilder::new().build(detector)
    }

    /// Decode and analyze the image at `path`
    pub fn analyze<P: AsRef<Path>>(&mut self, path: P) -> InjuryResult<ImageResult> {
        let path = path.as_ref();
        let image = load_image(path)?;
        self.analyze_image(path, &image)
    }

    /// Analyze an already decoded image
    pub fn analyze_image<P: AsRef<Path>>(
        &mut self,
        path: P,
        image: &DynamicImage,
    ) -> InjuryResult<ImageResult> {
        let path = path.as_ref();
        debug!(
            "running {} detector on {} ({}x{})",
            self.detector.name(),
            path.display(),
            image.width(),
            image.height()
        );

        let detections = self
            .detector
            .detect(image)
            .map_err(|e| InjuryError::detector(path, e))?;

        let mut result = ImageResult::new(path, detections);
        if self.annotate {
            let annotated = annotate(image, &result.detections, &self.classes);
            result = result.with_annotated(annotated);
        }

        info!(
            "{}: {} detection(s), {}",
            path.display(),
            result.detections.len(),
            result.verdict
        );
        Ok(result)
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }
}

/// Decode an image, sniffing the format from content when the extension is
/// missing or wrong
pub fn load_image(path: &Path) -> InjuryResult<DynamicImage> {
    if !path.exists() {
        return Err(InjuryError::InputNotFound(path.to_path_buf()));
    }

    let decode_error = |source: image::ImageError| InjuryError::ImageDecode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .map_err(|e| decode_error(e.into()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.into()))?
        .decode()
        .map_err(decode_error)
}
