// src/core/detector.rs
//
// Detector collaborator seam.

use anyhow::Result;
use image::DynamicImage;

use crate::detection::Detection;

/// Object detector backend.
///
/// Given a decoded image, returns the detections in original-image pixel
/// coordinates. Thresholding and NMS are the backend's responsibility; the
/// caller only reduces what comes back.
pub trait Detector {
    /// Backend identifier
    fn name(&self) -> &'static str;

    /// Run detection on one image. A single attempt; callers do not retry.
    fn detect(&mut self, image: &DynamicImage) -> Result<Vec<Detection>>;
}

impl<D: Detector + ?Sized> Detector for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn detect(&mut self, image: &DynamicImage) -> Result<Vec<Detection>> {
        (**self).detect(image)
    }
}
