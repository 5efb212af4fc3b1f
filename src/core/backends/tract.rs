#![cfg(feature = "backend-tract")]

use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use image::DynamicImage;
use log::debug;
use tract_onnx::prelude::*;

use crate::config::DetectorConfig;
use crate::core::postprocess::postprocess;
use crate::core::preprocess::letterbox;
use crate::core::Detector;
use crate::detection::Detection;

/// Tract-based backend for YOLOv8 ONNX exports.
///
/// The model is pinned to a `[1, 3, size, size]` f32 input at load time.
/// Nothing is written to disk and no state survives between calls.
pub struct TractDetector {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>,
    config: DetectorConfig,
}

impl TractDetector {
    /// Load an ONNX model from disk and prepare it for inference.
    pub fn new<P: AsRef<Path>>(model_path: P, config: DetectorConfig) -> Result<Self> {
        let model_path = model_path.as_ref();
        let size = config.image_size as usize;
        let started = Instant::now();

        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .with_context(|| format!("failed to load ONNX model from {}", model_path.display()))?
            .with_input_fact(
                0,
                InferenceFact::dt_shape(f32::datum_type(), tvec!(1, 3, size, size)),
            )
            .context("failed to set input fact")?
            .into_optimized()
            .context("failed to optimize ONNX model")?
            .into_runnable()
            .context("failed to build runnable ONNX model")?;

        if config.verbose {
            debug!(
                "loaded {} ({}x{} input) in {:.2?}",
                model_path.display(),
                size,
                size,
                started.elapsed()
            );
        }

        Ok(Self { model, config })
    }

    fn build_input(&self, data: Vec<f32>) -> Result<Tensor> {
        let size = self.config.image_size as usize;
        let input = tract_ndarray::Array4::from_shape_vec((1, 3, size, size), data)
            .context("letterboxed buffer has the wrong length")?;
        Ok(input.into_tensor())
    }
}

impl Detector for TractDetector {
    fn name(&self) -> &'static str {
        "tract"
    }

    fn detect(&mut self, image: &DynamicImage) -> Result<Vec<Detection>> {
        let started = Instant::now();
        let (geometry, data) = letterbox(image, self.config.image_size);
        let input = self.build_input(data)?;

        let outputs = self
            .model
            .run(tvec!(input.into()))
            .context("ONNX inference failed")?;
        let output = outputs
            .first()
            .ok_or_else(|| anyhow!("model produced no outputs"))?;
        let view = output
            .to_array_view::<f32>()
            .context("model output tensor was not f32")?;

        let shape = view.shape().to_vec();
        let values: Vec<f32> = view.iter().copied().collect();
        let detections = postprocess(&shape, &values, &geometry, &self.config)?;

        if self.config.verbose {
            debug!(
                "{}x{}: {} detection(s), output {:?}, {:.2?}",
                geometry.source_width,
                geometry.source_height,
                detections.len(),
                shape,
                started.elapsed()
            );
        }

        Ok(detections)
    }
}
