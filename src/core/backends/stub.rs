use anyhow::{anyhow, Result};
use image::DynamicImage;
use std::collections::VecDeque;

use crate::core::Detector;
use crate::detection::Detection;

/// Scripted backend for testing.
///
/// Returns queued detection lists one call at a time, then falls back to a
/// fixed list. Can also be told to fail every call.
#[derive(Debug, Clone, Default)]
pub struct StubDetector {
    script: VecDeque<Vec<Detection>>,
    fallback: Vec<Detection>,
    failure: Option<String>,
    calls: usize,
}

impl StubDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same detections for every image
    pub fn fixed(detections: Vec<Detection>) -> Self {
        Self {
            fallback: detections,
            ..Self::default()
        }
    }

    /// One detection list per call, in order; empty once exhausted
    pub fn scripted(script: Vec<Vec<Detection>>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl Detector for StubDetector {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn detect(&mut self, _image: &DynamicImage) -> Result<Vec<Detection>> {
        self.calls += 1;
        if let Some(message) = &self.failure {
            return Err(anyhow!("{}", message));
        }
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
