// src/config/run.rs
//
// Run configuration: operating mode, detector thresholds and output layout.

use clap::ValueEnum;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ClassMap;

/// Operating mode of a single invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
pub enum RunMode {
    /// Human-readable report, optional viewer, batch summary
    #[default]
    Interactive,
    /// Exactly one JSON line on stdout for a calling process
    Interop,
}

impl RunMode {
    pub fn name(&self) -> &'static str {
        match self {
            RunMode::Interactive => "interactive",
            RunMode::Interop => "interop",
        }
    }
}

/// Settings handed to the detector backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum class score for a candidate box
    pub confidence_threshold: f32,
    /// IoU above which same-class boxes are suppressed
    pub iou_threshold: f32,
    /// Square model input size in pixels
    pub image_size: u32,
    pub max_detections: usize,
    /// Backend diagnostics; always off in interop mode
    pub verbose: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.01,
            iou_threshold: 0.3,
            image_size: 1024,
            max_detections: 300,
            verbose: false,
        }
    }
}

/// Complete configuration for one invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: RunMode,
    pub model_path: PathBuf,
    pub output_dir: PathBuf,
    pub detector: DetectorConfig,
    pub classes: ClassMap,
    pub save_artifacts: bool,
    pub show: bool,
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfigBuilder::new().build()
    }
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Deterministic artifact location for an input file name
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        artifact_path_in(&self.output_dir, file_name)
    }

    /// Default log filter for this run; interop keeps stderr silent too
    pub fn log_level(&self) -> LevelFilter {
        match (self.mode, self.verbose) {
            (RunMode::Interop, _) => LevelFilter::Off,
            (RunMode::Interactive, true) => LevelFilter::Debug,
            (RunMode::Interactive, false) => LevelFilter::Info,
        }
    }

    pub fn is_interop(&self) -> bool {
        self.mode == RunMode::Interop
    }
}

/// `<output_dir>/annotated_<file_name>`
pub fn artifact_path_in(output_dir: &Path, file_name: &str) -> PathBuf {
    output_dir.join(format!("annotated_{}", file_name))
}

/// Builder for RunConfig
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    mode: RunMode,
    model_path: PathBuf,
    output_dir: PathBuf,
    detector: DetectorConfig,
    classes: ClassMap,
    save_artifacts: bool,
    show: bool,
    verbose: bool,
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self {
            mode: RunMode::Interactive,
            model_path: PathBuf::from("best.onnx"),
            output_dir: PathBuf::from("output"),
            detector: DetectorConfig::default(),
            classes: ClassMap::default(),
            save_artifacts: true,
            show: false,
            verbose: false,
        }
    }

    pub fn mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn confidence_threshold(mut self, threshold: f32) -> Self {
        self.detector.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn iou_threshold(mut self, threshold: f32) -> Self {
        self.detector.iou_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn image_size(mut self, size: u32) -> Self {
        self.detector.image_size = size.max(32);
        self
    }

    pub fn max_detections(mut self, max: usize) -> Self {
        self.detector.max_detections = max;
        self
    }

    pub fn classes(mut self, classes: ClassMap) -> Self {
        self.classes = classes;
        self
    }

    pub fn save_artifacts(mut self, save: bool) -> Self {
        self.save_artifacts = save;
        self
    }

    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Interop mode overrides the interactive-only switches: the artifact is
    /// always written, nothing is displayed, and the detector stays quiet.
    pub fn build(self) -> RunConfig {
        let interop = self.mode == RunMode::Interop;
        let verbose = self.verbose && !interop;

        let mut detector = self.detector;
        detector.verbose = verbose;

        RunConfig {
            mode: self.mode,
            model_path: self.model_path,
            output_dir: self.output_dir,
            detector,
            classes: self.classes,
            save_artifacts: self.save_artifacts || interop,
            show: self.show && !interop,
            verbose,
        }
    }
}
