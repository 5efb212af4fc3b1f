//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ClassMap, RunConfig, RunMode};

/// Classify injury severity in photographs with a YOLO model
#[derive(Parser, Debug, Clone)]
#[command(name = "injurycheckr", version)]
#[command(about = "Detect injuries in images and report the most severe one")]
pub struct Args {
    /// Input image or directory of images
    #[arg(env = "INJURYCHECKR_INPUT")]
    pub input: PathBuf,

    /// Path to the YOLO ONNX model
    #[arg(short, long, env = "INJURYCHECKR_MODEL", default_value = "best.onnx")]
    pub model: PathBuf,

    /// Directory for annotated images
    #[arg(short = 'o', long = "output-dir", env = "INJURYCHECKR_OUTPUT_DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// interactive: human report; interop: one JSON line on stdout
    #[arg(long, value_enum, env = "INJURYCHECKR_MODE", default_value = "interactive")]
    pub mode: RunMode,

    /// Confidence threshold
    #[arg(long, default_value_t = 0.01)]
    pub conf: f32,

    /// IoU threshold for non-maximum suppression
    #[arg(long, default_value_t = 0.3)]
    pub iou: f32,

    /// Model input size (square)
    #[arg(long, default_value_t = 1024)]
    pub imgsz: u32,

    /// Maximum detections per image
    #[arg(long = "max-det", default_value_t = 300)]
    pub max_det: usize,

    /// Class names in model order, comma separated
    #[arg(long, value_delimiter = ',', default_value = "major_injury,minor_injury")]
    pub classes: Vec<String>,

    /// Do not write annotated images (interactive mode only)
    #[arg(long)]
    pub no_save: bool,

    /// Open annotated images in the system viewer (interactive mode only)
    #[arg(long)]
    pub show: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> RunConfig {
        RunConfig::builder()
            .mode(self.mode)
            .model_path(&self.model)
            .output_dir(&self.output_dir)
            .confidence_threshold(self.conf)
            .iou_threshold(self.iou)
            .image_size(self.imgsz)
            .max_detections(self.max_det)
            .classes(ClassMap::new(self.classes.iter().cloned()))
            .save_artifacts(!self.no_save)
            .show(self.show)
            .verbose(self.verbose)
            .build()
    }
}
