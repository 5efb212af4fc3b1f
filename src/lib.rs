//! injurycheckr - Injury severity classification from object detections
//!
//! Runs a YOLO-style ONNX model over photographs and reduces each image's
//! detections to one of three verdicts: major injury, minor injury, or no
//! injury detected. Major always dominates minor, and confidence scores never
//! change the verdict, only whether a box was detected at all.
//!
//! ## Module Structure
//!
//! - `detection` - Detection, Verdict and the reduction between them
//! - `core` - Detector trait, ONNX backend, letterboxing, NMS, annotation
//! - `config` - Run mode, detector thresholds, class names
//! - `cli` - Argument parsing, report formatting, interop emission
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use injurycheckr::config::RunConfig;
//! use injurycheckr::core::{load_detector, InjuryAnalyzer};
//!
//! let config = RunConfig::builder().model_path("best.onnx").build();
//! let mut analyzer = InjuryAnalyzer::new(load_detector(&config)?);
//! let result = analyzer.analyze("wound.jpg")?;
//!
//! println!("{}", result.verdict);
//! ```
//!
//! ## Interop
//!
//! With `--mode interop` the binary prints exactly one line to stdout,
//! for example `{"injuryResult": "minor injury"}`, and logs nothing.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Configuration
pub mod config;

// Detection and verdict types
pub mod detection;

pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{ClassMap, DetectorConfig, RunConfig, RunConfigBuilder, RunMode};
pub use core::{Detector, InjuryAnalyzer, StubDetector};
pub use detection::{reduce, Detection, ImageResult, Verdict};
pub use error::{InjuryError, InjuryResult};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
