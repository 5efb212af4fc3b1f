//! Image analysis: detector collaborator, pre/post-processing and annotation

pub mod analyzer;
pub mod annotate;
pub mod artifact;
pub mod backends;
pub mod detector;
pub mod postprocess;
pub mod preprocess;

pub use analyzer::{AnalyzerBuilder, InjuryAnalyzer};
pub use artifact::write_artifact;
pub use backends::{load_detector, StubDetector};
pub use detector::Detector;
pub use preprocess::Letterbox;

#[cfg(feature = "backend-tract")]
pub use backends::TractDetector;
