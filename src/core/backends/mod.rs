pub mod stub;

#[cfg(feature = "backend-tract")]
pub mod tract;

pub use stub::StubDetector;

#[cfg(feature = "backend-tract")]
pub use tract::TractDetector;

use super::Detector;
use crate::config::RunConfig;
use crate::error::{InjuryError, InjuryResult};

/// Load the ONNX detector described by `config`.
///
/// Fails with `ModelLoad` when the file is missing or is not a loadable graph.
pub fn load_detector(config: &RunConfig) -> InjuryResult<Box<dyn Detector>> {
    if !config.model_path.is_file() {
        return Err(InjuryError::ModelLoad {
            path: config.model_path.clone(),
            reason: "model file not found".to_string(),
        });
    }

    load_onnx(config)
}

#[cfg(feature = "backend-tract")]
fn load_onnx(config: &RunConfig) -> InjuryResult<Box<dyn Detector>> {
    let detector = TractDetector::new(&config.model_path, config.detector.clone()).map_err(|e| {
        InjuryError::ModelLoad {
            path: config.model_path.clone(),
            reason: format!("{:#}", e),
        }
    })?;
    Ok(Box::new(detector))
}

#[cfg(not(feature = "backend-tract"))]
fn load_onnx(config: &RunConfig) -> InjuryResult<Box<dyn Detector>> {
    Err(InjuryError::ModelLoad {
        path: config.model_path.clone(),
        reason: "built without the backend-tract feature".to_string(),
    })
}
