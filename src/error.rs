//! Error types for injury analysis
//!
//! Every failure is fatal to the invocation that hit it; nothing is retried.
//! The only exception is an artifact write in interactive mode, which the
//! driver logs and skips.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for injurycheckr
#[derive(Error, Debug)]
pub enum InjuryError {
    #[error("input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("no images found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("interop mode expects a single image, got directory {}", .0.display())]
    DirectoryInInteropMode(PathBuf),

    #[error("failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to load model {}: {reason}", path.display())]
    ModelLoad { path: PathBuf, reason: String },

    #[error("detector failed on {}: {reason}", path.display())]
    Detector { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", path.display())]
    OutputWrite { path: PathBuf, reason: String },
}

impl InjuryError {
    /// Process exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            InjuryError::InputNotFound(_)
            | InjuryError::NoImages(_)
            | InjuryError::DirectoryInInteropMode(_) => 2,
            InjuryError::ImageDecode { .. }
            | InjuryError::ModelLoad { .. }
            | InjuryError::Detector { .. } => 3,
            InjuryError::OutputWrite { .. } => 4,
        }
    }

    /// Wrap a backend failure, keeping the whole context chain in the message
    pub fn detector(path: impl Into<PathBuf>, err: anyhow::Error) -> Self {
        InjuryError::Detector {
            path: path.into(),
            reason: format!("{:#}", err),
        }
    }

    pub fn output_write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        InjuryError::OutputWrite {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Result alias used across the crate
pub type InjuryResult<T> = Result<T, InjuryError>;
