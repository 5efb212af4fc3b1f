//! Configuration module for injurycheckr

mod classes;
mod run;

pub use classes::ClassMap;
pub use run::{artifact_path_in, DetectorConfig, RunConfig, RunConfigBuilder, RunMode};
