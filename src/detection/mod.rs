//! Detection module for injurycheckr

mod result;
mod types;
mod verdict;

pub use result::ImageResult;
pub use types::Detection;
pub use verdict::{reduce, severity_of, Verdict, MAJOR_INJURY_CLASS, MINOR_INJURY_CLASS};
