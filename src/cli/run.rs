//! Per-mode drivers

use colorful::Colorful;
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::display::show_image;
use super::input::{collect_images, require_single_image};
use super::output::{format_result, format_summary, write_interop};
use crate::config::{RunConfig, RunMode};
use crate::core::{load_detector, write_artifact, AnalyzerBuilder, Detector, InjuryAnalyzer};
use crate::detection::ImageResult;
use crate::error::{InjuryError, InjuryResult};

fn stdout_error(err: io::Error) -> InjuryError {
    InjuryError::output_write(PathBuf::from("<stdout>"), err)
}

/// Run one invocation against `input`, writing to stdout
pub fn run(input: &Path, config: &RunConfig) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.mode {
        RunMode::Interop => {
            let image = require_single_image(input)?;
            prepare_output_dir(config)?;
            let mut analyzer = build_analyzer(config)?;
            run_interop(&mut analyzer, config, &image, &mut out)?;
        }
        RunMode::Interactive => {
            let images = match collect_images(input) {
                Ok(images) => images,
                Err(InjuryError::NoImages(dir)) => {
                    writeln!(out, "{}", format!("No images found in {}", dir.display()).red())?;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };
            writeln!(out, "Found {} image(s)\n", images.len())?;

            if config.save_artifacts {
                if let Err(err) = prepare_output_dir(config) {
                    warn!("{}", err);
                }
            }
            let mut analyzer = build_analyzer(config)?;
            run_interactive(&mut analyzer, config, &images, &mut out)?;
        }
    }

    Ok(())
}

fn build_analyzer(config: &RunConfig) -> InjuryResult<InjuryAnalyzer<Box<dyn Detector>>> {
    let detector = load_detector(config)?;
    info!(
        "loaded {} detector from {}",
        detector.name(),
        config.model_path.display()
    );
    Ok(AnalyzerBuilder::new()
        .annotate(config.save_artifacts || config.show)
        .classes(config.classes.clone())
        .build(detector))
}

fn prepare_output_dir(config: &RunConfig) -> InjuryResult<()> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|e| InjuryError::output_write(&config.output_dir, e))
}

/// Analyze one image and emit its single JSON line.
///
/// The artifact write is part of the contract here; failing it fails the run
/// before anything reaches `out`.
pub fn run_interop<D: Detector, W: Write>(
    analyzer: &mut InjuryAnalyzer<D>,
    config: &RunConfig,
    image: &Path,
    out: &mut W,
) -> InjuryResult<ImageResult> {
    let mut result = analyzer.analyze(image)?;
    write_artifact(&mut result, &config.output_dir)?;
    write_interop(out, result.verdict).map_err(stdout_error)?;
    Ok(result)
}

/// Analyze images one after another, printing a report for each and a
/// summary when there is more than one. Artifact write failures are logged
/// and skipped.
pub fn run_interactive<D: Detector, W: Write>(
    analyzer: &mut InjuryAnalyzer<D>,
    config: &RunConfig,
    images: &[PathBuf],
    out: &mut W,
) -> InjuryResult<Vec<ImageResult>> {
    let mut results = Vec::with_capacity(images.len());

    for path in images {
        writeln!(out, "Analyzing: {}", path.display().to_string().cyan()).map_err(stdout_error)?;

        let mut result = analyzer.analyze(path)?;
        if config.save_artifacts {
            if let Err(err) = write_artifact(&mut result, &config.output_dir) {
                warn!("{}", err);
            }
        }

        write!(out, "{}", format_result(&result, &config.classes, config.verbose))
            .map_err(stdout_error)?;
        writeln!(out).map_err(stdout_error)?;

        if config.show {
            match &result.artifact_path {
                Some(artifact) => {
                    if let Err(err) = show_image(artifact) {
                        warn!("could not open viewer for {}: {}", artifact.display(), err);
                    }
                }
                None => warn!("no saved artifact to show for {}", path.display()),
            }
        }

        // Only the verdict and detections are needed for the summary
        result.annotated = None;
        results.push(result);
    }

    if results.len() > 1 {
        write!(out, "{}", format_summary(&results)).map_err(stdout_error)?;
    }
    out.flush().map_err(stdout_error)?;

    Ok(results)
}
