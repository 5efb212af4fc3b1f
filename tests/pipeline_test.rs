// tests/pipeline_test.rs
//
// End-to-end runs of the mode drivers with a scripted detector and real
// image files on disk.

mod test_utils;

use std::fs;
use std::path::PathBuf;

use injurycheckr::cli::{collect_images, run_interactive, run_interop, InteropResult};
use injurycheckr::core::AnalyzerBuilder;
use injurycheckr::{Detection, InjuryAnalyzer, InjuryError, RunConfig, RunMode, StubDetector, Verdict};
use test_utils::{cleanup, scratch_dir, write_test_image};

#[test]
fn test_interop_emits_one_line_and_writes_artifact() {
    let dir = scratch_dir("interop");
    let image = dir.join("1700000000-42.png");
    write_test_image(&image, 64, 48);
    let output_dir = dir.join("output");

    let config = RunConfig::builder()
        .mode(RunMode::Interop)
        .output_dir(&output_dir)
        .build();
    let stub = StubDetector::fixed(vec![
        Detection::new(1, 0.9, [4.0, 4.0, 30.0, 30.0]),
        Detection::new(0, 0.5, [10.0, 10.0, 40.0, 40.0]),
    ]);
    let mut analyzer = InjuryAnalyzer::new(stub);
    let mut out = Vec::new();

    let result = run_interop(&mut analyzer, &config, &image, &mut out).unwrap();
    assert_eq!(result.verdict, Verdict::MajorInjury);

    let stdout = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![r#"{"injuryResult": "major injury"}"#]);
    let parsed: InteropResult = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed.injury_result, Verdict::MajorInjury);

    let artifact = output_dir.join("annotated_1700000000-42.png");
    assert_eq!(result.artifact_path, Some(artifact.clone()));
    let written = image::open(&artifact).unwrap();
    assert_eq!((written.width(), written.height()), (64, 48));

    cleanup(&dir);
}

#[test]
fn test_interop_overwrites_existing_artifact() {
    let dir = scratch_dir("overwrite");
    let image = dir.join("leg.png");
    write_test_image(&image, 32, 32);
    let output_dir = dir.join("out");
    fs::create_dir_all(&output_dir).unwrap();
    let artifact = output_dir.join("annotated_leg.png");
    fs::write(&artifact, b"stale").unwrap();

    let config = RunConfig::builder()
        .mode(RunMode::Interop)
        .output_dir(&output_dir)
        .build();
    let mut analyzer = InjuryAnalyzer::new(StubDetector::new());
    let mut out = Vec::new();
    run_interop(&mut analyzer, &config, &image, &mut out).unwrap();

    assert!(image::open(&artifact).is_ok());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "{\"injuryResult\": \"no injury detected\"}\n"
    );

    cleanup(&dir);
}

#[test]
fn test_interop_artifact_failure_is_fatal_and_silent() {
    let dir = scratch_dir("blocked");
    let image = dir.join("arm.png");
    write_test_image(&image, 16, 16);
    // A regular file where the output directory should be
    let blocked = dir.join("not_a_dir");
    fs::write(&blocked, b"file").unwrap();

    let config = RunConfig::builder()
        .mode(RunMode::Interop)
        .output_dir(&blocked)
        .build();
    let mut analyzer = InjuryAnalyzer::new(StubDetector::fixed(vec![Detection::unboxed(1, 0.7)]));
    let mut out = Vec::new();

    let err = run_interop(&mut analyzer, &config, &image, &mut out).unwrap_err();
    assert!(matches!(err, InjuryError::OutputWrite { .. }));
    assert_eq!(err.exit_code(), 4);
    assert!(out.is_empty());

    cleanup(&dir);
}

#[test]
fn test_interop_accepts_file_without_extension() {
    let dir = scratch_dir("noext");
    let png = dir.join("upload.png");
    write_test_image(&png, 20, 20);
    let bare = dir.join("upload");
    fs::rename(&png, &bare).unwrap();

    let config = RunConfig::builder()
        .mode(RunMode::Interop)
        .output_dir(dir.join("output"))
        .build();
    let mut analyzer = InjuryAnalyzer::new(StubDetector::fixed(vec![Detection::unboxed(1, 0.3)]));
    let mut out = Vec::new();

    let result = run_interop(&mut analyzer, &config, &bare, &mut out).unwrap();
    assert_eq!(result.verdict, Verdict::MinorInjury);
    assert!(dir.join("output").join("annotated_upload").exists());

    cleanup(&dir);
}

#[test]
fn test_interactive_directory_run() {
    let dir = scratch_dir("batch");
    let images_dir = dir.join("images");
    write_test_image(&images_dir.join("a.png"), 32, 32);
    write_test_image(&images_dir.join("nested").join("b.png"), 32, 32);
    write_test_image(&images_dir.join("c.png"), 32, 32);
    fs::write(images_dir.join("notes.txt"), b"not an image").unwrap();

    let images = collect_images(&images_dir).unwrap();
    assert_eq!(images.len(), 3);

    let output_dir = dir.join("output");
    let config = RunConfig::builder().output_dir(&output_dir).build();
    let stub = StubDetector::scripted(vec![
        vec![Detection::new(0, 0.95, [1.0, 1.0, 20.0, 20.0])],
        vec![Detection::new(1, 0.6, [2.0, 2.0, 10.0, 10.0])],
        vec![Detection::new(5, 0.99, [2.0, 2.0, 10.0, 10.0])],
    ]);
    let mut analyzer = InjuryAnalyzer::new(stub);
    let mut out = Vec::new();

    let results = run_interactive(&mut analyzer, &config, &images, &mut out).unwrap();
    let verdicts: Vec<Verdict> = results.iter().map(|r| r.verdict).collect();
    assert_eq!(
        verdicts,
        vec![Verdict::MajorInjury, Verdict::MinorInjury, Verdict::NoInjury]
    );

    // One artifact per image, never a shared path
    let artifacts: Vec<PathBuf> = results.iter().filter_map(|r| r.artifact_path.clone()).collect();
    assert_eq!(artifacts.len(), 3);
    for name in ["annotated_a.png", "annotated_b.png", "annotated_c.png"] {
        assert!(output_dir.join(name).exists(), "missing {}", name);
    }

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Detected Class: major_injury, Confidence: 0.95"));
    assert!(text.contains("Detected Class: class_5, Confidence: 0.99"));
    assert!(text.contains("3 image(s) analyzed"));

    cleanup(&dir);
}

#[test]
fn test_interactive_no_save_writes_nothing() {
    let dir = scratch_dir("nosave");
    let image = dir.join("hand.png");
    write_test_image(&image, 16, 16);
    let output_dir = dir.join("output");

    let config = RunConfig::builder()
        .output_dir(&output_dir)
        .save_artifacts(false)
        .build();
    let mut analyzer = AnalyzerBuilder::new()
        .annotate(false)
        .build(StubDetector::new());
    let mut out = Vec::new();

    let results = run_interactive(&mut analyzer, &config, &[image], &mut out).unwrap();
    assert!(results[0].artifact_path.is_none());
    assert!(!output_dir.exists());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No objects detected in this image."));
    assert!(!text.contains("Summary"));

    cleanup(&dir);
}

#[test]
fn test_interactive_artifact_failure_is_skipped() {
    let dir = scratch_dir("interactive_blocked");
    let first = dir.join("knee.png");
    let second = dir.join("elbow.png");
    write_test_image(&first, 16, 16);
    write_test_image(&second, 16, 16);
    // A regular file where the output directory should be
    let blocked = dir.join("not_a_dir");
    fs::write(&blocked, b"file").unwrap();

    let config = RunConfig::builder().output_dir(&blocked).build();
    let stub = StubDetector::scripted(vec![
        vec![Detection::new(1, 0.8, [1.0, 1.0, 10.0, 10.0])],
        vec![],
    ]);
    let mut analyzer = InjuryAnalyzer::new(stub);
    let mut out = Vec::new();

    let results = run_interactive(&mut analyzer, &config, &[first, second], &mut out).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.artifact_path.is_none()));
    assert_eq!(results[0].verdict, Verdict::MinorInjury);
    assert_eq!(results[1].verdict, Verdict::NoInjury);
    assert!(blocked.is_file());

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Detected Class: minor_injury, Confidence: 0.80"));
    assert!(text.contains("No objects detected in this image."));
    assert!(!text.contains("Annotated image saved at"));
    assert!(text.contains("2 image(s) analyzed"));

    cleanup(&dir);
}
