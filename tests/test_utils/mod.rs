#![allow(dead_code)]

use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use uuid::Uuid;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_injurycheckr"))
}

pub fn run_injurycheckr<P: AsRef<std::ffi::OsStr>>(input: P) -> Command {
    let mut cmd = Command::new(get_binary_path());
    cmd.arg(input);
    // Keep the caller's environment from leaking into argument defaults
    for var in [
        "INJURYCHECKR_INPUT",
        "INJURYCHECKR_MODEL",
        "INJURYCHECKR_OUTPUT_DIR",
        "INJURYCHECKR_MODE",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run_interop<P: AsRef<std::ffi::OsStr>>(input: P, model: &Path, output_dir: &Path) -> Output {
    run_injurycheckr(input)
        .arg("--mode")
        .arg("interop")
        .arg("--model")
        .arg(model)
        .arg("--output-dir")
        .arg(output_dir)
        .output()
        .expect("Failed to execute in interop mode")
}

/// Fresh scratch directory under the system temp dir
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("injurycheckr-{}-{}", label, Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}

/// Write a small synthetic photo: gray background with a darker square
pub fn write_test_image(path: &Path, width: u32, height: u32) {
    let mut img = RgbImage::from_pixel(width, height, Rgb([180, 170, 160]));
    for y in height / 4..height / 2 {
        for x in width / 4..width / 2 {
            img.put_pixel(x, y, Rgb([120, 40, 40]));
        }
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create image directory");
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .expect("Failed to write test image");
}

pub fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}
