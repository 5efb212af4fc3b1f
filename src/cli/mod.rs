// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod display;
mod input;
mod output;
mod run;

pub use args::Args;
pub use display::show_image;
pub use input::{collect_images, require_single_image};
pub use output::{format_interop, format_result, format_summary, write_interop, InteropResult};
pub use run::{run, run_interactive, run_interop};
