//! Output formatting for CLI results

use colorful::Colorful;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::config::ClassMap;
use crate::detection::{ImageResult, Verdict};

/// Structured result consumed by the calling process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteropResult {
    #[serde(rename = "injuryResult")]
    pub injury_result: Verdict,
}

impl From<Verdict> for InteropResult {
    fn from(verdict: Verdict) -> Self {
        Self {
            injury_result: verdict,
        }
    }
}

/// Compact JSON with `": "` and `", "` separators, the layout callers of the
/// previous script already parse
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Format a verdict as the single interop line (without trailing newline)
pub fn format_interop(verdict: Verdict) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    InteropResult::from(verdict).serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the interop line and flush; this is the only stdout output in interop mode
pub fn write_interop<W: Write>(out: &mut W, verdict: Verdict) -> io::Result<()> {
    let line = format_interop(verdict)?;
    writeln!(out, "{}", line)?;
    out.flush()
}

fn verdict_colored(verdict: Verdict) -> String {
    let text = format!("{} {}", verdict.symbol(), verdict.label().to_uppercase());
    match verdict {
        Verdict::NoInjury => text.green().to_string(),
        Verdict::MinorInjury => text.yellow().to_string(),
        Verdict::MajorInjury => text.red().to_string(),
    }
}

/// Format one image result for terminal output
pub fn format_result(result: &ImageResult, classes: &ClassMap, verbose: bool) -> String {
    let mut output = String::new();

    if result.detections.is_empty() {
        output.push_str("  No objects detected in this image.\n");
    }
    for det in &result.detections {
        output.push_str(&format!(
            "  Detected Class: {}, Confidence: {:.2}\n",
            classes.name(det.class_id),
            det.confidence
        ));
        if verbose {
            output.push_str(&format!(
                "    bbox: ({:.1}, {:.1}) - ({:.1}, {:.1})\n",
                det.x1, det.y1, det.x2, det.y2
            ));
        }
    }

    output.push_str(&format!("  Status: {}\n", verdict_colored(result.verdict)));

    if let Some(path) = &result.artifact_path {
        output.push_str(&format!("  Annotated image saved at: {}\n", path.display()));
    }

    output
}

/// Format a summary for multiple images
pub fn format_summary(results: &[ImageResult]) -> String {
    let count = |v: Verdict| results.iter().filter(|r| r.verdict == v).count();

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Summary:".bold()));
    output.push_str(&format!("  {} image(s) analyzed\n", results.len()));

    let major = count(Verdict::MajorInjury);
    let minor = count(Verdict::MinorInjury);
    let none = count(Verdict::NoInjury);

    if major > 0 {
        output.push_str(&format!("  {}\n", format!("✗ {} major injury", major).red()));
    }
    if minor > 0 {
        output.push_str(&format!("  {}\n", format!("⚠ {} minor injury", minor).yellow()));
    }
    if none > 0 {
        output.push_str(&format!("  {}\n", format!("✓ {} no injury detected", none).green()));
    }

    output
}
