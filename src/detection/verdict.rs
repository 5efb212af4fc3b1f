//! Reduction of per-image detections to a single severity verdict

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Detection;

/// Model class id for a major injury
pub const MAJOR_INJURY_CLASS: u32 = 0;
/// Model class id for a minor injury
pub const MINOR_INJURY_CLASS: u32 = 1;

/// Ranked class-to-severity table. Classes not listed carry no severity.
const SEVERITY_TABLE: &[(u32, Verdict)] = &[
    (MAJOR_INJURY_CLASS, Verdict::MajorInjury),
    (MINOR_INJURY_CLASS, Verdict::MinorInjury),
];

/// Severity verdict for one image.
///
/// Variants are declared in ascending severity so the derived `Ord` is the
/// dominance order `NoInjury < MinorInjury < MajorInjury`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Verdict {
    #[default]
    #[serde(rename = "no injury detected")]
    NoInjury,
    #[serde(rename = "minor injury")]
    MinorInjury,
    #[serde(rename = "major injury")]
    MajorInjury,
}

impl Verdict {
    pub fn all() -> [Verdict; 3] {
        [Verdict::NoInjury, Verdict::MinorInjury, Verdict::MajorInjury]
    }

    /// Fixed label used on the interop channel
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::NoInjury => "no injury detected",
            Verdict::MinorInjury => "minor injury",
            Verdict::MajorInjury => "major injury",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Verdict::NoInjury => "✓",
            Verdict::MinorInjury => "⚠",
            Verdict::MajorInjury => "✗",
        }
    }

    /// Join two verdicts; the more severe one wins
    pub fn combine(self, other: Verdict) -> Verdict {
        self.max(other)
    }

    /// Reduce a detection sequence to a verdict. Confidence is ignored.
    pub fn from_detections<'a, I>(detections: I) -> Verdict
    where
        I: IntoIterator<Item = &'a Detection>,
    {
        let mut verdict = Verdict::NoInjury;
        for severity in detections
            .into_iter()
            .filter_map(|d| severity_of(d.class_id))
        {
            verdict = verdict.combine(severity);
            if verdict == Verdict::MajorInjury {
                break;
            }
        }
        verdict
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity carried by a model class, if any
pub fn severity_of(class_id: u32) -> Option<Verdict> {
    SEVERITY_TABLE
        .iter()
        .find(|(id, _)| *id == class_id)
        .map(|(_, verdict)| *verdict)
}

/// Reduce the detections of one image to its verdict
pub fn reduce(detections: &[Detection]) -> Verdict {
    Verdict::from_detections(detections)
}
