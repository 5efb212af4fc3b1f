// src/config/classes.rs
//
// Human-readable names for model class ids

use serde::{Deserialize, Serialize};

/// Class-name table for the injury model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMap {
    names: Vec<String>,
}

impl Default for ClassMap {
    fn default() -> Self {
        Self::new(["major_injury", "minor_injury"])
    }
}

impl ClassMap {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .map(|n: String| n.trim().to_string())
                .collect(),
        }
    }

    /// Name for a class id; unknown ids render as `class_<id>`
    pub fn name(&self, class_id: u32) -> String {
        self.names
            .get(class_id as usize)
            .filter(|n| !n.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("class_{}", class_id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
