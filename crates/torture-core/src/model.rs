//! Transcript record sent to the webhook.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// One transcript row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseRow {
    pub course: String,
    pub grade: String,
}

impl CourseRow {
    pub fn new(course: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            course: course.into(),
            grade: grade.into(),
        }
    }
}

/// Extraction result for one transcript (the request body).
///
/// `extracted_gpa` stays a string so formatting and typos reach the webhook
/// exactly as written. Course order is transcript row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriptRecord {
    pub filename: String,
    pub extracted_gpa: String,
    pub courses: Vec<CourseRow>,
}

impl TranscriptRecord {
    /// The ground-truth record every scenario is derived from.
    pub fn baseline() -> Self {
        Self {
            filename: "okoye_arnold.pdf".to_string(),
            extracted_gpa: "89.17".to_string(),
            courses: vec![
                CourseRow::new("History of Salvation I", "91"),
                CourseRow::new("Honors Biology", "92"),
                CourseRow::new("AP Biology", "92"),
                CourseRow::new("AP Language and Composition", "92"),
            ],
        }
    }

    /// Load a baseline from a JSON file.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        let baseline_err = |message: String| ConfigError::Baseline {
            path: path.display().to_string(),
            message,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| baseline_err(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| baseline_err(e.to_string()))
    }

    /// Names of the top-level fields whose values differ from `other`.
    pub fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.filename != other.filename {
            changed.push("filename");
        }
        if self.extracted_gpa != other.extracted_gpa {
            changed.push("extracted_gpa");
        }
        if self.courses != other.courses {
            changed.push("courses");
        }
        changed
    }
}
