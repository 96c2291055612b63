//! The persisted report card record.
//!
//! Field names match the store's JSON layout:
//!
//! ```json
//! {
//!   "class": "9",
//!   "subjects": { "English": {"obtained": 90, "total": 100, "percentage": 90.0, "grade": "A+"} },
//!   "overall": {"obtained": 90, "total": 100, "percentage": 90.0, "grade": "A+", "average_marks": 90.0}
//! }
//! ```

use std::ops::RangeInclusive;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::calc::ReportSummary;
use crate::grade::Grade;

/// Classes a report card can be issued for.
pub const CLASS_RANGE: RangeInclusive<u32> = 1..=12;

/// Marks and grade for one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    pub obtained: u32,
    pub total: u32,
    pub percentage: f64,
    pub grade: Grade,
}

/// Aggregate across all subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Sum of obtained marks.
    pub obtained: u64,
    /// Sum of total marks.
    pub total: u64,
    pub percentage: f64,
    pub grade: Grade,
    /// Mean of the obtained marks (not of the percentages).
    #[serde(rename = "average_marks")]
    pub average_obtained: f64,
}

/// One student's saved report card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Class label, "1" to "12".
    pub class: String,
    /// Per-subject results in display order.
    pub subjects: IndexMap<String, SubjectResult>,
    pub overall: OverallResult,
}

impl ReportRecord {
    /// Package a computed summary for storage.
    pub fn from_summary(class: impl Into<String>, summary: &ReportSummary) -> Self {
        let subjects = summary
            .per_subject
            .iter()
            .map(|(subject, result)| (subject.name.clone(), result.clone()))
            .collect();

        Self {
            class: class.into(),
            subjects,
            overall: summary.overall.clone(),
        }
    }

    /// Render with this record's own class label.
    pub fn render(&self, student_name: &str) -> String {
        crate::render::render(self, student_name, &self.class)
    }
}
