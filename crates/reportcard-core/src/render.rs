//! Fixed-width text rendering of a report card.
//!
//! Column widths are part of the output format: subject 22 (left),
//! obtained 12, total 9, grade 9, percentage 14, average 7 (right).

use std::fmt::Write;

use crate::record::ReportRecord;

/// Width of the separator line and the centered title.
pub const REPORT_WIDTH: usize = 73;

const TITLE: &str = "REPORT CARD";

/// Render a record as the printable report card.
///
/// Subject numbers come from the record's subject order. Identical input
/// always yields identical output.
pub fn render(record: &ReportRecord, student_name: &str, class_label: &str) -> String {
    let dash = "-".repeat(REPORT_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{dash}");
    let _ = writeln!(out, "{:^width$}", TITLE, width = REPORT_WIDTH);
    let _ = writeln!(out, "{dash}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Name   : {}", student_name.trim().to_uppercase());
    let _ = writeln!(out, "Class  : {}", class_label.trim());
    let _ = writeln!(out);
    let _ = writeln!(out, "{dash}");
    let _ = writeln!(
        out,
        "{:<22}{:>12}{:>9}{:>9}{:>14}{:>7}",
        "SUBJECT", "OBTAINED", "TOTAL", "GRADE", "PERCENTAGE", "AVG"
    );
    let _ = writeln!(out, "{dash}");

    for (i, (name, result)) in record.subjects.iter().enumerate() {
        let label = format!("{}.{}", i + 1, name);
        let _ = writeln!(
            out,
            "{:<22}{:>12}{:>9}{:>9}{:>14.2}{:>7}",
            label, result.obtained, result.total, result.grade, result.percentage, "N/A"
        );
    }

    let overall = &record.overall;
    let _ = writeln!(out, "{dash}");
    let _ = writeln!(
        out,
        "{:<22}{:>12}{:>9}{:>9}{:>14.2}{:>7.2}",
        "OVERALL",
        overall.obtained,
        overall.total,
        overall.grade,
        overall.percentage,
        overall.average_obtained
    );
    let _ = writeln!(out, "{dash}");

    out
}
