//! Percentage, grade, and aggregate computation.

use crate::error::{CalcError, MarksKind};
use crate::grade::Grade;
use crate::marks::MarksMap;
use crate::record::{OverallResult, SubjectResult};
use crate::subject::{Subject, SubjectRegistry};

/// Derived numbers for one report, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub per_subject: Vec<(Subject, SubjectResult)>,
    pub overall: OverallResult,
}

/// `part / whole * 100`.
pub fn percentage(part: u64, whole: u64) -> f64 {
    part as f64 / whole as f64 * 100.0
}

/// Compute per-subject and overall results.
///
/// Every registry subject must have an entry in both maps, neither map may
/// hold entries for other subjects, and no total may be zero.
pub fn compute(
    subjects: &SubjectRegistry,
    total: &MarksMap,
    obtained: &MarksMap,
) -> Result<ReportSummary, CalcError> {
    if subjects.is_empty() {
        return Err(CalcError::NoSubjects);
    }
    check_no_orphans(subjects, total, MarksKind::Total)?;
    check_no_orphans(subjects, obtained, MarksKind::Obtained)?;

    let mut per_subject = Vec::with_capacity(subjects.len());
    // u64 so that any number of u32 marks sums without overflow.
    let mut obtained_sum: u64 = 0;
    let mut total_sum: u64 = 0;

    for subject in subjects {
        let subject_total = total.get(subject).ok_or_else(|| CalcError::MissingMarks {
            subject: subject.name.clone(),
            map: MarksKind::Total,
        })?;
        let subject_obtained = obtained.get(subject).ok_or_else(|| CalcError::MissingMarks {
            subject: subject.name.clone(),
            map: MarksKind::Obtained,
        })?;
        if subject_total == 0 {
            return Err(CalcError::ZeroTotal {
                subject: subject.name.clone(),
            });
        }

        let pct = percentage(subject_obtained.into(), subject_total.into());
        per_subject.push((
            subject.clone(),
            SubjectResult {
                obtained: subject_obtained,
                total: subject_total,
                percentage: pct,
                grade: Grade::for_percentage(pct),
            },
        ));
        obtained_sum += u64::from(subject_obtained);
        total_sum += u64::from(subject_total);
    }

    let overall_pct = percentage(obtained_sum, total_sum);
    let overall = OverallResult {
        obtained: obtained_sum,
        total: total_sum,
        percentage: overall_pct,
        grade: Grade::for_percentage(overall_pct),
        average_obtained: obtained_sum as f64 / per_subject.len() as f64,
    };

    Ok(ReportSummary {
        per_subject,
        overall,
    })
}

fn check_no_orphans(
    subjects: &SubjectRegistry,
    marks: &MarksMap,
    map: MarksKind,
) -> Result<(), CalcError> {
    match marks.names().find(|name| !subjects.contains_name(name)) {
        Some(name) => Err(CalcError::UnknownSubject {
            subject: name.to_string(),
            map,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::DEFAULT_TOTAL;

    fn marks_for(registry: &SubjectRegistry, values: &[u32]) -> MarksMap {
        let mut map = MarksMap::new();
        for (subject, &value) in registry.iter().zip(values) {
            map.set(subject, value);
        }
        map
    }

    #[test]
    fn default_subjects_scenario() {
        let registry = SubjectRegistry::initial();
        let totals = MarksMap::uniform(&registry, DEFAULT_TOTAL);
        let obtained = marks_for(&registry, &[90, 80, 70, 60, 50, 40, 100, 85]);

        let summary = compute(&registry, &totals, &obtained).unwrap();
        let overall = &summary.overall;
        assert_eq!(overall.obtained, 575);
        assert_eq!(overall.total, 800);
        assert!((overall.percentage - 71.875).abs() < 1e-9);
        assert_eq!(overall.grade, Grade::B);
        assert!((overall.average_obtained - 71.875).abs() < 1e-9);

        let grades: Vec<Grade> = summary.per_subject.iter().map(|(_, r)| r.grade).collect();
        assert_eq!(
            grades,
            [
                Grade::APlus,
                Grade::A,
                Grade::B,
                Grade::C,
                Grade::D,
                Grade::F,
                Grade::APlus,
                Grade::A
            ]
        );
    }

    #[test]
    fn output_follows_registry_order() {
        let registry = SubjectRegistry::from_names(["Zoology", "Art", "Maths"]);
        let totals = MarksMap::uniform(&registry, 50);
        let obtained = marks_for(&registry, &[10, 20, 30]);

        let summary = compute(&registry, &totals, &obtained).unwrap();
        let names: Vec<&str> = summary
            .per_subject
            .iter()
            .map(|(s, _)| s.name.as_str())
            .collect();
        assert_eq!(names, ["Zoology", "Art", "Maths"]);
        assert_eq!(summary.per_subject[2].0.number, 3);
    }

    #[test]
    fn overall_weights_by_totals_and_average_uses_raw_marks() {
        let registry = SubjectRegistry::from_names(["Maths", "Art"]);
        let mut totals = MarksMap::new();
        totals.set(registry.get(1).unwrap(), 100);
        totals.set(registry.get(2).unwrap(), 20);
        let obtained = marks_for(&registry, &[50, 20]);

        let summary = compute(&registry, &totals, &obtained).unwrap();
        assert!((summary.per_subject[1].1.percentage - 100.0).abs() < 1e-9);
        assert!((summary.overall.percentage - 70.0 / 120.0 * 100.0).abs() < 1e-9);
        assert!((summary.overall.average_obtained - 35.0).abs() < 1e-9);
        assert_eq!(summary.overall.grade, Grade::D);
    }

    #[test]
    fn empty_registry_is_an_error() {
        let registry = SubjectRegistry::default();
        let err = compute(&registry, &MarksMap::new(), &MarksMap::new()).unwrap_err();
        assert_eq!(err, CalcError::NoSubjects);
    }

    #[test]
    fn missing_obtained_entry_is_an_error() {
        let registry = SubjectRegistry::from_names(["Maths", "Art"]);
        let totals = MarksMap::uniform(&registry, DEFAULT_TOTAL);
        let obtained = marks_for(&registry, &[50]);

        let err = compute(&registry, &totals, &obtained).unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingMarks {
                subject: "Art".into(),
                map: MarksKind::Obtained
            }
        );
        assert_eq!(err.to_string(), "subject 'Art' has no obtained marks");
    }

    #[test]
    fn orphan_entry_is_an_error() {
        let mut registry = SubjectRegistry::from_names(["Maths", "Art"]);
        let totals = MarksMap::uniform(&registry, DEFAULT_TOTAL);
        registry.remove(["2"]);
        let obtained = marks_for(&registry, &[50]);

        let err = compute(&registry, &totals, &obtained).unwrap_err();
        assert_eq!(
            err,
            CalcError::UnknownSubject {
                subject: "Art".into(),
                map: MarksKind::Total
            }
        );
    }

    #[test]
    fn zero_total_is_an_error_not_infinity() {
        let registry = SubjectRegistry::from_names(["Maths"]);
        let totals = MarksMap::uniform(&registry, 0);
        let obtained = marks_for(&registry, &[0]);

        let err = compute(&registry, &totals, &obtained).unwrap_err();
        assert_eq!(err, CalcError::ZeroTotal { subject: "Maths".into() });
    }

    #[test]
    fn large_marks_sum_without_overflow() {
        let registry = SubjectRegistry::from_names(["Maths", "Art", "Music"]);
        let totals = MarksMap::uniform(&registry, u32::MAX);
        let obtained = marks_for(&registry, &[u32::MAX, u32::MAX, 0]);

        let summary = compute(&registry, &totals, &obtained).unwrap();
        assert_eq!(summary.overall.total, 3 * u64::from(u32::MAX));
        assert_eq!(summary.overall.obtained, 2 * u64::from(u32::MAX));
        assert_eq!(summary.overall.grade, Grade::C);
        assert!((summary.overall.average_obtained - 2.0 * f64::from(u32::MAX) / 3.0).abs() < 1.0);
    }
}
