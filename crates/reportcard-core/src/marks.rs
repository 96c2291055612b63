//! Per-subject marks.
//!
//! A report carries two maps over the same subjects: the total each subject
//! is marked out of, and the marks the student obtained. Both are keyed by
//! subject name, so renumbering the registry never invalidates an entry.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::subject::{Subject, SubjectRegistry};

/// Total marks a subject starts with.
pub const DEFAULT_TOTAL: u32 = 100;

/// Accepted range for a subject's total marks.
pub const TOTAL_RANGE: RangeInclusive<u32> = 5..=100;

/// Accepted range for obtained marks out of `total`.
pub fn obtained_range(total: u32) -> RangeInclusive<u32> {
    0..=total
}

/// Mapping from subject name to an integer mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarksMap {
    marks: HashMap<String, u32>,
}

impl MarksMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per registry subject, all set to `value`.
    pub fn uniform(registry: &SubjectRegistry, value: u32) -> Self {
        Self {
            marks: registry.names().map(|n| (n.to_string(), value)).collect(),
        }
    }

    /// Set the mark for a subject, returning the previous value.
    pub fn set(&mut self, subject: &Subject, value: u32) -> Option<u32> {
        self.marks.insert(subject.name.clone(), value)
    }

    pub fn get(&self, subject: &Subject) -> Option<u32> {
        self.marks.get(&subject.name).copied()
    }

    /// Subject names that have an entry.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.marks.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_covers_registry() {
        let registry = SubjectRegistry::initial();
        let totals = MarksMap::uniform(&registry, DEFAULT_TOTAL);
        assert_eq!(totals.len(), 8);
        for subject in &registry {
            assert_eq!(totals.get(subject), Some(100));
        }
    }

    #[test]
    fn entries_survive_renumbering() {
        let mut registry = SubjectRegistry::initial();
        let mut totals = MarksMap::uniform(&registry, DEFAULT_TOTAL);
        let physics = registry.get(5).unwrap().clone();
        totals.set(&physics, 75);

        registry.remove(["1"]);
        let physics = registry.get(4).unwrap();
        assert_eq!(physics.name, "Physics");
        assert_eq!(totals.get(physics), Some(75));
    }

    #[test]
    fn ranges() {
        assert!(TOTAL_RANGE.contains(&5));
        assert!(!TOTAL_RANGE.contains(&4));
        assert!(!TOTAL_RANGE.contains(&101));
        assert!(obtained_range(40).contains(&40));
        assert!(!obtained_range(40).contains(&41));
    }
}
