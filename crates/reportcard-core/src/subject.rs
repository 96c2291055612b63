//! Subject registry with contiguous numbering.
//!
//! Subjects are displayed and addressed by number. Numbers always equal the
//! subject's 1-based position, so every removal is followed by a renumbering
//! pass and a number only identifies a subject until the next mutation.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Subjects every new report starts with, in display order.
pub const DEFAULT_SUBJECTS: [&str; 8] = [
    "English",
    "Urdu",
    "Pakistan Studies",
    "Maths",
    "Physics",
    "Chemistry",
    "Islamiat",
    "Computer Studies",
];

/// A gradable subject with its current display number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub number: u32,
    pub name: String,
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{}", self.number, self.name))
    }
}

/// Result of adding one name to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Subject),
    AlreadyPresent(String),
    Blank,
}

/// Result of removing one number from the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The subject as it was numbered before renumbering.
    Removed(Subject),
    /// The number as typed.
    NotFound(String),
}

/// Ordered subjects for one report session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectRegistry {
    subjects: Vec<Subject>,
}

impl SubjectRegistry {
    /// The default eight subjects, numbered 1..=8.
    pub fn initial() -> Self {
        Self::from_names(DEFAULT_SUBJECTS)
    }

    /// Build a registry from names, skipping blanks and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::default();
        registry.add(names);
        registry
    }

    /// Append each name that is not already present.
    ///
    /// Names are trimmed and title-cased first. A new subject gets the
    /// current highest number plus one, so several names in one call are
    /// numbered in order. Existing numbering is left alone.
    pub fn add<I, S>(&mut self, names: I) -> Vec<AddOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcomes = Vec::new();
        for raw in names {
            let name = title_case(raw.as_ref().trim());
            if name.is_empty() {
                outcomes.push(AddOutcome::Blank);
                continue;
            }
            if self.contains_name(&name) {
                tracing::debug!("subject '{name}' already present, skipping");
                outcomes.push(AddOutcome::AlreadyPresent(name));
                continue;
            }
            let number = self.max_number() + 1;
            let subject = Subject { number, name };
            tracing::debug!("added subject {subject}");
            self.subjects.push(subject.clone());
            outcomes.push(AddOutcome::Added(subject));
        }
        outcomes
    }

    /// Drop every subject named by number in `numbers`, then renumber.
    ///
    /// Numbers are taken as typed and refer to the numbering before this
    /// call. Each distinct number gets one outcome, in input order, and a
    /// number that matches no subject is reported as typed.
    pub fn remove<I, S>(&mut self, numbers: I) -> Vec<RemoveOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcomes = Vec::new();
        let mut doomed = BTreeSet::new();
        let mut unknown: Vec<String> = Vec::new();
        for raw in numbers {
            let token = raw.as_ref().trim();
            match token.parse::<u32>().ok().and_then(|n| self.get(n)) {
                Some(subject) => {
                    if doomed.insert(subject.number) {
                        outcomes.push(RemoveOutcome::Removed(subject.clone()));
                    }
                }
                None => {
                    if !unknown.iter().any(|t| t == token) {
                        unknown.push(token.to_string());
                        outcomes.push(RemoveOutcome::NotFound(token.to_string()));
                    }
                }
            }
        }

        self.subjects.retain(|s| !doomed.contains(&s.number));
        self.renumber();
        tracing::debug!("registry now has {} subjects", self.subjects.len());

        outcomes
    }

    fn renumber(&mut self) {
        for (i, subject) in self.subjects.iter_mut().enumerate() {
            subject.number = i as u32 + 1;
        }
    }

    fn max_number(&self) -> u32 {
        self.subjects.iter().map(|s| s.number).max().unwrap_or(0)
    }

    /// Case-insensitive name lookup.
    pub fn contains_name(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.subjects.iter().any(|s| s.name.to_lowercase() == wanted)
    }

    /// Look up a subject by its current number.
    pub fn get(&self, number: u32) -> Option<&Subject> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.subjects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subject> {
        self.subjects.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubjectRegistry {
    type Item = &'a Subject;
    type IntoIter = std::slice::Iter<'a, Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}

/// Uppercase the first letter of every alphabetic run and lowercase the rest.
///
/// `"pakistan studies"` becomes `"Pakistan Studies"`, `"o'neil"` becomes
/// `"O'Neil"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Split a comma-separated list of subject names.
pub fn parse_name_list(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Split a comma-separated list of subject numbers.
///
/// Tokens that are not plain digits are ignored. Order and duplicates are
/// kept, and digit runs too long for a subject number still come through so
/// they can be reported.
pub fn parse_number_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
        .map(str::to_string)
        .collect()
}
