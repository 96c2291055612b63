//! Report computation error types.
//!
//! These represent broken preconditions between the subject registry and
//! the marks maps. They are internal-consistency failures, not bad user
//! input: the interactive layer validates every mark before it reaches the
//! calculator.

use thiserror::Error;

/// Which marks map an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarksKind {
    Total,
    Obtained,
}

impl std::fmt::Display for MarksKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarksKind::Total => write!(f, "total"),
            MarksKind::Obtained => write!(f, "obtained"),
        }
    }
}

/// Errors that can occur while computing a report.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    /// The registry has no subjects, so there is nothing to average.
    #[error("cannot compute a report without subjects")]
    NoSubjects,

    /// A registry subject has no entry in one of the marks maps.
    #[error("subject '{subject}' has no {map} marks")]
    MissingMarks { subject: String, map: MarksKind },

    /// A marks map holds an entry for a subject that is not in the registry.
    #[error("{map} marks recorded for unknown subject '{subject}'")]
    UnknownSubject { subject: String, map: MarksKind },

    /// A subject's total is zero, so its percentage is undefined.
    #[error("total marks for '{subject}' is zero")]
    ZeroTotal { subject: String },
}
