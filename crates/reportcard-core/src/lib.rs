//! Grade rules, subject registry, and report computation.
//!
//! This crate defines the report card data model and the pure logic that
//! turns raw per-subject marks into percentages, letter grades, and a
//! printable report. It performs no I/O.

pub mod calc;
pub mod error;
pub mod grade;
pub mod marks;
pub mod record;
pub mod render;
pub mod subject;

