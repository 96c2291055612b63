//! Letter grade bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter grade derived from a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

/// Inclusive lower bound of each band, highest first.
const BANDS: [(f64, Grade); 5] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (50.0, Grade::D),
];

impl Grade {
    /// Map a percentage to its grade band.
    ///
    /// | Range  | Grade |
    /// |--------|-------|
    /// | >= 90  | A+    |
    /// | >= 80  | A     |
    /// | >= 70  | B     |
    /// | >= 60  | C     |
    /// | >= 50  | D     |
    /// | < 50   | F     |
    ///
    /// Values outside 0..=100 are not special-cased, and NaN lands in F.
    pub fn for_percentage(percentage: f64) -> Grade {
        BANDS
            .iter()
            .find(|(lower, _)| percentage >= *lower)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    /// The printed label, e.g. `"A+"`.
    pub fn label(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment flags in the report layout apply.
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Grade::for_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::for_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::for_percentage(89.99), Grade::A);
        assert_eq!(Grade::for_percentage(80.0), Grade::A);
        assert_eq!(Grade::for_percentage(79.99), Grade::B);
        assert_eq!(Grade::for_percentage(70.0), Grade::B);
        assert_eq!(Grade::for_percentage(69.99), Grade::C);
        assert_eq!(Grade::for_percentage(60.0), Grade::C);
        assert_eq!(Grade::for_percentage(59.99), Grade::D);
        assert_eq!(Grade::for_percentage(50.0), Grade::D);
        assert_eq!(Grade::for_percentage(49.99), Grade::F);
        assert_eq!(Grade::for_percentage(0.0), Grade::F);
    }

    #[test]
    fn out_of_range_inputs_fall_through() {
        assert_eq!(Grade::for_percentage(150.0), Grade::APlus);
        assert_eq!(Grade::for_percentage(-5.0), Grade::F);
        assert_eq!(Grade::for_percentage(f64::NAN), Grade::F);
    }

    #[test]
    fn bands_are_monotonic() {
        let mut previous = Grade::for_percentage(-1.0);
        for tenth in 0..=1000 {
            let grade = Grade::for_percentage(tenth as f64 / 10.0);
            assert!(grade <= previous, "grade went down at {}", tenth as f64 / 10.0);
            previous = grade;
        }
    }

    #[test]
    fn display_pads_label() {
        assert_eq!(Grade::APlus.to_string(), "A+");
        assert_eq!(format!("{:>4}", Grade::B), "   B");
        assert_eq!(format!("{:<3}|", Grade::F), "F  |");
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        let grade: Grade = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(grade, Grade::C);
    }
}
