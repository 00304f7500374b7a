//! Domain models that mirror the flat marks file and get passed throughout
//! the TUI. These types stay light-weight data holders so the store and
//! presentation layers can focus on persistence and rendering. Everything
//! derived from a record (totals, percentage, grade) is computed on demand
//! rather than stored, keeping the file the single source of truth.

use std::fmt;

use thiserror::Error;

/// Denominator of the percentage calculation. The grading scheme scales the
/// overall total against 160 marks, not the theoretical maximum of 400.
const OVERALL_SCALE: f64 = 160.0;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One student's academic record, corresponding to exactly one line of the
/// marks file.
pub struct StudentRecord {
    /// Student number as entered. Kept as a string because identifiers can
    /// carry leading zeros that numeric storage would destroy; sorting
    /// interprets it numerically where that matters.
    pub number: String,
    /// Student's full name.
    pub name: String,
    /// The three individual coursework marks. Stored as discrete components
    /// so no rewrite of the file ever has to reconstruct the split from a
    /// sum.
    pub coursework: [i64; 3],
    /// Exam mark.
    pub exam: i64,
}

impl StudentRecord {
    /// Parse one line of the marks file. A line holds exactly six
    /// comma-separated fields; the four mark fields must be whole numbers.
    /// No range checking happens here: legacy lines with marks outside
    /// 0-100 still load, and only add/update enforce the range.
    pub fn parse_line(line: &str) -> Result<Self, ParseError> {
        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 6 {
            return Err(ParseError::FieldCount(fields.len()));
        }
        let mark = |field: &str| -> Result<i64, ParseError> {
            field
                .trim()
                .parse()
                .map_err(|_| ParseError::Mark(field.to_string()))
        };
        Ok(StudentRecord {
            number: fields[0].to_string(),
            name: fields[1].to_string(),
            coursework: [mark(fields[2])?, mark(fields[3])?, mark(fields[4])?],
            exam: mark(fields[5])?,
        })
    }

    /// Serialize back to the file format. The three coursework components
    /// are written individually, so `parse_line` applied to the result
    /// reproduces the record exactly.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{},{}",
            self.number,
            self.name,
            self.coursework[0],
            self.coursework[1],
            self.coursework[2],
            self.exam
        )
    }

    /// Sum of the three coursework marks.
    pub fn coursework_total(&self) -> i64 {
        self.coursework.iter().sum()
    }

    /// Coursework total plus the exam mark.
    pub fn overall_total(&self) -> i64 {
        self.coursework_total() + self.exam
    }

    /// Overall total scaled against the fixed 160-mark denominator. Values
    /// above 100 are possible because the theoretical maximum exceeds the
    /// scale.
    pub fn percentage(&self) -> f64 {
        self.overall_total() as f64 / OVERALL_SCALE * 100.0
    }

    /// Letter grade for this record's percentage.
    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Letter grade derived from a percentage. Variants are declared best-first
/// so the derived ordering agrees with "a higher percentage never earns a
/// worse letter".
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a percentage onto the letter bands. Lower boundaries are
    /// inclusive, so exactly 70.0 is an A and exactly 40.0 a D.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else if percentage >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    /// Write the bare letter so the type drops straight into table cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Why a line of the marks file could not be read as a record. The loader
/// treats any variant as "skip this line".
pub enum ParseError {
    #[error("expected 6 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("mark is not a whole number: {0:?}")]
    Mark(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> StudentRecord {
        StudentRecord::parse_line("1,Alice,10,20,15,50").unwrap()
    }

    #[test]
    fn parse_line_splits_into_fields() {
        let record = alice();
        assert_eq!(record.number, "1");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.coursework, [10, 20, 15]);
        assert_eq!(record.exam, 50);
    }

    #[test]
    fn derived_fields_follow_the_grading_scheme() {
        let record = alice();
        assert_eq!(record.coursework_total(), 45);
        assert_eq!(record.overall_total(), 95);
        assert_eq!(record.percentage(), 59.375);
        assert_eq!(record.grade(), Grade::C);

        let bob = StudentRecord::parse_line("2,Bob,30,30,30,80").unwrap();
        assert_eq!(bob.coursework_total(), 90);
        assert_eq!(bob.overall_total(), 170);
        assert_eq!(bob.percentage(), 106.25);
        assert_eq!(bob.grade(), Grade::A);
    }

    #[test]
    fn parse_line_rejects_wrong_field_count() {
        assert_eq!(
            StudentRecord::parse_line("1,Alice,10,20,15"),
            Err(ParseError::FieldCount(5))
        );
        assert_eq!(
            StudentRecord::parse_line("1,Alice,10,20,15,50,extra"),
            Err(ParseError::FieldCount(7))
        );
        assert_eq!(StudentRecord::parse_line(""), Err(ParseError::FieldCount(1)));
    }

    #[test]
    fn parse_line_rejects_non_integer_marks() {
        assert_eq!(
            StudentRecord::parse_line("1,Alice,ten,20,15,50"),
            Err(ParseError::Mark("ten".to_string()))
        );
        assert_eq!(
            StudentRecord::parse_line("1,Alice,10,20,15,49.5"),
            Err(ParseError::Mark("49.5".to_string()))
        );
    }

    #[test]
    fn parse_line_accepts_out_of_range_marks() {
        // Range enforcement belongs to add/update, not the loader.
        let record = StudentRecord::parse_line("3,Carol,-5,200,0,101").unwrap();
        assert_eq!(record.coursework, [-5, 200, 0]);
        assert_eq!(record.exam, 101);
    }

    #[test]
    fn parse_line_tolerates_padded_marks() {
        let record = StudentRecord::parse_line("1,Alice,10, 20,15, 50").unwrap();
        assert_eq!(record.coursework, [10, 20, 15]);
        assert_eq!(record.exam, 50);
    }

    #[test]
    fn to_line_round_trips() {
        let record = alice();
        assert_eq!(record.to_line(), "1,Alice,10,20,15,50");
        assert_eq!(StudentRecord::parse_line(&record.to_line()), Ok(record));
    }

    #[test]
    fn grade_bands_are_inclusive_at_the_bottom() {
        assert_eq!(Grade::from_percentage(70.0), Grade::A);
        assert_eq!(Grade::from_percentage(69.999), Grade::B);
        assert_eq!(Grade::from_percentage(60.0), Grade::B);
        assert_eq!(Grade::from_percentage(50.0), Grade::C);
        assert_eq!(Grade::from_percentage(40.0), Grade::D);
        assert_eq!(Grade::from_percentage(39.999), Grade::F);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
        assert_eq!(Grade::from_percentage(250.0), Grade::A);
    }

    #[test]
    fn higher_percentage_never_earns_a_worse_letter() {
        let mut previous = Grade::F;
        for tenths in 0..=1100 {
            let grade = Grade::from_percentage(tenths as f64 / 10.0);
            assert!(grade <= previous, "grade regressed at {}", tenths);
            previous = grade;
        }
    }
}
