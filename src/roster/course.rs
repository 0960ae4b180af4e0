//! Course Record Module
//! Data types for a single course entry and the edits that can be applied to it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Units assigned to a freshly added course.
pub const DEFAULT_UNITS: i64 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown grade letter: {0:?}")]
pub struct GradeParseError(pub String);

/// Letter grade on the fixed six-step scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Grade {
    #[default]
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// All grades in display order (best first).
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    /// Grade-point value of this letter.
    pub fn points(self) -> f64 {
        match self {
            Grade::A => 5.0,
            Grade::B => 4.0,
            Grade::C => 3.0,
            Grade::D => 2.0,
            Grade::E => 1.0,
            Grade::F => 0.0,
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }

    /// Label shown in the grade picker, e.g. `A (5.0)`.
    pub fn label(self) -> String {
        format!("{} ({:.1})", self.letter(), self.points())
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Grade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Grade::A),
            "B" | "b" => Ok(Grade::B),
            "C" | "c" => Ok(Grade::C),
            "D" | "d" => Ok(Grade::D),
            "E" | "e" => Ok(Grade::E),
            "F" | "f" => Ok(Grade::F),
            other => Err(GradeParseError(other.to_string())),
        }
    }
}

/// Opaque course identifier. Never reused within a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub(crate) u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course#{}", self.0)
    }
}

/// A single course entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    pub name: String,
    pub grade: Grade,
    pub units: i64,
}

impl Course {
    /// New course with default fields: empty name, grade A, 3 units.
    pub(crate) fn new(id: CourseId) -> Self {
        Self {
            id,
            name: String::new(),
            grade: Grade::default(),
            units: DEFAULT_UNITS,
        }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    /// Apply a single-field edit. The id is never touched.
    pub fn apply(&mut self, edit: CourseEdit) {
        match edit {
            CourseEdit::Rename(name) => self.name = name,
            CourseEdit::Regrade(grade) => self.grade = grade,
            CourseEdit::Reweight(units) => self.units = units,
        }
    }
}

/// One field update targeting a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseEdit {
    /// Replace the course name
    Rename(String),
    /// Replace the letter grade
    Regrade(Grade),
    /// Replace the credit units (any integer is accepted)
    Reweight(i64),
}

impl CourseEdit {
    /// Field name, used for logging.
    pub fn field(&self) -> &'static str {
        match self {
            CourseEdit::Rename(_) => "name",
            CourseEdit::Regrade(_) => "grade",
            CourseEdit::Reweight(_) => "units",
        }
    }
}
