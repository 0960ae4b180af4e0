//! GPA Calculator Module
//! Handles the units-weighted grade-point average and roster totals.

use crate::roster::Course;

/// GPA shown when the roster carries no units.
pub const ZERO_GPA: &str = "0.00";

/// Aggregate figures for a roster, all derived on read.
///
/// Totals are kept in `i128` so any mix of `i64` unit weights sums exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpaSummary {
    pub course_count: usize,
    pub total_units: i128,
    /// Sum of grade points weighted by units
    pub quality_points: i128,
    pub gpa: String,
}

impl Default for GpaSummary {
    fn default() -> Self {
        Self {
            course_count: 0,
            total_units: 0,
            quality_points: 0,
            gpa: ZERO_GPA.to_string(),
        }
    }
}

/// Handles GPA computations over a slice of courses.
pub struct GpaCalculator;

impl GpaCalculator {
    /// Accumulate (quality points, total units) across all courses.
    ///
    /// Grade points are whole numbers and units fit in `i64`, so both sums
    /// are exact in `i128` for any realistic number of courses.
    pub fn totals(courses: &[Course]) -> (i128, i128) {
        courses.iter().fold((0i128, 0i128), |(points, units), course| {
            let weight = course.units as i128;
            (
                points + course.grade.points() as i128 * weight,
                units + weight,
            )
        })
    }

    /// Units-weighted GPA rendered with exactly two decimals.
    ///
    /// Returns `"0.00"` when the units sum to zero (empty roster, or every
    /// course weighted zero). Negative weights are included as given.
    pub fn calculate_gpa(courses: &[Course]) -> String {
        let (points, units) = Self::totals(courses);
        Self::format_gpa(points, units)
    }

    /// Compute course count, totals and GPA in one pass.
    pub fn summarize(courses: &[Course]) -> GpaSummary {
        let (quality_points, total_units) = Self::totals(courses);
        GpaSummary {
            course_count: courses.len(),
            total_units,
            quality_points,
            gpa: Self::format_gpa(quality_points, total_units),
        }
    }

    /// Render `points / units` to two decimal places, rounding half away from zero.
    ///
    /// The quotient is rounded exactly in integer hundredths, never through a
    /// binary float.
    pub fn format_gpa(points: i128, units: i128) -> String {
        if units == 0 {
            return ZERO_GPA.to_string();
        }

        let hundredths = Self::div_round_half_away(points * 100, units);

        let sign = if hundredths < 0 { "-" } else { "" };
        let magnitude = hundredths.unsigned_abs();
        format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }

    fn div_round_half_away(numerator: i128, denominator: i128) -> i128 {
        let quotient = numerator / denominator;
        let remainder = numerator % denominator;
        if 2 * remainder.unsigned_abs() >= denominator.unsigned_abs() {
            if (numerator < 0) == (denominator < 0) {
                quotient + 1
            } else {
                quotient - 1
            }
        } else {
            quotient
        }
    }
}
