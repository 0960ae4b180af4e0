//! Course Roster Module
//! Owns the ordered course list and routes every mutation through one place.

use crate::roster::course::{Course, CourseEdit, CourseId};
use crate::stats::{GpaCalculator, GpaSummary};
use tracing::debug;

/// Ordered collection of courses for one session.
///
/// Insertion order is display order. Ids come from a monotonically
/// increasing counter, so an id is never handed out twice even after the
/// course holding it has been removed.
#[derive(Debug, Default)]
pub struct CourseRoster {
    courses: Vec<Course>,
    next_id: u64,
}

impl CourseRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a course with default fields and return its id.
    pub fn add_course(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        self.courses.push(Course::new(id));
        debug!(%id, count = self.len(), "course added");
        id
    }

    /// Remove the course with `id`. Unknown ids leave the roster unchanged.
    pub fn remove_course(&mut self, id: CourseId) -> Option<Course> {
        let Some(pos) = self.position(id) else {
            debug!(%id, "remove ignored: no such course");
            return None;
        };

        let removed = self.courses.remove(pos);
        debug!(%id, count = self.len(), "course removed");
        Some(removed)
    }

    /// Apply `edit` to the course with `id`.
    ///
    /// Returns `false` when no course matched. Values are stored as given.
    pub fn update_course(&mut self, id: CourseId, edit: CourseEdit) -> bool {
        let Some(course) = self.courses.iter_mut().find(|c| c.id() == id) else {
            debug!(%id, field = edit.field(), "update ignored: no such course");
            return false;
        };

        debug!(%id, field = edit.field(), "course edited");
        course.apply(edit);
        true
    }

    /// Current GPA, recomputed from the roster on every call.
    pub fn calculate_gpa(&self) -> String {
        GpaCalculator::calculate_gpa(&self.courses)
    }

    pub fn summary(&self) -> GpaSummary {
        GpaCalculator::summarize(&self.courses)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn position(&self, id: CourseId) -> Option<usize> {
        self.courses.iter().position(|c| c.id() == id)
    }
}
