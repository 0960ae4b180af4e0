//! Roster module - Course records and the roster that owns them

mod course;
mod store;

pub use course::{Course, CourseEdit, CourseId, Grade};
pub use store::CourseRoster;
