//! GUI module - User interface components

mod app;
mod course_list;
pub mod input;
mod summary_panel;

pub use app::GpaApp;
pub use course_list::{CourseList, CourseListAction};
pub use summary_panel::{SummaryAction, SummaryPanel};
