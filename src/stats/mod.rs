//! Stats module - GPA computation

mod calculator;

pub use calculator::{GpaCalculator, GpaSummary};
