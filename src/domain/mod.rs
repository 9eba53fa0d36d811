//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and describe the catalog, schedule,
//! reviews and persisted settings.

pub mod catalog;
pub mod config;
pub mod course;
pub mod review;
pub mod schedule;

pub use catalog::*;
pub use course::{Course, CourseLevel};
pub use review::Review;
pub use schedule::{ScheduleEntry, Weekday};
