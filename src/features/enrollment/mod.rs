//! Enrollment - Dialog and Submission

pub mod controller;
pub mod dialog;
