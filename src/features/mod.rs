//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local widgets.

pub mod courses;
pub mod enrollment;
pub mod home;
pub mod reviews;
pub mod schedule;
