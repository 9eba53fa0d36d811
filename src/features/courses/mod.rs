//! Courses - Catalog Cards and the Intro-Video Dialog

pub mod controller;
pub mod intro_dialog;
pub mod page;
