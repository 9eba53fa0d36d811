//! Online Learning Client Library
//!
//! Course catalog, weekly schedule and reviews for the Online Learning
//! brand, a bilingual (English/Russian) text layer, and the course
//! enrollment workflow that posts to the remote enrollment endpoint.
//!
//! The desktop shell (GPUI) lives behind the `gui` feature; everything else
//! builds and tests without it.

pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod logging;
pub mod services;
pub mod state;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod components;
#[cfg(feature = "gui")]
pub mod features;
#[cfg(feature = "gui")]
pub mod theme;
