//! Layout Components
//!
//! Header and footer of the single-page shell.

pub mod footer;
pub mod header;
