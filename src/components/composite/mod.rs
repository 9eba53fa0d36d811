//! Composite Components
//!
//! Components built from primitives: modal dialog and toast stack.

pub mod modal;
pub mod toast_stack;
