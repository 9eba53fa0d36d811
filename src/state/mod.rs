//! State - Application State Modules
//!
//! Each module holds one distinct piece of state, split by update frequency
//! so the GPUI shell can observe them independently.

pub mod enrollment_form;
pub mod i18n_state;
pub mod toast_state;
pub mod view_state;

pub use enrollment_form::EnrollmentForm;
pub use i18n_state::{load_persisted_language, persist_language, I18nState};
pub use toast_state::{Toast, ToastEntry, ToastKind, ToastState};
pub use view_state::{ContentTab, ViewState};
