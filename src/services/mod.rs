//! Service Layer
//!
//! Capabilities the view depends on, injected rather than reached ambiently:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  EnrollmentApi      PreferenceStore     VisibilityObserver│
//! │  (HTTP endpoint)    (settings.toml)     (reveal effects)  │
//! └──────────────────────────────────────────────────────────┘
//!          │
//!          ▼ workflow: begin → send → finish
//! ┌──────────────────────────────────────────────────────────┐
//! │             State Layer (ViewState, ToastState)           │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod enrollment;
mod preferences;
mod runtime;
mod visibility;
mod workflow;

pub use enrollment::*;
pub use preferences::*;
pub use runtime::*;
pub use visibility::*;
pub use workflow::*;
