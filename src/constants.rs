//! Application Constants
//!
//! Centralized constants for storage, networking and layout.

/// Application name used for directories and log files
pub const APP_NAME: &str = "online-learning";

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Key under which the selected language is persisted
pub const LANGUAGE_KEY: &str = "language";

/// Enrollment endpoint used when no override is configured
pub const DEFAULT_ENROLL_URL: &str =
    "https://functions.poehali.dev/ce49687f-e7fa-4d8f-a0db-c48ae8886108";

/// Enrollment request timeout
pub const ENROLL_TIMEOUT_SECS: u64 = 30;

/// Maximum number of notifications kept on screen
pub const TOAST_CAPACITY: usize = 5;

/// How long a notification stays visible
pub const TOAST_DISMISS_MS: u64 = 5000;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Header bar height in pixels
pub const HEADER_HEIGHT: f32 = 64.0;
