//! Config - Persisted Application Settings

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ENROLL_URL, ENROLL_TIMEOUT_SECS};

/// Settings stored in `settings.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Selected language code ("en" / "ru"), stored verbatim
    pub language: Option<String>,
    /// Enrollment endpoint configuration
    pub enrollment: EnrollmentConfig,
}

/// Enrollment endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Endpoint URL receiving the JSON POST
    pub endpoint: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENROLL_URL.to_string(),
            timeout_secs: ENROLL_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings: AppSettings = toml::from_str("").expect("parse");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.enrollment.endpoint, DEFAULT_ENROLL_URL);
    }

    #[test]
    fn test_partial_enrollment_section() {
        let settings: AppSettings = toml::from_str(
            r#"
            language = "ru"

            [enrollment]
            endpoint = "http://localhost:8080/enroll"
            "#,
        )
        .expect("parse");
        assert_eq!(settings.language.as_deref(), Some("ru"));
        assert_eq!(settings.enrollment.endpoint, "http://localhost:8080/enroll");
        assert_eq!(settings.enrollment.timeout_secs, ENROLL_TIMEOUT_SECS);
    }
}
