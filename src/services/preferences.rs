//! Preference Store
//!
//! Client-local persistence of the selected language. Injected into
//! `I18nState` so tests never touch the real config directory.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::Result;
use crate::helpers::{load_settings, load_settings_or_default, save_settings};

/// Get/set capability for the persisted language code
pub trait PreferenceStore {
    /// Raw stored value, if any. Validation is the caller's job.
    fn language(&self) -> Option<String>;

    /// Store the language code for future sessions
    fn set_language(&mut self, code: &str) -> Result<()>;
}

/// Preference store backed by `settings.toml`
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn language(&self) -> Option<String> {
        match load_settings(&self.path) {
            Ok(settings) => settings.language,
            Err(e) => {
                debug!(error = %e, "Unreadable settings, ignoring stored language");
                None
            }
        }
    }

    fn set_language(&mut self, code: &str) -> Result<()> {
        // Keep the rest of the file; start over only if it is unreadable.
        let mut settings = load_settings_or_default(&self.path);
        settings.language = Some(code.to_string());
        save_settings(&self.path, &settings)?;
        info!(language = code, "Language preference saved");
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded with a raw stored value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn language(&self) -> Option<String> {
        self.value.clone()
    }

    fn set_language(&mut self, code: &str) -> Result<()> {
        self.value = Some(code.to_string());
        Ok(())
    }
}
