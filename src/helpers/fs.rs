//! File System Utilities
//!
//! Configuration/data directory management and settings persistence.

use crate::constants::{APP_NAME, SETTINGS_FILE};
use crate::domain::config::AppSettings;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "online-learning", APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/online-learning/` or `$XDG_CONFIG_HOME/online-learning/`
/// - **macOS**: `~/Library/Application Support/dev.online-learning.online-learning/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\online-learning\online-learning\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get the data directory (log files)
///
/// - **Linux**: `~/.local/share/online-learning/`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Default location of `settings.toml`
pub fn default_settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Load settings; a missing or blank file yields defaults
pub fn load_settings(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }

    info!(path = ?path, "Loading settings file");
    let value = fs::read_to_string(path)?;
    if value.trim().is_empty() {
        return Ok(AppSettings::default());
    }

    let settings: AppSettings = toml::from_str(&value).map_err(|e| {
        error!(error = %e, path = ?path, "Failed to parse settings file");
        e
    })?;
    Ok(settings)
}

/// Load settings, falling back to defaults when the file is unreadable or
/// malformed. Startup never fails on a bad settings file.
pub fn load_settings_or_default(path: &Path) -> AppSettings {
    load_settings(path).unwrap_or_else(|e| {
        warn!(error = %e, path = ?path, "Using default settings");
        AppSettings::default()
    })
}

/// Save settings, creating the parent directory if needed
pub fn save_settings(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let value = toml::to_string(settings)?;
    fs::write(path, value)?;
    Ok(())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load_settings(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let mut settings = AppSettings::default();
        settings.language = Some("ru".to_string());
        settings.enrollment.timeout_secs = 5;

        save_settings(&path, &settings).expect("save");
        assert_eq!(load_settings(&path).expect("load"), settings);
    }

    #[test]
    fn test_garbage_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "language = [").expect("write");
        assert!(matches!(load_settings(&path), Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_wrong_typed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "language = 5\n").expect("write");

        assert!(load_settings(&path).is_err());
        assert_eq!(load_settings_or_default(&path), AppSettings::default());
    }
}
