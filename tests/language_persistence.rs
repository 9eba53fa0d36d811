//! Integration tests: language preference across sessions

use online_learning::domain::config::AppSettings;
use online_learning::constants::DEFAULT_ENROLL_URL;
use online_learning::helpers::{load_settings, load_settings_or_default, save_settings};
use online_learning::i18n::Language;
use online_learning::services::{FilePreferenceStore, HttpEnrollmentClient, PreferenceStore};
use online_learning::state::I18nState;

#[test]
fn test_toggle_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");

    let mut session = I18nState::load(Box::new(FilePreferenceStore::new(&path)));
    assert_eq!(session.language(), Language::En);
    session.toggle().expect("toggle");

    let next_session = I18nState::load(Box::new(FilePreferenceStore::new(&path)));
    assert_eq!(next_session.language(), Language::Ru);
    assert_eq!(next_session.dictionary().get("enrollment.cancel"), "Отмена");
}

#[test]
fn test_invalid_stored_code_falls_back_to_english() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let settings = AppSettings {
        language: Some("klingon".to_string()),
        ..Default::default()
    };
    save_settings(&path, &settings).expect("save");

    let state = I18nState::load(Box::new(FilePreferenceStore::new(&path)));
    assert_eq!(state.language(), Language::En);
}

#[test]
fn test_store_writes_plain_code() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    let mut store = FilePreferenceStore::new(&path);

    store.set_language("ru").expect("set");

    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains(r#"language = "ru""#));
    assert_eq!(load_settings(&path).expect("load").language.as_deref(), Some("ru"));
}

#[test]
fn test_corrupt_settings_still_start_in_english() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "language = 5\n").expect("write");

    let settings = load_settings_or_default(&path);
    assert_eq!(settings.enrollment.endpoint, DEFAULT_ENROLL_URL);
    let client = HttpEnrollmentClient::new(&settings.enrollment).expect("client");
    assert_eq!(client.endpoint(), DEFAULT_ENROLL_URL);

    let mut state = I18nState::load(Box::new(FilePreferenceStore::new(&path)));
    assert_eq!(state.language(), Language::En);

    // The next toggle replaces the unreadable file
    state.toggle().expect("toggle");
    assert_eq!(load_settings(&path).expect("load").language.as_deref(), Some("ru"));
}
