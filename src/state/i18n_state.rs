//! I18nState - Selected Language with Persistence

use crate::error::Result;
use crate::i18n::{get_dictionary, toggle_language, Dictionary, Language};
use crate::services::PreferenceStore;

/// Read the stored language; absent or unrecognized values give English
pub fn load_persisted_language(store: &dyn PreferenceStore) -> Language {
    match store.language() {
        Some(code) => Language::from_code(&code).unwrap_or_else(|| {
            tracing::warn!(code = %code, "Unknown stored language, using English");
            Language::En
        }),
        None => Language::En,
    }
}

/// Store the language for future sessions
pub fn persist_language(store: &mut dyn PreferenceStore, language: Language) -> Result<()> {
    store.set_language(language.code())
}

/// State for internationalization
pub struct I18nState {
    /// Current language
    language: Language,
    store: Box<dyn PreferenceStore>,
}

impl std::fmt::Debug for I18nState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18nState")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl I18nState {
    /// Load the persisted language from the store
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let language = load_persisted_language(store.as_ref());
        tracing::info!(language = language.code(), "Language loaded");
        Self { language, store }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Dictionary for the current language
    pub fn dictionary(&self) -> Dictionary {
        get_dictionary(self.language)
    }

    /// Switch language and persist it. The in-memory switch happens even
    /// when writing fails; the error is returned for logging.
    pub fn toggle(&mut self) -> Result<Language> {
        self.set_language(toggle_language(self.language))
    }

    /// Set the language and persist it
    pub fn set_language(&mut self, language: Language) -> Result<Language> {
        self.language = language;
        persist_language(self.store.as_mut(), language)?;
        Ok(language)
    }
}
