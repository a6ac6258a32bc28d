use std::sync::{Arc, RwLock};

use super::Language;
use crate::ports::LocalizationPort;

/// Current UI language plus translator.
///
/// Created once at app start and shared read-only; only [`set_language`]
/// mutates it.
///
/// [`set_language`]: LocaleContext::set_language
pub struct LocaleContext {
    language: RwLock<Language>,
    provider: Arc<dyn LocalizationPort>,
}

impl LocaleContext {
    pub fn new(language: Language, provider: Arc<dyn LocalizationPort>) -> Self {
        Self {
            language: RwLock::new(language),
            provider,
        }
    }

    pub fn language(&self) -> Language {
        *self.language.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_language(&self, language: Language) {
        let mut guard = self
            .language
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = language;
        #[cfg(feature = "tracing")]
        tracing::info!(language = language.code(), "ui language changed");
    }

    /// Looks up `key` in the current language, then English, then echoes the key.
    pub fn t(&self, key: &str) -> String {
        let language = self.language();
        if let Some(text) = self.provider.translate(language, key) {
            return text;
        }
        if language != Language::En {
            if let Some(text) = self.provider.translate(Language::En, key) {
                return text;
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(key, language = language.code(), "missing translation");
        key.to_string()
    }

    pub fn states(&self) -> Vec<String> {
        self.provider.states()
    }

    pub fn districts(&self, state: &str) -> Vec<String> {
        self.provider.districts(state)
    }
}
