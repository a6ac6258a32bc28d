//! Bundled string tables and administrative regions.

mod regions;
mod strings;

use std::collections::HashMap;

use cs_core::locale::Language;
use cs_core::ports::LocalizationPort;
use lazy_static::lazy_static;

lazy_static! {
    static ref TABLES: HashMap<Language, HashMap<&'static str, &'static str>> = Language::ALL
        .into_iter()
        .map(|language| (language, strings::table(language).iter().copied().collect()))
        .collect();
}

/// [`LocalizationPort`] over the tables compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLocalization;

impl LocalizationPort for StaticLocalization {
    fn translate(&self, language: Language, key: &str) -> Option<String> {
        TABLES
            .get(&language)
            .and_then(|table| table.get(key))
            .map(|text| text.to_string())
    }

    fn states(&self) -> Vec<String> {
        regions::STATES
            .iter()
            .map(|(state, _)| state.to_string())
            .collect()
    }

    fn districts(&self, state: &str) -> Vec<String> {
        regions::STATES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(state.trim()))
            .map(|(_, districts)| districts.iter().map(|d| d.to_string()).collect())
            .unwrap_or_default()
    }
}
