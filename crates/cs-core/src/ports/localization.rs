use crate::locale::Language;

/// Static string tables and administrative lookups. Pure data.
pub trait LocalizationPort: Send + Sync {
    fn translate(&self, language: Language, key: &str) -> Option<String>;

    fn states(&self) -> Vec<String>;

    /// Districts of `state`; empty when the state is unknown.
    fn districts(&self, state: &str) -> Vec<String>;
}
