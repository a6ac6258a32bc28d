//! Language selection and string lookup.

mod context;
mod language;

pub use context::LocaleContext;
pub use language::Language;
