//! Fallback translation for backend text.
//!
//! The backend only delivers Uzbek strings. A [`TranslationMap`] keyed by
//! the exact Uzbek text supplies the Russian variant where one is known;
//! everything else passes through untouched.

mod error;
mod language;
mod map;
mod seed;

#[cfg(test)]
mod tests;

pub use error::I18nError;
pub use language::Language;
pub use map::{Translation, TranslationMap};

/// Translate `text` into `active_language` using `map`.
///
/// Absent or empty input yields an empty string. Unknown text is returned
/// unchanged.
pub fn translate(text: Option<&str>, active_language: &str, map: &TranslationMap) -> String {
    map.translate(text, active_language)
}
