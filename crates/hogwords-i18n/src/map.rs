use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

use crate::{seed, I18nError};

/// One backend string in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub source: String,
    pub target: String,
}

/// Dictionary from exact source-language text to its translations.
///
/// Keys are matched byte for byte: no case folding, no trimming.
#[derive(Debug, Clone)]
pub struct TranslationMap {
    source_language: String,
    target_language: String,
    entries: HashMap<String, Translation>,
}

#[derive(Debug, Deserialize)]
struct Overlay {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl TranslationMap {
    /// An empty `source -> target` map.
    pub fn empty(source_language: &str, target_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            entries: HashMap::new(),
        }
    }

    /// A `uz -> ru` map holding the compiled-in entries.
    pub fn with_seed() -> Self {
        let mut map = Self::empty("uz", "ru");
        for (uz, ru) in seed::ENTRIES {
            map.add_entry(uz, ru);
        }
        map
    }

    /// A map for the `source -> target` pair.
    ///
    /// The compiled-in entries only cover `uz -> ru`; any other pair starts
    /// empty.
    pub fn for_pair(source_language: &str, target_language: &str) -> Self {
        if source_language == "uz" && target_language == "ru" {
            return Self::with_seed();
        }
        warn!("no built-in translations for {source_language} -> {target_language}");
        Self::empty(source_language, target_language)
    }

    /// [`for_pair`](Self::for_pair) plus an optional overlay file on top.
    pub fn load(
        source_language: &str,
        target_language: &str,
        overlay: Option<&str>,
    ) -> Result<Self, I18nError> {
        let mut map = Self::for_pair(source_language, target_language);
        if let Some(path) = overlay {
            map.load_overlay(path)?;
        }
        debug!(
            "translation map {} -> {} ready with {} entries",
            map.source_language(),
            map.target_language(),
            map.len()
        );
        Ok(map)
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    pub fn get(&self, text: &str) -> Option<&Translation> {
        self.entries.get(text)
    }

    /// Render `text` for `active_language`.
    ///
    /// Known text yields the target-language variant when `active_language`
    /// is the target tag and the source variant for every other tag.
    /// Unknown text is returned as is; absent or empty text becomes `""`.
    pub fn translate(&self, text: Option<&str>, active_language: &str) -> String {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return String::new();
        };
        match self.entries.get(text) {
            Some(entry) if active_language == self.target_language => entry.target.clone(),
            Some(entry) => entry.source.clone(),
            None => text.to_string(),
        }
    }

    /// Insert or overwrite the entry for `source`.
    pub fn add_entry(&mut self, source: &str, target: &str) {
        let previous = self.entries.insert(
            source.to_string(),
            Translation {
                source: source.to_string(),
                target: target.to_string(),
            },
        );
        if previous.is_some() {
            debug!("translation overwritten: {source:?}");
        }
    }

    /// Apply every `[entries]` pair from a TOML overlay file.
    ///
    /// Returns how many entries were applied.
    pub fn load_overlay(&mut self, path: impl AsRef<Path>) -> Result<usize, I18nError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let applied = self.apply_overlay(&content)?;
        debug!("loaded {applied} translations from {}", path.display());
        Ok(applied)
    }

    /// Apply every `[entries]` pair from overlay TOML text.
    pub fn apply_overlay(&mut self, content: &str) -> Result<usize, I18nError> {
        let overlay: Overlay = toml::from_str(content)?;
        for (source, target) in &overlay.entries {
            self.add_entry(source, target);
        }
        Ok(overlay.entries.len())
    }
}

impl Default for TranslationMap {
    fn default() -> Self {
        Self::with_seed()
    }
}
