//! String catalog loader.
//!
//! Catalogs are embedded JSON maps, one file per supported language,
//! parsed once at load time and immutable afterwards.
use std::collections::HashMap;

use kit_core::Localizer;

use crate::language::Language;

/// Text used when even the generic failure entry is missing from a catalog.
const LAST_RESORT_TEXT: &str = "Operation failed.";

/// Errors raised while loading a string catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog for {language} is not valid JSON: {source}")]
    Parse {
        language: Language,
        source: serde_json::Error,
    },
}

/// Immutable key→text map for one language.
#[derive(Clone, Debug)]
pub struct LocaleCatalog {
    language: Language,
    entries: HashMap<String, String>,
}

impl LocaleCatalog {
    /// Loads the embedded catalog for `language`.
    pub fn load(language: Language) -> Result<Self, CatalogError> {
        let raw = match language {
            Language::English => include_str!("../locales/en-US.json"),
            Language::SimplifiedChinese => include_str!("../locales/zh-CN.json"),
        };
        let entries: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|source| CatalogError::Parse { language, source })?;
        Ok(Self { language, entries })
    }

    /// Language this catalog resolves into.
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Exact lookup without fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for LocaleCatalog {
    /// Resolves `key`, degrading to the generic failure text on a miss.
    ///
    /// Never returns an empty string: a missing key yields the catalog's
    /// `live.error.failed` entry, and a catalog missing even that yields a
    /// fixed English fallback.
    fn resolve(&self, key: &str) -> String {
        if let Some(text) = self.entries.get(key) {
            return text.clone();
        }
        self.entries
            .get(kit_core::GENERIC_FAILURE_KEY)
            .cloned()
            .unwrap_or_else(|| LAST_RESORT_TEXT.to_string())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn both_catalogs_load() {
        for language in Language::iter() {
            let catalog = LocaleCatalog::load(language).expect("embedded catalog must parse");
            assert!(!catalog.is_empty());
            assert_eq!(catalog.language(), language);
        }
    }

    #[test]
    fn catalogs_cover_every_localization_key() {
        for language in Language::iter() {
            let catalog = LocaleCatalog::load(language).expect("embedded catalog must parse");
            for key in kit_core::all_localization_keys() {
                let text = catalog.get(key);
                assert!(text.is_some(), "{language} catalog is missing {key}");
                assert!(
                    !text.unwrap().trim().is_empty(),
                    "{language} catalog has an empty entry for {key}"
                );
            }
        }
    }

    #[test]
    fn missing_key_degrades_to_generic_failure_text() {
        let catalog = LocaleCatalog::load(Language::English).unwrap();
        let fallback = catalog.resolve("live.error.not.a.real.key");
        assert_eq!(fallback, catalog.resolve(kit_core::GENERIC_FAILURE_KEY));
        assert!(!fallback.is_empty());
    }

    #[test]
    fn languages_actually_differ() {
        let en = LocaleCatalog::load(Language::English).unwrap();
        let zh = LocaleCatalog::load(Language::SimplifiedChinese).unwrap();
        assert_ne!(
            en.resolve("live.error.connection.full"),
            zh.resolve("live.error.connection.full")
        );
    }
}
