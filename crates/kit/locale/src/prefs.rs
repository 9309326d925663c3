//! Persisted user preferences.
//!
//! Resolution functions take preference values as explicit inputs; this
//! module supplies the injected providers. `FilePreferences` is the
//! on-disk implementation (a small JSON file under the platform config
//! directory), `MemoryPreferences` serves tests and embedding apps that
//! manage persistence themselves.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised by preference storage.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to read preferences at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write preferences at {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("preferences file {} holds invalid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no platform configuration directory available")]
    NoConfigDir,
}

/// Injected access to persisted preferences.
///
/// Values are stored as raw strings: the stores do not validate or migrate,
/// so legacy values (`white`/`black` themes) survive until resolution maps
/// them.
pub trait PreferenceStore {
    /// Persisted language tag, if any.
    fn language(&self) -> Option<String>;

    /// Persisted theme value, if any.
    fn theme(&self) -> Option<String>;

    fn set_language(&mut self, tag: &str) -> Result<(), PrefsError>;

    fn set_theme(&mut self, value: &str) -> Result<(), PrefsError>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    language: Option<String>,
    theme: Option<String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for pre-seeded values.
    pub fn with(language: Option<&str>, theme: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
            theme: theme.map(str::to_string),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn language(&self) -> Option<String> {
        self.language.clone()
    }

    fn theme(&self) -> Option<String> {
        self.theme.clone()
    }

    fn set_language(&mut self, tag: &str) -> Result<(), PrefsError> {
        self.language = Some(tag.to_string());
        Ok(())
    }

    fn set_theme(&mut self, value: &str) -> Result<(), PrefsError> {
        self.theme = Some(value.to_string());
        Ok(())
    }
}

/// On-disk serialized form of the preferences file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    /// Entries written by newer releases are preserved on rewrite.
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

/// JSON-file-backed store.
///
/// The file is read once at open; every `set_*` rewrites it immediately.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: StoredPrefs,
}

impl FilePreferences {
    /// Opens the store at `path`; a missing file means empty preferences.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| PrefsError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoredPrefs::default(),
            Err(source) => {
                return Err(PrefsError::Read {
                    path: path.clone(),
                    source,
                });
            }
        };
        Ok(Self { path, values })
    }

    /// Opens the store at the platform default location.
    pub fn open_default() -> Result<Self, PrefsError> {
        let dirs = directories::ProjectDirs::from("", "", "streamkit")
            .ok_or(PrefsError::NoConfigDir)?;
        Self::open(dirs.config_dir().join("preferences.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let raw = serde_json::to_string_pretty(&self.values).map_err(|source| {
            PrefsError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, raw).map_err(|source| PrefsError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn language(&self) -> Option<String> {
        self.values.language.clone()
    }

    fn theme(&self) -> Option<String> {
        self.values.theme.clone()
    }

    fn set_language(&mut self, tag: &str) -> Result<(), PrefsError> {
        self.values.language = Some(tag.to_string());
        self.save()
    }

    fn set_theme(&mut self, value: &str) -> Result<(), PrefsError> {
        self.values.theme = Some(value.to_string());
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_empty_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::open(dir.path().join("preferences.json")).unwrap();
        assert_eq!(prefs.language(), None);
        assert_eq!(prefs.theme(), None);
    }

    #[test]
    fn set_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/preferences.json");

        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.set_language("zh-CN").unwrap();
        prefs.set_theme("DARK").unwrap();

        let reopened = FilePreferences::open(&path).unwrap();
        assert_eq!(reopened.language().as_deref(), Some("zh-CN"));
        assert_eq!(reopened.theme().as_deref(), Some("DARK"));
    }

    #[test]
    fn unknown_entries_survive_a_rewrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"language":"en-US","volume":7}"#).unwrap();

        let mut prefs = FilePreferences::open(&path).unwrap();
        prefs.set_theme("black").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["volume"], 7);
        assert_eq!(parsed["theme"], "black");
    }

    #[test]
    fn corrupt_file_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            FilePreferences::open(&path),
            Err(PrefsError::Parse { .. })
        ));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_language("zh_CN").unwrap();
        assert_eq!(prefs.language().as_deref(), Some("zh_CN"));
        assert_eq!(prefs.theme(), None);
    }
}
