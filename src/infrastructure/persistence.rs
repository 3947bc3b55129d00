use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// Preferences kept as a flat JSON object in a single file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the preferences file. A missing file starts empty; an unreadable
    /// or corrupt one is logged and also starts empty, since the only thing
    /// stored here is a cosmetic preference.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring corrupt preferences file: {e}");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not read preferences file: {e}");
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, json).map_err(|source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// In-process preferences. Counts writes so callers can assert on them.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
    writes: usize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut prefs = Self::default();
        prefs.values.insert(key.to_string(), value.to_string());
        prefs
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let prefs = FilePreferences::open(dir.path().join("prefs.json"));
        assert_eq!(prefs.get("thememorph-theme"), None);
        assert_eq!(prefs.path(), dir.path().join("prefs.json"));
    }

    #[test]
    fn test_set_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut prefs = FilePreferences::open(&path);
        prefs.set("thememorph-theme", "theme2").unwrap();

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get("thememorph-theme").as_deref(), Some("theme2"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut prefs = FilePreferences::open(&path);
        assert_eq!(prefs.get("thememorph-theme"), None);

        // Writing replaces the corrupt content.
        prefs.set("thememorph-theme", "theme3").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("theme3"));
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be.
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();

        let mut prefs = FilePreferences::open(&path);
        let result = prefs.set("thememorph-theme", "theme1");
        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }

    #[test]
    fn test_memory_preferences_count_writes() {
        let mut prefs = MemoryPreferences::with_value("k", "v");
        assert_eq!(prefs.get("k").as_deref(), Some("v"));
        assert_eq!(prefs.writes(), 0);
        prefs.set("k", "w").unwrap();
        assert_eq!(prefs.writes(), 1);
        assert_eq!(prefs.get("k").as_deref(), Some("w"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut boxed: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::new());
        boxed.set("a", "b").unwrap();
        assert_eq!(boxed.get("a").as_deref(), Some("b"));
    }
}
