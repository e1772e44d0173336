//! PreferenceStore - persistent key-value UI preferences
//!
//! One JSON object per file, string keys to string values. Every write is
//! flushed to disk immediately so a crash never loses the last selection.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PreferenceResult;

/// Key-value preference store
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    /// Backing file; `None` keeps everything in memory
    file_path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Store that is never written to disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> PreferenceResult<Self> {
        let file_path = path.into();

        let entries = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %file_path.display(), count = entries.len(), "Preferences loaded");
        Ok(Self {
            file_path: Some(file_path),
            entries,
        })
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value and persist
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> PreferenceResult<()> {
        let key = key.into();
        let value = value.into();
        if self.entries.get(&key) == Some(&value) {
            return Ok(());
        }
        self.entries.insert(key, value);
        self.save()
    }

    /// Remove a value and persist. Returns the old value.
    pub fn remove(&mut self, key: &str) -> PreferenceResult<Option<String>> {
        let old = self.entries.remove(key);
        if old.is_some() {
            self.save()?;
        }
        Ok(old)
    }

    /// Remove everything and persist
    pub fn clear(&mut self) -> PreferenceResult<()> {
        self.entries.clear();
        self.save()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn save(&self) -> PreferenceResult<()> {
        let Some(path) = &self.file_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Preferences saved");
        Ok(())
    }
}
