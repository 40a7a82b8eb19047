use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::theme::{Theme, ThemeStore};

pub const FORMAT_VERSION: u32 = 1;

/// Versioned theme-catalog snapshot as stored in a [`PrefStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogSnapshot {
    version: u32,
    name: String,
    next_id: u32,
    themes: Vec<Theme>,
}

/// File-backed key-value preference store.
///
/// All mutations stay in memory until an explicit [`PrefStore::save`]; the
/// owning layer saves once after a batch of edits instead of on every
/// write. Keys iterate in stable order so the stored bytes are
/// deterministic for identical contents.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl PrefStore {
    /// Open a store at `path`. A missing file yields an empty store; it is
    /// created on the first save.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)
                .map_err(|e| format!("failed to read preference store: {e}"))?;
            serde_json::from_str(&data)
                .map_err(|e| format!("failed to parse preference store: {e}"))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Encode a value under `key`, replacing any previous entry.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), String> {
        let encoded = serde_json::to_value(value)
            .map_err(|e| format!("failed to encode '{key}': {e}"))?;
        self.entries.insert(key.to_string(), encoded);
        Ok(())
    }

    /// Decode the value under `key`, or None when absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        match self.entries.get(key) {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|e| format!("failed to decode '{key}': {e}")),
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Write the store to its backing file.
    pub fn save(&self) -> Result<(), String> {
        let data = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| format!("failed to encode preference store: {e}"))?;
        fs::write(&self.path, data)
            .map_err(|e| format!("failed to write preference store: {e}"))?;
        Ok(())
    }
}

impl ThemeStore {
    /// Preference-store key for a catalog of this name.
    pub fn store_key(name: &str) -> String {
        format!("themes/{name}")
    }

    /// Encode this catalog into `prefs` under its own key. The caller still
    /// owns the decision when to hit the disk via [`PrefStore::save`].
    pub fn save_to(&self, prefs: &mut PrefStore) -> Result<(), String> {
        let (name, next_id, themes) = self.snapshot_parts();
        let snapshot = CatalogSnapshot {
            version: FORMAT_VERSION,
            name: name.to_string(),
            next_id,
            themes: themes.to_vec(),
        };
        prefs.set(&Self::store_key(name), &snapshot)
    }

    /// Decode the catalog stored under `name`, if any.
    pub fn load_from(prefs: &PrefStore, name: &str) -> Result<Option<Self>, String> {
        let Some(snapshot) = prefs.get::<CatalogSnapshot>(&Self::store_key(name))? else {
            return Ok(None);
        };
        if snapshot.version != FORMAT_VERSION {
            return Err(format!(
                "unsupported catalog version {} for '{name}' (expected {FORMAT_VERSION})",
                snapshot.version
            ));
        }
        Ok(Some(Self::from_parts(
            snapshot.name,
            snapshot.next_id,
            snapshot.themes,
        )))
    }

    /// Restore the catalog stored under `name`, seeding the built-in themes
    /// when nothing was stored yet. Never writes; persisting the seeded
    /// catalog is the caller's call.
    pub fn load_or_default(prefs: &PrefStore, name: &str) -> Result<Self, String> {
        match Self::load_from(prefs, name)? {
            Some(store) => Ok(store),
            None => Ok(Self::new(name)),
        }
    }
}
