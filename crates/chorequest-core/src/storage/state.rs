//! JSON state-file persistence.
//!
//! The entire application state lives in one JSON document at
//! `<data_dir>/state.json`: `{ "chores": [...], "level": n, "xp": n }`.
//! It is read once at startup and written after every committed mutation.
//!
//! Loading is fail-soft: a missing, unreadable, or corrupt file yields the
//! default empty state (no chores, level 1, xp 0) rather than an error.

use std::path::PathBuf;

use crate::error::StorageError;
use crate::store::ChoreStore;

const STATE_FILE: &str = "state.json";

/// Handle to the on-disk state document.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// State file in the default data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = super::data_dir().map_err(|e| StorageError::DataDir(e.to_string()))?;
        Ok(Self {
            path: dir.join(STATE_FILE),
        })
    }

    /// State file at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load the store, falling back to defaults when the file is absent
    /// or does not parse.
    pub fn load(&self) -> ChoreStore {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => ChoreStore::default(),
        }
    }

    /// Persist the store.
    pub fn save(&self, store: &ChoreStore) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(store).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, json).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chore::Difficulty;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));
        let store = file.load();
        assert!(store.chores().is_empty());
        assert_eq!(store.progress().level, 1);
        assert_eq!(store.progress().xp, 0);
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json!").unwrap();
        let store = StateFile::at(&path).load();
        assert!(store.chores().is_empty());
        assert_eq!(store.progress().level, 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));

        let mut store = ChoreStore::new();
        store.add_chore("Wash the dishes", Difficulty::Easy).unwrap();
        store.add_chore("Vacuum", Difficulty::Hard).unwrap();
        let id = store.chores()[0].id.clone();
        store.apply_reward(&id, 7).unwrap();

        file.save(&store).unwrap();
        let loaded = file.load();
        assert_eq!(loaded, store);
    }

    #[test]
    fn state_schema_is_flat() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::at(dir.path().join("state.json"));
        let mut store = ChoreStore::new();
        store.add_chore("Vacuum", Difficulty::Easy).unwrap();
        file.save(&store).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert!(raw["chores"].is_array());
        assert_eq!(raw["level"], 1);
        assert_eq!(raw["xp"], 0);
    }
}
