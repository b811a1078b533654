//! Single cached snapshot of the latest score evaluation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::scoring::{FactorInput, ScoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub inputs: FactorInput,
    pub result: ScoreResult,
}

/// A snapshot as it comes back from storage, stamped with its save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSnapshot {
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub saved_at: DateTime<Utc>,
}

impl SavedSnapshot {
    pub fn stamp(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            saved_at: Utc::now(),
        }
    }

    pub fn saved_label(&self) -> String {
        self.saved_at.format("%d/%m/%Y %H:%M UTC").to_string()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}

/// Storage for the single most recent snapshot. Absence is `Ok(None)`.
pub trait SnapshotStore: Send + Sync {
    fn save(&self, snapshot: Snapshot) -> Result<SavedSnapshot, SnapshotError>;
    fn load(&self) -> Result<Option<SavedSnapshot>, SnapshotError>;
    fn clear(&self) -> Result<(), SnapshotError>;

    fn has_saved(&self) -> Result<bool, SnapshotError> {
        Ok(self.load()?.is_some())
    }
}

#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<SavedSnapshot>>,
}

impl MemorySnapshotStore {
    fn with_slot<T>(
        &self,
        f: impl FnOnce(&mut Option<SavedSnapshot>) -> T,
    ) -> Result<T, SnapshotError> {
        let mut guard = self
            .slot
            .lock()
            .map_err(|_| SnapshotError::Unavailable("snapshot mutex poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: Snapshot) -> Result<SavedSnapshot, SnapshotError> {
        let saved = SavedSnapshot::stamp(snapshot);
        self.with_slot(|slot| *slot = Some(saved.clone()))?;
        Ok(saved)
    }

    fn load(&self) -> Result<Option<SavedSnapshot>, SnapshotError> {
        self.with_slot(|slot| slot.clone())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        self.with_slot(|slot| *slot = None)
    }
}

/// Keeps the snapshot as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn save(&self, snapshot: Snapshot) -> Result<SavedSnapshot, SnapshotError> {
        let saved = SavedSnapshot::stamp(snapshot);
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let encoded = serde_json::to_vec_pretty(&saved)?;
        fs::write(&self.path, encoded)?;
        debug!(path = %self.path.display(), "snapshot saved");
        Ok(saved)
    }

    fn load(&self) -> Result<Option<SavedSnapshot>, SnapshotError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(saved) => Ok(Some(saved)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable snapshot");
                Ok(None)
            }
        }
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;
    use chrono::TimeZone;

    fn snapshot() -> Snapshot {
        let inputs = FactorInput::default();
        Snapshot {
            result: calculate_score(&inputs),
            inputs,
        }
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemorySnapshotStore::default();
        assert!(store.load().expect("load").is_none());
        assert!(!store.has_saved().expect("has_saved"));

        let saved = store.save(snapshot()).expect("save");
        let loaded = store.load().expect("load").expect("present");

        assert_eq!(loaded, saved);
        assert_eq!(loaded.snapshot, snapshot());

        store.clear().expect("clear");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn saved_snapshot_flattens_payload_next_to_timestamp() {
        let saved = SavedSnapshot {
            snapshot: snapshot(),
            saved_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        };

        let value = serde_json::to_value(&saved).expect("serializes");

        assert!(value.get("inputs").is_some());
        assert!(value.get("result").is_some());
        assert_eq!(value["savedAt"], "2025-03-14T09:30:00Z");
        assert_eq!(saved.saved_label(), "14/03/2025 09:30 UTC");
    }
}
