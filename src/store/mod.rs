//! Record store: the whole equipment collection persisted as one JSON file.
//!
//! Every save rewrites the entire file (no append log, no partial update);
//! the last writer wins at file granularity. Serialization of concurrent
//! access is the service layer's job, not the store's.

use std::path::{Path, PathBuf};

use crate::{error::StorageError, models::Equipment};

/// File-backed store for the equipment collection.
pub struct EquipmentStore {
    path: PathBuf,
}

impl EquipmentStore {
    /// Open the store at `path`. On first run, when no backing file exists,
    /// the file is seeded with the default dataset before any request is
    /// served.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        if !store.path.exists() {
            store.save(&seed_records()).await?;
            tracing::info!("seeded data file {} with default records", store.path.display());
        }
        Ok(store)
    }

    /// Load the full ordered collection. A missing file yields an empty
    /// collection; a malformed file fails with a parse error.
    pub async fn load(&self) -> Result<Vec<Equipment>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Replace the entire persisted contents with `records`, serialized as
    /// indented JSON. Overwrites unconditionally.
    pub async fn save(&self, records: &[Equipment]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// The two default records written the first time no backing file exists.
pub fn seed_records() -> Vec<Equipment> {
    vec![
        Equipment {
            id: 1,
            name: Some("Industrial Mixer A1".to_string()),
            equipment_type: Some("Mixer".to_string()),
            status: Some("Active".to_string()),
            last_cleaned: Some("2024-12-15".to_string()),
        },
        Equipment {
            id: 2,
            name: Some("Storage Tank B3".to_string()),
            equipment_type: Some("Tank".to_string()),
            status: Some("Under Maintenance".to_string()),
            last_cleaned: Some("2024-12-10".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipment-data.json");

        let store = EquipmentStore::open(&path).await.unwrap();
        let records = store.load().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].name.as_deref(), Some("Industrial Mixer A1"));
        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].status.as_deref(), Some("Under Maintenance"));
    }

    #[tokio::test]
    async fn open_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipment-data.json");
        tokio::fs::write(&path, "[]").await.unwrap();

        let store = EquipmentStore::open(&path).await.unwrap();
        let records = store.load().await.unwrap();

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn load_fails_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipment-data.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = EquipmentStore { path };
        let err = store.load().await.unwrap_err();

        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[tokio::test]
    async fn save_overwrites_whole_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equipment-data.json");

        let store = EquipmentStore::open(&path).await.unwrap();
        store
            .save(&[Equipment {
                id: 7,
                name: Some("Solo".to_string()),
                equipment_type: Some("Machine".to_string()),
                status: Some("Active".to_string()),
                last_cleaned: Some("2025-01-01".to_string()),
            }])
            .await
            .unwrap();

        let records = store.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 7);

        // indented JSON on disk
        let text = tokio::fs::read_to_string(store.path).await.unwrap();
        assert!(text.contains("\n  "));
    }
}
