//! Equipment service: the five CRUD operations over the record store.
//!
//! Each operation locks the store, loads the whole collection, works on it
//! in memory and, for mutations, persists the whole collection back. There
//! is no per-record partial update at the storage layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{CreateEquipment, Equipment, UpdateEquipment},
    store::EquipmentStore,
};

#[derive(Clone)]
pub struct EquipmentService {
    store: Arc<Mutex<EquipmentStore>>,
}

impl EquipmentService {
    pub fn new(store: Arc<Mutex<EquipmentStore>>) -> Self {
        Self { store }
    }

    /// List the full collection, in storage order.
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let store = self.store.lock().await;
        Ok(store.load().await?)
    }

    /// Get a record by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        let store = self.store.lock().await;
        let records = store.load().await?;
        records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create a record. All four fields must be present and non-empty; the
    /// id is assigned as one greater than the current maximum (1 when the
    /// collection is empty), so ids can be reused after the max-id record
    /// is deleted.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let missing = [
            &data.name,
            &data.equipment_type,
            &data.status,
            &data.last_cleaned,
        ]
        .iter()
        .any(|f| f.as_deref().map_or(true, str::is_empty));
        if missing {
            return Err(AppError::Validation("Missing fields".to_string()));
        }

        let store = self.store.lock().await;
        let mut records = store.load().await?;

        let id = records.iter().map(|r| r.id).max().map_or(1, |max| max + 1);
        let record = Equipment {
            id,
            name: data.name.clone(),
            equipment_type: data.equipment_type.clone(),
            status: data.status.clone(),
            last_cleaned: data.last_cleaned.clone(),
        };

        records.push(record.clone());
        store.save(&records).await?;

        tracing::info!(id, "created equipment record");
        Ok(record)
    }

    /// Replace the record with the given id by the supplied fields. The
    /// path id always wins; fields omitted from the body are dropped, not
    /// merged from the previous record. No field validation.
    pub async fn update(&self, id: i64, data: &UpdateEquipment) -> AppResult<Equipment> {
        let store = self.store.lock().await;
        let mut records = store.load().await?;

        let slot = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        *slot = Equipment::from_update(id, data);
        let record = slot.clone();

        store.save(&records).await?;

        tracing::info!(id, "updated equipment record");
        Ok(record)
    }

    /// Delete the record with the given id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let store = self.store.lock().await;
        let mut records = store.load().await?;

        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }

        store.save(&records).await?;

        tracing::info!(id, "deleted equipment record");
        Ok(())
    }
}
