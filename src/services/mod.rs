//! Business logic services

pub mod equipment;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::EquipmentStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
}

impl Services {
    /// Create all services over the given store. The store is wrapped in a
    /// mutex so that concurrent requests cannot interleave their
    /// load-mutate-save cycles and lose updates.
    pub fn new(store: EquipmentStore) -> Self {
        let store = Arc::new(Mutex::new(store));
        Self {
            equipment: equipment::EquipmentService::new(store),
        }
    }
}
