//! Business entry point over a [`Store`]: upsert routing and logged pass-throughs.

use crate::error::AppError;
use crate::gateway::{Gateway, Store};
use crate::model::{Entity, Equipment, EquipmentFilter, MuscleGroup, MuscleGroupFilter, UNSAVED_ID};
use std::sync::Arc;

/// What `save` will do with a record, decided from its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Create,
    Update(i32),
}

impl Intent {
    pub fn resolve(id: i32) -> Self {
        if id == UNSAVED_ID {
            Intent::Create
        } else {
            Intent::Update(id)
        }
    }
}

#[derive(Clone)]
pub struct RecordManager {
    store: Arc<dyn Store>,
}

impl RecordManager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create or update `record` depending on its identity. On success `record` holds the
    /// stored values, including a newly assigned identity and the store's timestamps.
    pub async fn save<E: Entity>(&self, record: &mut E) -> Result<(), AppError>
    where
        dyn Store: Gateway<E>,
    {
        let outcome = match Intent::resolve(record.id()) {
            Intent::Create => Gateway::<E>::create(&*self.store, record).await,
            Intent::Update(_) => Gateway::<E>::update(&*self.store, record)
                .await
                .and_then(|stored| stored.ok_or_else(|| AppError::not_found(E::KIND))),
        };
        match outcome {
            Ok(stored) => {
                tracing::info!(kind = E::KIND, id = stored.id(), "record saved");
                *record = stored;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(kind = E::KIND, id = record.id(), error = %e, "save failed");
                Err(e)
            }
        }
    }

    pub async fn get<E: Entity>(&self, id: i32) -> Result<Option<E>, AppError>
    where
        dyn Store: Gateway<E>,
    {
        let found = Gateway::<E>::read_by_id(&*self.store, id)
            .await
            .inspect_err(|e| tracing::warn!(kind = E::KIND, id, error = %e, "read failed"))?;
        match &found {
            Some(_) => tracing::info!(kind = E::KIND, id, "record read"),
            None => tracing::info!(kind = E::KIND, id, "record not found"),
        }
        Ok(found)
    }

    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, AppError>
    where
        dyn Store: Gateway<E>,
    {
        let rows = Gateway::<E>::read_all(&*self.store)
            .await
            .inspect_err(|e| tracing::warn!(kind = E::KIND, error = %e, "list failed"))?;
        tracing::info!(kind = E::KIND, count = rows.len(), "records listed");
        Ok(rows)
    }

    pub async fn find<E: Entity>(&self, filter: &E::Filter) -> Result<Vec<E>, AppError>
    where
        dyn Store: Gateway<E>,
    {
        let rows = Gateway::<E>::read_by(&*self.store, filter)
            .await
            .inspect_err(|e| tracing::warn!(kind = E::KIND, ?filter, error = %e, "lookup failed"))?;
        tracing::info!(kind = E::KIND, ?filter, count = rows.len(), "records found");
        Ok(rows)
    }

    /// `Ok(false)` when nothing had that identity.
    pub async fn delete<E: Entity>(&self, id: i32) -> Result<bool, AppError>
    where
        dyn Store: Gateway<E>,
    {
        let existed = Gateway::<E>::delete(&*self.store, id)
            .await
            .inspect_err(|e| tracing::warn!(kind = E::KIND, id, error = %e, "delete failed"))?;
        if existed {
            tracing::info!(kind = E::KIND, id, "record deleted");
        } else {
            tracing::info!(kind = E::KIND, id, "nothing to delete");
        }
        Ok(existed)
    }

    pub async fn muscle_group_by_name(&self, name: &str) -> Result<Option<MuscleGroup>, AppError> {
        let found = self.find::<MuscleGroup>(&MuscleGroupFilter::Name(name.to_string())).await?;
        Ok(found.into_iter().next())
    }

    pub async fn equipment_by_name(&self, name: &str) -> Result<Option<Equipment>, AppError> {
        let found = self.find::<Equipment>(&EquipmentFilter::Name(name.to_string())).await?;
        Ok(found.into_iter().next())
    }

    pub async fn test_connection(&self) -> Result<(), AppError> {
        match self.store.ping().await {
            Ok(()) => {
                tracing::info!("store connection ok");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "store connection failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_identity_means_create() {
        assert_eq!(Intent::resolve(0), Intent::Create);
        assert_eq!(Intent::resolve(12), Intent::Update(12));
    }
}
