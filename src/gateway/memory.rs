//! In-process store with the same observable behaviour as the PostgreSQL gateway.
//! Nothing survives a restart; used by tests and the `memory` store mode.

use super::{Gateway, Store};
use crate::error::AppError;
use crate::model::{Entity, Equipment, MuscleGroup, Nutrition, RecordFilter, Recovery, Workout};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub(crate) struct Rows<E> {
    rows: BTreeMap<i32, E>,
    last_id: i32,
}

impl<E> Default for Rows<E> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<E: Entity> Rows<E> {
    /// Mirrors the UNIQUE constraints of the relational schema.
    fn check_unique(&self, record: &E) -> Result<(), AppError> {
        let Some(key) = record.unique_key() else {
            return Ok(());
        };
        let taken = self
            .rows
            .values()
            .any(|existing| existing.id() != record.id() && existing.unique_key() == Some(key));
        if taken {
            return Err(AppError::Rejected(format!("duplicate {} name '{}'", E::KIND, key)));
        }
        Ok(())
    }

    fn sorted(&self, mut out: Vec<E>) -> Vec<E> {
        out.sort_by(E::listing_order);
        out
    }
}

#[derive(Default)]
struct Tables {
    workouts: Mutex<Rows<Workout>>,
    muscle_groups: Mutex<Rows<MuscleGroup>>,
    nutrition: Mutex<Rows<Nutrition>>,
    recovery: Mutex<Rows<Recovery>>,
    equipment: Mutex<Rows<Equipment>>,
}

/// Picks the table for a record kind.
pub(crate) trait HasRows<E> {
    fn rows(&self) -> &Mutex<Rows<E>>;
}

macro_rules! has_rows {
    ($entity:ty, $field:ident) => {
        impl HasRows<$entity> for MemoryStore {
            fn rows(&self) -> &Mutex<Rows<$entity>> {
                &self.tables.$field
            }
        }
    };
}

/// Cheap to clone; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

has_rows!(Workout, workouts);
has_rows!(MuscleGroup, muscle_groups);
has_rows!(Nutrition, nutrition);
has_rows!(Recovery, recovery);
has_rows!(Equipment, equipment);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<E>(&self) -> MutexGuard<'_, Rows<E>>
    where
        Self: HasRows<E>,
    {
        <Self as HasRows<E>>::rows(self).lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<E: Entity> Gateway<E> for MemoryStore
where
    MemoryStore: HasRows<E>,
{
    async fn create(&self, record: &E) -> Result<E, AppError> {
        let mut table = self.lock::<E>();
        let mut stored = record.clone();
        stored.set_id(table.last_id + 1);
        stored.normalize();
        table.check_unique(&stored)?;
        table.last_id += 1;
        let now = Utc::now();
        stored.set_timestamps(now, now);
        table.rows.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn read_by_id(&self, id: i32) -> Result<Option<E>, AppError> {
        Ok(self.lock::<E>().rows.get(&id).cloned())
    }

    async fn read_all(&self) -> Result<Vec<E>, AppError> {
        let table = self.lock::<E>();
        Ok(table.sorted(table.rows.values().cloned().collect()))
    }

    async fn read_by(&self, filter: &E::Filter) -> Result<Vec<E>, AppError> {
        let table = self.lock::<E>();
        let matching = table.rows.values().filter(|r| filter.matches(r)).cloned().collect();
        Ok(table.sorted(matching))
    }

    async fn update(&self, record: &E) -> Result<Option<E>, AppError> {
        let mut table = self.lock::<E>();
        let Some(created_at) = table.rows.get(&record.id()).map(|existing| existing.created_at()) else {
            return Ok(None);
        };
        table.check_unique(record)?;
        let mut stored = record.clone();
        stored.normalize();
        stored.set_timestamps(created_at, Utc::now());
        table.rows.insert(stored.id(), stored.clone());
        Ok(Some(stored))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(self.lock::<E>().rows.remove(&id).is_some())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
