//! Persistence gateway: one table per record kind, no business rules.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::AppError;
use crate::model::{Entity, Equipment, MuscleGroup, Nutrition, Recovery, Workout};
use async_trait::async_trait;

/// CRUD over the table backing `E`.
///
/// Lookups that match nothing return `None` or an empty vector, never an error.
#[async_trait]
pub trait Gateway<E: Entity>: Send + Sync {
    /// Insert `record` and return the stored row, carrying its new identity and timestamps.
    /// The identity comes back from the insert itself.
    async fn create(&self, record: &E) -> Result<E, AppError>;

    async fn read_by_id(&self, id: i32) -> Result<Option<E>, AppError>;

    /// Every row in listing order.
    async fn read_all(&self) -> Result<Vec<E>, AppError>;

    /// Rows matching `filter`, in listing order.
    async fn read_by(&self, filter: &E::Filter) -> Result<Vec<E>, AppError>;

    /// Overwrite the row with `record`'s identity. `None` when no such row exists.
    async fn update(&self, record: &E) -> Result<Option<E>, AppError>;

    /// Remove a row. `false` when no such row existed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// A backend holding all five tables.
#[async_trait]
pub trait Store:
    Gateway<Workout> + Gateway<MuscleGroup> + Gateway<Nutrition> + Gateway<Recovery> + Gateway<Equipment>
{
    /// Round-trip to the backend, reconnecting if needed.
    async fn ping(&self) -> Result<(), AppError>;
}
