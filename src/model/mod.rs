//! Fitness record types and the traits every record kind implements.

mod equipment;
mod muscle_group;
mod nutrition;
mod recovery;
mod workout;

pub use equipment::{Equipment, EquipmentFilter};
pub use muscle_group::{MuscleGroup, MuscleGroupFilter};
pub use nutrition::{FoodFamily, Macro, Nutrition, NutritionFilter};
pub use recovery::{Recovery, RecoveryFilter};
pub use workout::{Workout, WorkoutFilter};

use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Identity carried by a record that has not been persisted yet.
pub const UNSAVED_ID: i32 = 0;

/// A persisted record kind. Identity is assigned by the store on first create.
pub trait Entity: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Kind name used in log lines and error payloads ("Workout", "Equipment", ...).
    const KIND: &'static str;

    /// The `read_by` lookups this kind supports.
    type Filter: RecordFilter<Self>;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    fn created_at(&self) -> DateTime<Utc>;

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);

    /// Order of `read_all` / `read_by` results. Identity breaks ties.
    fn listing_order(a: &Self, b: &Self) -> Ordering;

    /// Bring fields into their stored form. Applied by every store before writing.
    fn normalize(&mut self) {}

    /// Value of the kind's UNIQUE column, if it has one.
    fn unique_key(&self) -> Option<&str> {
        None
    }
}

/// A single-column equality lookup over one record kind.
pub trait RecordFilter<E>: Debug + Send + Sync {
    fn matches(&self, record: &E) -> bool;
}

/// Wire form of a nullable record reference: `0` and `null` both mean "unassigned".
pub(crate) mod optional_id {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(value.unwrap_or(0))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
        let raw = Option::<i32>::deserialize(deserializer)?;
        Ok(raw.filter(|id| *id > 0))
    }
}
