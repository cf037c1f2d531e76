//! Column layout of each record table. The single place that pairs fields with columns.

use crate::model::{
    Entity, Equipment, EquipmentFilter, MuscleGroup, MuscleGroupFilter, Nutrition, NutritionFilter, Recovery,
    RecoveryFilter, Workout, WorkoutFilter,
};
use crate::sql::PgBindValue;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Timestamp columns present on every table; set by the database.
pub const TIMESTAMP_COLUMNS: [&str; 2] = ["created_at", "updated_at"];

/// Relational layout of an entity. Row decoding goes through the entity's `FromRow` derive.
pub trait Table: Entity + for<'r> FromRow<'r, PgRow> {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Writable columns, in the order `values` yields them.
    const COLUMNS: &'static [&'static str];
    /// ORDER BY clause for listings, without the identity tie-break.
    const ORDER_BY: &'static str;

    fn values(&self) -> Vec<PgBindValue>;

    /// Column and value of a `read_by` lookup. `NullInt` selects rows where the column IS NULL.
    fn filter_column(filter: &Self::Filter) -> (&'static str, PgBindValue);
}

impl Table for Workout {
    const TABLE: &'static str = "workout";
    const ID_COLUMN: &'static str = "workout_id";
    const COLUMNS: &'static [&'static str] = &[
        "workout_date",
        "workout_time",
        "duration",
        "type_description",
        "calories_burned",
        "rate_perceived_exhaustion",
        "muscle_group_id",
    ];
    const ORDER_BY: &'static str = "\"workout_date\" DESC, \"workout_time\" DESC";

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.workout_date.into(),
            self.workout_time.into(),
            self.duration.into(),
            self.type_description.as_str().into(),
            self.calories_burned.into(),
            self.rate_perceived_exhaustion.into(),
            self.muscle_group_id.filter(|id| *id > 0).into(),
        ]
    }

    fn filter_column(filter: &WorkoutFilter) -> (&'static str, PgBindValue) {
        match filter {
            WorkoutFilter::Date(date) => ("workout_date", (*date).into()),
            WorkoutFilter::MuscleGroup(id) => ("muscle_group_id", (*id).into()),
            WorkoutFilter::Unassigned => ("muscle_group_id", PgBindValue::NullInt),
        }
    }
}

impl Table for MuscleGroup {
    const TABLE: &'static str = "muscle_group";
    const ID_COLUMN: &'static str = "muscle_group_id";
    const COLUMNS: &'static [&'static str] =
        &["name", "description", "days_per_week", "sets", "reps", "weight_amount"];
    const ORDER_BY: &'static str = "\"name\" COLLATE \"C\" ASC";

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.name.as_str().into(),
            self.description.as_str().into(),
            self.days_per_week.into(),
            self.sets.into(),
            self.reps.into(),
            self.weight_amount.into(),
        ]
    }

    fn filter_column(filter: &MuscleGroupFilter) -> (&'static str, PgBindValue) {
        match filter {
            MuscleGroupFilter::Name(name) => ("name", name.as_str().into()),
        }
    }
}

impl Table for Nutrition {
    const TABLE: &'static str = "nutrition";
    const ID_COLUMN: &'static str = "nutrition_id";
    const COLUMNS: &'static [&'static str] =
        &["family", "water", "carbs", "fat", "protein", "sugar", "meal_date"];
    const ORDER_BY: &'static str = "\"meal_date\" DESC";

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.family.as_str().into(),
            self.water.into(),
            self.carbs.into(),
            self.fat.into(),
            self.protein.into(),
            self.sugar.into(),
            self.meal_date.into(),
        ]
    }

    fn filter_column(filter: &NutritionFilter) -> (&'static str, PgBindValue) {
        match filter {
            NutritionFilter::Date(date) => ("meal_date", (*date).into()),
            NutritionFilter::Family(family) => ("family", family.as_str().into()),
        }
    }
}

impl Table for Recovery {
    const TABLE: &'static str = "recovery";
    const ID_COLUMN: &'static str = "recovery_id";
    const COLUMNS: &'static [&'static str] = &["recovery_date", "duration", "type", "helpers"];
    const ORDER_BY: &'static str = "\"recovery_date\" DESC";

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.recovery_date.into(),
            self.duration.into(),
            self.kind.as_str().into(),
            self.helpers.as_str().into(),
        ]
    }

    fn filter_column(filter: &RecoveryFilter) -> (&'static str, PgBindValue) {
        match filter {
            RecoveryFilter::Date(date) => ("recovery_date", (*date).into()),
            RecoveryFilter::Type(kind) => ("type", kind.as_str().into()),
        }
    }
}

impl Table for Equipment {
    const TABLE: &'static str = "equipment";
    const ID_COLUMN: &'static str = "equipment_id";
    const COLUMNS: &'static [&'static str] = &["name", "description", "category", "target"];
    const ORDER_BY: &'static str = "\"name\" COLLATE \"C\" ASC";

    fn values(&self) -> Vec<PgBindValue> {
        vec![
            self.name.as_str().into(),
            self.description.as_str().into(),
            self.category.as_str().into(),
            self.target.as_str().into(),
        ]
    }

    fn filter_column(filter: &EquipmentFilter) -> (&'static str, PgBindValue) {
        match filter {
            EquipmentFilter::Category(category) => ("category", category.as_str().into()),
            EquipmentFilter::Name(name) => ("name", name.as_str().into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn assert_layout<T: Table>(sample: &T) {
        assert_eq!(T::COLUMNS.len(), sample.values().len(), "{} column/value mismatch", T::TABLE);
        assert!(!T::COLUMNS.contains(&T::ID_COLUMN));
    }

    #[test]
    fn every_table_yields_one_value_per_column() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_layout(&Workout::new(date, NaiveTime::from_hms_opt(8, 0, 0).unwrap(), 30, "Run", 250.0, 6, None));
        assert_layout(&MuscleGroup::new("Legs", "", 2, 4, 8, 185.0));
        assert_layout(&Nutrition::new(Default::default(), 0.0, 1.0, 1.0, 1.0, 0.0, date));
        assert_layout(&Recovery::new(date, 30, "Stretching", ""));
        assert_layout(&Equipment::new("Rower", "", "Cardio", "back"));
    }

    #[test]
    fn unassigned_muscle_group_binds_null() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut w = Workout::new(date, NaiveTime::from_hms_opt(8, 0, 0).unwrap(), 30, "Run", 250.0, 6, None);
        assert_eq!(w.values().last(), Some(&PgBindValue::NullInt));
        w.muscle_group_id = Some(3);
        assert_eq!(w.values().last(), Some(&PgBindValue::Int(3)));
    }
}
