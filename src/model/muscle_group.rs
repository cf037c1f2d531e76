//! A trained muscle group and its weekly programme.

use super::{Entity, RecordFilter, UNSAVED_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MuscleGroup {
    #[serde(default)]
    pub muscle_group_id: i32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub days_per_week: i32,
    pub sets: i32,
    pub reps: i32,
    /// Pounds.
    pub weight_amount: f64,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(skip, default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl MuscleGroup {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        days_per_week: i32,
        sets: i32,
        reps: i32,
        weight_amount: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            muscle_group_id: UNSAVED_ID,
            name: name.into(),
            description: description.into(),
            days_per_week,
            sets,
            reps,
            weight_amount,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "MuscleGroup[ID={}, Name={}, Days/Week={}, Sets={}, Reps={}, Weight={}]",
            self.muscle_group_id, self.name, self.days_per_week, self.sets, self.reps, self.weight_amount
        )
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Muscle Group Information ===")?;
        writeln!(f, "ID: {}", self.muscle_group_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Days per Week: {}", self.days_per_week)?;
        writeln!(f, "Sets: {}", self.sets)?;
        writeln!(f, "Reps: {}", self.reps)?;
        write!(f, "Weight: {} lbs", self.weight_amount)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MuscleGroupFilter {
    Name(String),
}

impl RecordFilter<MuscleGroup> for MuscleGroupFilter {
    fn matches(&self, record: &MuscleGroup) -> bool {
        match self {
            MuscleGroupFilter::Name(name) => record.name == *name,
        }
    }
}

impl Entity for MuscleGroup {
    const KIND: &'static str = "MuscleGroup";
    type Filter = MuscleGroupFilter;

    fn id(&self) -> i32 {
        self.muscle_group_id
    }

    fn set_id(&mut self, id: i32) {
        self.muscle_group_id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        a.name
            .cmp(&b.name)
            .then_with(|| a.muscle_group_id.cmp(&b.muscle_group_id))
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_and_description() {
        let mg = MuscleGroup::new("Chest", "Pecs and front delts", 2, 4, 10, 135.0);
        assert_eq!(
            mg.summary(),
            "MuscleGroup[ID=0, Name=Chest, Days/Week=2, Sets=4, Reps=10, Weight=135]"
        );
        let text = mg.to_string();
        assert!(text.starts_with("=== Muscle Group Information ==="));
        assert!(text.ends_with("Weight: 135 lbs"));
    }

    #[test]
    fn name_is_the_unique_key() {
        let mg = MuscleGroup::new("Back", "", 2, 3, 8, 155.0);
        assert_eq!(mg.unique_key(), Some("Back"));
        assert!(MuscleGroupFilter::Name("Back".into()).matches(&mg));
        assert!(!MuscleGroupFilter::Name("back".into()).matches(&mg));
    }
}
