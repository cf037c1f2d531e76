//! A single training session.

use super::{Entity, RecordFilter, UNSAVED_ID};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// RPE at or above which a session counts as high intensity.
pub const HIGH_INTENSITY_RPE: i32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    #[serde(default)]
    pub workout_id: i32,
    pub workout_date: NaiveDate,
    pub workout_time: NaiveTime,
    /// Minutes.
    pub duration: i32,
    #[serde(default)]
    pub type_description: String,
    pub calories_burned: f64,
    /// Rate of perceived exhaustion, nominally 1-10.
    pub rate_perceived_exhaustion: i32,
    #[serde(default, with = "super::optional_id")]
    pub muscle_group_id: Option<i32>,
    #[serde(skip, default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(skip, default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    pub fn new(
        workout_date: NaiveDate,
        workout_time: NaiveTime,
        duration: i32,
        type_description: impl Into<String>,
        calories_burned: f64,
        rate_perceived_exhaustion: i32,
        muscle_group_id: Option<i32>,
    ) -> Self {
        let now = Utc::now();
        Self {
            workout_id: UNSAVED_ID,
            workout_date,
            workout_time,
            duration,
            type_description: type_description.into(),
            calories_burned,
            rate_perceived_exhaustion,
            muscle_group_id: muscle_group_id.filter(|id| *id > 0),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_high_intensity(&self) -> bool {
        self.rate_perceived_exhaustion >= HIGH_INTENSITY_RPE
    }

    pub fn summary(&self) -> String {
        format!(
            "Workout[ID={}, Date={}, Duration={}min, Type={}, Calories={}, RPE={}]",
            self.workout_id,
            self.workout_date,
            self.duration,
            self.type_description,
            self.calories_burned,
            self.rate_perceived_exhaustion
        )
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Workout Information ===")?;
        writeln!(f, "ID: {}", self.workout_id)?;
        writeln!(f, "Date: {}", self.workout_date)?;
        writeln!(f, "Time: {}", self.workout_time)?;
        writeln!(f, "Duration: {} minutes", self.duration)?;
        writeln!(f, "Type: {}", self.type_description)?;
        writeln!(f, "Calories Burned: {}", self.calories_burned)?;
        writeln!(f, "RPE: {}/10", self.rate_perceived_exhaustion)?;
        write!(f, "Muscle Group ID: {}", self.muscle_group_id.unwrap_or(0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutFilter {
    Date(NaiveDate),
    MuscleGroup(i32),
    /// Workouts with no muscle group reference.
    Unassigned,
}

impl RecordFilter<Workout> for WorkoutFilter {
    fn matches(&self, record: &Workout) -> bool {
        match self {
            WorkoutFilter::Date(date) => record.workout_date == *date,
            WorkoutFilter::MuscleGroup(id) => record.muscle_group_id == Some(*id),
            WorkoutFilter::Unassigned => record.muscle_group_id.is_none(),
        }
    }
}

impl Entity for Workout {
    const KIND: &'static str = "Workout";
    type Filter = WorkoutFilter;

    fn id(&self) -> i32 {
        self.workout_id
    }

    fn set_id(&mut self, id: i32) {
        self.workout_id = id;
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    fn normalize(&mut self) {
        self.muscle_group_id = self.muscle_group_id.filter(|id| *id > 0);
    }

    fn listing_order(a: &Self, b: &Self) -> Ordering {
        b.workout_date
            .cmp(&a.workout_date)
            .then_with(|| b.workout_time.cmp(&a.workout_time))
            .then_with(|| a.workout_id.cmp(&b.workout_id))
    }
}
