//! Aggregates computed by scanning full listings in memory.

use super::RecordManager;
use crate::error::AppError;
use crate::model::{Equipment, Nutrition, NutritionFilter, Recovery, Workout};
use chrono::NaiveDate;

fn within(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

impl RecordManager {
    /// Calories burned by workouts dated within `start..=end`.
    pub async fn total_calories_burned(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, AppError> {
        let workouts = self.list::<Workout>().await?;
        Ok(workouts
            .iter()
            .filter(|w| within(w.workout_date, start, end))
            .map(|w| w.calories_burned)
            .sum())
    }

    /// Recovery minutes within `start..=end`.
    pub async fn total_recovery_time(&self, start: NaiveDate, end: NaiveDate) -> Result<i64, AppError> {
        let sessions = self.list::<Recovery>().await?;
        Ok(sessions
            .iter()
            .filter(|r| within(r.recovery_date, start, end))
            .map(|r| i64::from(r.duration))
            .sum())
    }

    pub async fn total_calories_for_date(&self, date: NaiveDate) -> Result<f64, AppError> {
        let meals = self.find::<Nutrition>(&NutritionFilter::Date(date)).await?;
        Ok(meals.iter().map(Nutrition::total_calories).sum())
    }

    pub async fn total_protein_for_date(&self, date: NaiveDate) -> Result<f64, AppError> {
        let meals = self.find::<Nutrition>(&NutritionFilter::Date(date)).await?;
        Ok(meals.iter().map(|n| n.protein).sum())
    }

    pub async fn high_intensity_workouts(&self) -> Result<Vec<Workout>, AppError> {
        let mut workouts = self.list::<Workout>().await?;
        workouts.retain(Workout::is_high_intensity);
        Ok(workouts)
    }

    pub async fn long_recovery_sessions(&self) -> Result<Vec<Recovery>, AppError> {
        let mut sessions = self.list::<Recovery>().await?;
        sessions.retain(Recovery::is_long_recovery);
        Ok(sessions)
    }

    pub async fn cardio_equipment(&self) -> Result<Vec<Equipment>, AppError> {
        let mut equipment = self.list::<Equipment>().await?;
        equipment.retain(Equipment::is_cardio);
        Ok(equipment)
    }
}
