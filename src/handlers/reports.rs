//! Report endpoints over the manager's aggregates.

use super::required_date;
use crate::error::AppError;
use crate::model::{Equipment, Recovery, Workout};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
pub struct CaloriesBurned {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_calories_burned: f64,
}

#[derive(Serialize)]
pub struct RecoveryTime {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_minutes: i64,
}

#[derive(Serialize)]
pub struct DailyNutrition {
    pub date: NaiveDate,
    pub total_calories: f64,
    pub total_protein: f64,
}

pub async fn high_intensity_workouts(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, AppError> {
    Ok(Json(state.manager.high_intensity_workouts().await?))
}

pub async fn calories_burned(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<CaloriesBurned>, AppError> {
    let start = required_date(&params, "start")?;
    let end = required_date(&params, "end")?;
    let total_calories_burned = state.manager.total_calories_burned(start, end).await?;
    Ok(Json(CaloriesBurned {
        start,
        end,
        total_calories_burned,
    }))
}

pub async fn long_recovery_sessions(State(state): State<AppState>) -> Result<Json<Vec<Recovery>>, AppError> {
    Ok(Json(state.manager.long_recovery_sessions().await?))
}

pub async fn recovery_time(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<RecoveryTime>, AppError> {
    let start = required_date(&params, "start")?;
    let end = required_date(&params, "end")?;
    let total_minutes = state.manager.total_recovery_time(start, end).await?;
    Ok(Json(RecoveryTime {
        start,
        end,
        total_minutes,
    }))
}

pub async fn daily_nutrition(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<DailyNutrition>, AppError> {
    let date = required_date(&params, "date")?;
    let total_calories = state.manager.total_calories_for_date(date).await?;
    let total_protein = state.manager.total_protein_for_date(date).await?;
    Ok(Json(DailyNutrition {
        date,
        total_calories,
        total_protein,
    }))
}

pub async fn cardio_equipment(State(state): State<AppState>) -> Result<Json<Vec<Equipment>>, AppError> {
    Ok(Json(state.manager.cardio_equipment().await?))
}
