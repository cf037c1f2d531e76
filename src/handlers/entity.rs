//! Record handlers: list (optionally filtered), read, save, delete.

use super::{optional_param, parse_param};
use crate::error::AppError;
use crate::gateway::{Gateway, Store};
use crate::model::{
    Entity, Equipment, EquipmentFilter, FoodFamily, MuscleGroup, MuscleGroupFilter, Nutrition, NutritionFilter,
    Recovery, RecoveryFilter, Workout, WorkoutFilter,
};
use crate::response::{deleted, saved};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A record kind served under `/api/<PATH>`.
pub trait Resource: Entity + Serialize + DeserializeOwned {
    const PATH: &'static str;

    /// JSON shape returned to clients.
    type View: Serialize + From<Self>;

    /// The first recognised filter in `params`, or `None` to list everything.
    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<Self::Filter>, AppError>;
}

impl Resource for Workout {
    const PATH: &'static str = "workouts";
    type View = Self;

    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<WorkoutFilter>, AppError> {
        if let Some(date) = optional_param(params, "date")? {
            return Ok(Some(WorkoutFilter::Date(date)));
        }
        Ok(optional_param::<i32>(params, "muscle_group_id")?.map(|id| match id {
            id if id > 0 => WorkoutFilter::MuscleGroup(id),
            _ => WorkoutFilter::Unassigned,
        }))
    }
}

impl Resource for MuscleGroup {
    const PATH: &'static str = "musclegroups";
    type View = Self;

    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<MuscleGroupFilter>, AppError> {
        Ok(params.get("name").cloned().map(MuscleGroupFilter::Name))
    }
}

/// Nutrition with its derived energy total.
#[derive(Serialize)]
pub struct NutritionView {
    #[serde(flatten)]
    pub record: Nutrition,
    pub total_calories: f64,
}

impl From<Nutrition> for NutritionView {
    fn from(record: Nutrition) -> Self {
        let total_calories = record.total_calories();
        Self { record, total_calories }
    }
}

impl Resource for Nutrition {
    const PATH: &'static str = "nutrition";
    type View = NutritionView;

    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<NutritionFilter>, AppError> {
        if let Some(date) = optional_param(params, "date")? {
            return Ok(Some(NutritionFilter::Date(date)));
        }
        Ok(params
            .get("family")
            .map(|f| NutritionFilter::Family(FoodFamily::from(f.as_str()))))
    }
}

impl Resource for Recovery {
    const PATH: &'static str = "recovery";
    type View = Self;

    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<RecoveryFilter>, AppError> {
        if let Some(date) = optional_param(params, "date")? {
            return Ok(Some(RecoveryFilter::Date(date)));
        }
        Ok(params.get("type").cloned().map(RecoveryFilter::Type))
    }
}

impl Resource for Equipment {
    const PATH: &'static str = "equipment";
    type View = Self;

    fn filter_from_query(params: &HashMap<String, String>) -> Result<Option<EquipmentFilter>, AppError> {
        if let Some(category) = params.get("category") {
            return Ok(Some(EquipmentFilter::Category(category.clone())));
        }
        Ok(params.get("name").cloned().map(EquipmentFilter::Name))
    }
}

fn views<R: Resource>(rows: Vec<R>) -> Vec<R::View> {
    rows.into_iter().map(R::View::from).collect()
}

pub async fn list<R: Resource>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError>
where
    dyn Store: Gateway<R>,
{
    let rows = match R::filter_from_query(&params)? {
        Some(filter) => state.manager.find::<R>(&filter).await?,
        None => state.manager.list::<R>().await?,
    };
    Ok(Json(views(rows)))
}

pub async fn read<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    dyn Store: Gateway<R>,
{
    let id: i32 = parse_param("id", &id_str)?;
    let record = state
        .manager
        .get::<R>(id)
        .await?
        .ok_or_else(|| AppError::not_found(R::KIND))?;
    Ok(Json(R::View::from(record)))
}

/// Create when the body's identity is 0 or absent, otherwise update that record.
pub async fn save<R: Resource>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError>
where
    dyn Store: Gateway<R>,
{
    let Json(body) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let mut record: R = serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    state.manager.save(&mut record).await?;
    Ok(saved(R::KIND, record.id()))
}

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    dyn Store: Gateway<R>,
{
    let id: i32 = parse_param("id", &id_str)?;
    if !state.manager.delete::<R>(id).await? {
        return Err(AppError::not_found(R::KIND));
    }
    Ok(deleted(R::KIND, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_recognised_filter_wins() {
        let f = Workout::filter_from_query(&params(&[("date", "2026-01-15"), ("muscle_group_id", "2")])).unwrap();
        assert!(matches!(f, Some(WorkoutFilter::Date(d)) if d == NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
        let f = Workout::filter_from_query(&params(&[("muscle_group_id", "2")])).unwrap();
        assert!(matches!(f, Some(WorkoutFilter::MuscleGroup(2))));
        assert!(Workout::filter_from_query(&params(&[("limit", "5")])).unwrap().is_none());
        let f = Workout::filter_from_query(&params(&[("muscle_group_id", "0")])).unwrap();
        assert!(matches!(f, Some(WorkoutFilter::Unassigned)));
    }

    #[test]
    fn unparsable_filter_is_bad_request() {
        let err = Recovery::filter_from_query(&params(&[("date", "yesterday")])).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn nutrition_view_carries_total_calories() {
        let n = Nutrition::new(FoodFamily::Fruit, 0.0, 10.0, 1.0, 2.0, 5.0, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        let json = serde_json::to_value(NutritionView::from(n)).unwrap();
        assert_eq!(json["total_calories"], 57.0);
        assert_eq!(json["family"], "Fruit");
        assert!(json.get("created_at").is_none());
    }
}
