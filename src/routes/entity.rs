//! Record routes under /api. Report paths are static segments, so they win over `/:id`.

use crate::gateway::{Gateway, Store};
use crate::handlers::{entity, reports, Resource};
use crate::model::{Equipment, MuscleGroup, Nutrition, Recovery, Workout};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `GET|POST /api/<PATH>` and `GET|DELETE /api/<PATH>/:id` for one record kind.
fn resource_routes<R: Resource>() -> Router<AppState>
where
    dyn Store: Gateway<R>,
{
    let collection = format!("/api/{}", R::PATH);
    let member = format!("{}/:id", collection);
    Router::new()
        .route(&collection, get(entity::list::<R>).post(entity::save::<R>))
        .route(&member, get(entity::read::<R>).delete(entity::delete::<R>))
}

pub fn entity_routes() -> Router<AppState> {
    Router::new()
        .merge(resource_routes::<Workout>())
        .merge(resource_routes::<MuscleGroup>())
        .merge(resource_routes::<Nutrition>())
        .merge(resource_routes::<Recovery>())
        .merge(resource_routes::<Equipment>())
        .route("/api/workouts/high-intensity", get(reports::high_intensity_workouts))
        .route("/api/workouts/calories", get(reports::calories_burned))
        .route("/api/recovery/long", get(reports::long_recovery_sessions))
        .route("/api/recovery/total-time", get(reports::recovery_time))
        .route("/api/nutrition/daily", get(reports::daily_nutrition))
        .route("/api/equipment/cardio", get(reports::cardio_equipment))
}
