use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use fitness_tracker::{app, AppState, MemoryStore, RecordManager, Settings};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> Router {
    let manager = RecordManager::new(Arc::new(MemoryStore::new()));
    app(AppState::new(manager), &Settings::default())
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_healthy() {
    let r = router();
    let (status, body) = send(&r, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));

    let (status, body) = send(&r, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn workout_lifecycle_over_http() {
    let r = router();
    let workout = json!({
        "workout_id": 0,
        "workout_date": "2026-02-28",
        "workout_time": "18:15:00",
        "duration": 50,
        "type_description": "Intervals",
        "calories_burned": 520.5,
        "rate_perceived_exhaustion": 9,
        "muscle_group_id": 0
    });
    let (status, body) = send(&r, "POST", "/api/workouts", Some(workout.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Workout saved");
    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);

    let (status, fetched) = send(&r, "GET", &format!("/api/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = workout;
    expected["workout_id"] = json!(id);
    assert_eq!(fetched, expected);

    let (status, high) = send(&r, "GET", "/api/workouts/high-intensity", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(high.as_array().unwrap().len(), 1);

    let (status, body) = send(&r, "DELETE", &format!("/api/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Workout deleted");

    let (status, body) = send(&r, "GET", &format!("/api/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Workout not found"}));

    let (status, _) = send(&r, "DELETE", &format!("/api/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_equipment_name_is_a_server_error() {
    let r = router();
    let rower = json!({"name": "Rower", "description": "", "category": "Cardio", "target": "back"});
    let (status, _) = send(&r, "POST", "/api/equipment", Some(rower.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&r, "POST", "/api/equipment", Some(rower)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Rower"));
}

#[tokio::test]
async fn filtered_listing_and_reports() {
    let r = router();
    for (day, kind, minutes) in [("2026-03-01", "Sauna", 20), ("2026-03-02", "Massage", 75), ("2026-03-02", "Sauna", 15)] {
        let body = json!({"recovery_date": day, "duration": minutes, "type": kind, "helpers": ""});
        let (status, _) = send(&r, "POST", "/api/recovery", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, saunas) = send(&r, "GET", "/api/recovery?type=Sauna", None).await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<&str> = saunas
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["recovery_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-03-02", "2026-03-01"]);

    let (status, total) = send(&r, "GET", "/api/recovery/total-time?start=2026-03-01&end=2026-03-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(total["total_minutes"], 20);

    let (status, long) = send(&r, "GET", "/api/recovery/long", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(long[0]["type"], "Massage");

    let (status, body) = send(&r, "GET", "/api/recovery?date=03/02/2026", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn nutrition_carries_total_calories_and_daily_totals() {
    let r = router();
    let meal = json!({"family": "meat", "carbs": 10.0, "fat": 10.0, "protein": 40.0, "meal_date": "2026-03-01"});
    let (status, body) = send(&r, "POST", "/api/nutrition", Some(meal)).await;
    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().unwrap();

    let (_, fetched) = send(&r, "GET", &format!("/api/nutrition/{}", id), None).await;
    assert_eq!(fetched["family"], "Meat");
    assert_eq!(fetched["total_calories"], 290.0);

    let (status, daily) = send(&r, "GET", "/api/nutrition/daily?date=2026-03-01", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(daily, json!({"date": "2026-03-01", "total_calories": 290.0, "total_protein": 40.0}));
}

#[tokio::test]
async fn malformed_body_gets_error_payload() {
    let r = router();
    let request = Request::builder()
        .method("POST")
        .uri("/api/workouts")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = r.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());

    let (status, body) = send(&r, "POST", "/api/workouts", Some(json!({"duration": 30}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn zero_muscle_group_filter_lists_unassigned_workouts() {
    let r = router();
    for group in [0, 3] {
        let body = json!({
            "workout_date": "2026-01-10",
            "workout_time": "07:00:00",
            "duration": 30,
            "calories_burned": 200.0,
            "rate_perceived_exhaustion": 5,
            "muscle_group_id": group
        });
        let (status, _) = send(&r, "POST", "/api/workouts", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, unassigned) = send(&r, "GET", "/api/workouts?muscle_group_id=0", None).await;
    assert_eq!(status, StatusCode::OK);
    let unassigned = unassigned.as_array().unwrap();
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0]["muscle_group_id"], 0);

    let (_, grouped) = send(&r, "GET", "/api/workouts?muscle_group_id=3", None).await;
    assert_eq!(grouped.as_array().unwrap().len(), 1);
}
