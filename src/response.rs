//! Write acknowledgement envelope.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub id: i32,
}

/// `{"success":true,"message":"Workout saved","id":3}`
pub fn saved(kind: &str, id: i32) -> Json<SaveResponse> {
    Json(SaveResponse {
        success: true,
        message: format!("{} saved", kind),
        id,
    })
}

pub fn deleted(kind: &str, id: i32) -> Json<SaveResponse> {
    Json(SaveResponse {
        success: true,
        message: format!("{} deleted", kind),
        id,
    })
}
