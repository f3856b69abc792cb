//! Dive HTTP Routes
//!
//! CRUD endpoints over the dive store plus the aggregate statistics
//! endpoint. Required-field validation runs against the raw JSON payload
//! before anything touches storage, so a 400 always names the first
//! missing field and never leaves a partial write behind.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use crate::storage::{Dive, DiveInput, DiveStore};

/// Fields that must be present and non-null on create and update,
/// checked in this order
const REQUIRED_FIELDS: [&str; 6] = [
    "dive_number",
    "date",
    "location",
    "dive_site",
    "latitude",
    "longitude",
];

// ==================
// Shared State
// ==================

/// Dive state shared across handlers
pub struct DiveState {
    pub store: DiveStore,
}

impl DiveState {
    pub fn new(store: DiveStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct CreateDiveResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_dives: usize,
    pub total_dive_time: i64,
    pub max_depth: f64,
    pub locations: usize,
}

// ==================
// Dive Routes
// ==================

/// Create dive routes, nested under `/api` by the server
pub fn dive_routes(state: Arc<DiveState>) -> Router {
    Router::new()
        .route("/dives", get(list_dives_handler).post(create_dive_handler))
        .route(
            "/dives/{id}",
            get(get_dive_handler)
                .put(update_dive_handler)
                .delete(delete_dive_handler),
        )
        .route("/stats", get(get_stats_handler))
        .with_state(state)
}

// ==================
// Validation
// ==================

/// Check the required-field set against the raw payload, then
/// deserialize into the typed input
fn parse_dive_input(payload: &Value) -> ApiResult<DiveInput> {
    for field in REQUIRED_FIELDS {
        match payload.get(field) {
            None | Some(Value::Null) => {
                return Err(ApiError::MissingField(field.to_string()));
            }
            Some(_) => {}
        }
    }

    serde_json::from_value(payload.clone()).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_dives_handler(State(state): State<Arc<DiveState>>) -> ApiResult<Json<Vec<Dive>>> {
    let dives = state.store.list_all()?;
    Ok(Json(dives))
}

async fn get_dive_handler(
    State(state): State<Arc<DiveState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Dive>> {
    let dive = state.store.get_by_id(id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(dive))
}

async fn create_dive_handler(
    State(state): State<Arc<DiveState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<CreateDiveResponse>)> {
    let input = parse_dive_input(&payload)?;
    let id = state.store.create(&input)?;

    tracing::info!(id, dive_number = input.dive_number, "dive created");
    Ok((
        StatusCode::CREATED,
        Json(CreateDiveResponse {
            id,
            message: "Dive created successfully".to_string(),
        }),
    ))
}

async fn update_dive_handler(
    State(state): State<Arc<DiveState>>,
    Path(id): Path<i64>,
    Json(payload): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let input = parse_dive_input(&payload)?;
    if !state.store.update(id, &input)? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "dive updated");
    Ok(Json(MessageResponse {
        message: "Dive updated successfully".to_string(),
    }))
}

async fn delete_dive_handler(
    State(state): State<Arc<DiveState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    if !state.store.delete(id)? {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id, "dive deleted");
    Ok(Json(MessageResponse {
        message: "Dive deleted successfully".to_string(),
    }))
}

/// Aggregates over the full dataset. Null durations and depths count as
/// zero here even though normal reads return them as null; the original
/// service behaves this way and clients rely on it.
async fn get_stats_handler(
    State(state): State<Arc<DiveState>>,
) -> ApiResult<Json<StatsResponse>> {
    let dives = state.store.list_all()?;

    let total_dive_time = dives.iter().map(|d| d.duration.unwrap_or(0)).sum();
    let max_depth = dives
        .iter()
        .map(|d| d.max_depth.unwrap_or(0.0))
        .fold(0.0_f64, f64::max);
    let locations = dives
        .iter()
        .map(|d| d.location.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(Json(StatsResponse {
        total_dives: dives.len(),
        total_dive_time,
        max_depth,
        locations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "dive_number": 11,
            "date": "2024-08-01",
            "location": "Azores",
            "dive_site": "Princess Alice Bank",
            "latitude": 37.8,
            "longitude": -29.0
        })
    }

    #[test]
    fn test_parse_accepts_minimal_payload() {
        let input = parse_dive_input(&full_payload()).unwrap();
        assert_eq!(input.location, "Azores");
        assert!(input.duration.is_none());
    }

    #[test]
    fn test_parse_reports_first_missing_field() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("date");
        payload.as_object_mut().unwrap().remove("latitude");

        let err = parse_dive_input(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: date");
    }

    #[test]
    fn test_parse_rejects_explicit_null() {
        let mut payload = full_payload();
        payload["latitude"] = Value::Null;

        let err = parse_dive_input(&payload).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: latitude");
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        let mut payload = full_payload();
        payload["latitude"] = json!("not a number");

        let err = parse_dive_input(&payload).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
