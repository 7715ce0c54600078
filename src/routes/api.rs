// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity CRUD routes.
//!
//! Extractor rejections are converted to `AppError` so malformed ids and
//! bodies get the same JSON error body as every other failure.

use crate::error::Result;
use crate::models::{Activity, ActivityPatch};
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/activities", get(list_activities).post(create_activity))
        .route(
            "/api/activities/{id}",
            get(get_activity)
                .put(edit_activity)
                .delete(delete_activity),
        )
}

/// List all activities, oldest first.
async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    tracing::debug!("Fetching activities");
    Ok(Json(state.activities.list().await?))
}

/// Get one activity by id.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Activity>> {
    let Path(id) = id?;
    tracing::debug!(activity_id = %id, "Fetching activity");
    Ok(Json(state.activities.details(id).await?))
}

/// Create an activity with a caller-assigned id.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    activity: std::result::Result<Json<Activity>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(activity) = activity?;
    state.activities.create(activity).await?;
    Ok(StatusCode::CREATED)
}

/// Edit an activity. Fields missing from the body keep their stored value.
async fn edit_activity(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
    patch: std::result::Result<Json<ActivityPatch>, JsonRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    let Json(patch) = patch?;
    state.activities.edit(id, patch).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_activity(
    State(state): State<Arc<AppState>>,
    id: std::result::Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;
    state.activities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
