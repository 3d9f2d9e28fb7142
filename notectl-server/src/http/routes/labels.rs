//! Label endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::db::repos::{LabelPatch, LabelRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateLabelRequest, DeletedResponse, LabelResponse, UpdateLabelRequest};

/// POST /labels/ - create a label owned by an existing user
async fn create_label(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateLabelRequest>,
) -> Result<(StatusCode, Json<LabelResponse>), ApiError> {
    let label = LabelRepo::new(&state.pool)
        .create(&req.name, req.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(LabelResponse::from(label))))
}

/// GET /labels/ - list all labels
async fn list_labels(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LabelResponse>>, ApiError> {
    let labels = LabelRepo::new(&state.pool).list().await?;
    Ok(Json(labels.into_iter().map(LabelResponse::from).collect()))
}

/// PUT /labels/{id} - partial update
async fn update_label(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateLabelRequest>,
) -> Result<Json<LabelResponse>, ApiError> {
    let patch = LabelPatch { name: req.name };
    let label = LabelRepo::new(&state.pool).update(id, patch).await?;
    Ok(Json(LabelResponse::from(label)))
}

/// DELETE /labels/{id} - delete a label
async fn delete_label(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    LabelRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse::new("Label")))
}

/// Label routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/labels/", get(list_labels).post(create_label))
        .route("/labels/{id}", put(update_label).delete(delete_label))
}
