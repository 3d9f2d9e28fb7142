//! User endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::db::repos::{UserPatch, UserRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateUserRequest, DeletedResponse, UpdateUserRequest, UserResponse};

/// POST /users/ - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = UserRepo::new(&state.pool)
        .create(&req.username, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users/ - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PUT /users/{id} - partial update
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let patch = UserPatch {
        username: req.username,
        email: req.email,
    };
    let user = UserRepo::new(&state.pool).update(id, patch).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /users/{id} - delete a user (cascades to notes and labels)
async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    UserRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse::new("User")))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
}
