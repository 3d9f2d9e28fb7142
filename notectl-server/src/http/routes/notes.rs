//! Note endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

use crate::db::repos::{NotePatch, NoteRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{CreateNoteRequest, DeletedResponse, NoteResponse, UpdateNoteRequest};

/// POST /notes/ - create a note owned by an existing user
async fn create_note(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<NoteResponse>), ApiError> {
    let note = NoteRepo::new(&state.pool)
        .create(&req.title, &req.content, req.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(NoteResponse::from(note))))
}

/// GET /notes/ - list all notes
async fn list_notes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = NoteRepo::new(&state.pool).list().await?;
    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// PUT /notes/{id} - partial update
async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let patch = NotePatch {
        title: req.title,
        content: req.content,
    };
    let note = NoteRepo::new(&state.pool).update(id, patch).await?;
    Ok(Json(NoteResponse::from(note)))
}

/// DELETE /notes/{id} - delete a note
async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    NoteRepo::new(&state.pool).delete(id).await?;
    Ok(Json(DeletedResponse::new("Note")))
}

/// Note routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/notes/", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
}
