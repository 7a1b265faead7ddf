use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    dto::StatusResponse,
    error::{ApiError, ApiResult},
    notes::{
        dto::{NoteList, NotePayload},
        repo::Note,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/:id", put(update_note).delete(delete_note))
}

#[instrument(skip(state))]
pub async fn list_notes(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<NoteList>> {
    let notes = Note::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch notes"))?;
    Ok(Json(NoteList { notes }))
}

#[instrument(skip(state, payload))]
pub async fn create_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Json<Note>> {
    let content = payload.validate()?;
    let note = Note::insert(&state.db, user_id, &content)
        .await
        .map_err(ApiError::internal("Failed to create note"))?;
    Ok(Json(note))
}

#[instrument(skip(state, payload))]
pub async fn update_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Json<StatusResponse>> {
    let content = payload.validate()?;
    let affected = Note::update(&state.db, user_id, id, &content)
        .await
        .map_err(ApiError::internal("Failed to update note"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Note not found".into()));
    }
    Ok(Json(StatusResponse::ok("Note updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_note(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusResponse>> {
    let affected = Note::delete(&state.db, user_id, id)
        .await
        .map_err(ApiError::internal("Failed to delete note"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Note not found".into()));
    }
    Ok(Json(StatusResponse::ok("Note deleted successfully")))
}
