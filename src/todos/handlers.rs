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
    state::AppState,
    todos::{
        dto::{TodoList, TodoPayload},
        repo::Todo,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
}

#[instrument(skip(state))]
pub async fn list_todos(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<TodoList>> {
    let todos = Todo::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch todos"))?;
    Ok(Json(TodoList { todos }))
}

#[instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<TodoPayload>,
) -> ApiResult<Json<Todo>> {
    let fields = payload.validate()?;
    let todo = Todo::insert(&state.db, user_id, &fields.task)
        .await
        .map_err(ApiError::internal("Failed to create todo"))?;
    Ok(Json(todo))
}

#[instrument(skip(state, payload))]
pub async fn update_todo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> ApiResult<Json<StatusResponse>> {
    let fields = payload.validate()?;
    let affected = Todo::update(&state.db, user_id, id, &fields.task, fields.completed)
        .await
        .map_err(ApiError::internal("Failed to update todo"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Todo not found".into()));
    }
    Ok(Json(StatusResponse::ok("Todo updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusResponse>> {
    let affected = Todo::delete(&state.db, user_id, id)
        .await
        .map_err(ApiError::internal("Failed to delete todo"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Todo not found".into()));
    }
    Ok(Json(StatusResponse::ok("Todo deleted successfully")))
}
