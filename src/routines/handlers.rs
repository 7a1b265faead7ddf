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
    routines::{
        dto::{RoutineList, RoutinePayload},
        repo::Routine,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/routines", get(list_routines).post(create_routine))
        .route("/routines/:id", put(update_routine).delete(delete_routine))
}

#[instrument(skip(state))]
pub async fn list_routines(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<RoutineList>> {
    let routines = Routine::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch routines"))?;
    Ok(Json(RoutineList { routines }))
}

#[instrument(skip(state, payload))]
pub async fn create_routine(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<RoutinePayload>,
) -> ApiResult<Json<Routine>> {
    let fields = payload.validate()?;
    let routine = Routine::insert(&state.db, user_id, &fields.task, fields.time.as_deref())
        .await
        .map_err(ApiError::internal("Failed to create routine"))?;
    Ok(Json(routine))
}

#[instrument(skip(state, payload))]
pub async fn update_routine(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<RoutinePayload>,
) -> ApiResult<Json<StatusResponse>> {
    let fields = payload.validate()?;
    let affected = Routine::update(
        &state.db,
        user_id,
        id,
        &fields.task,
        fields.completed,
        fields.time.as_deref(),
    )
    .await
    .map_err(ApiError::internal("Failed to update routine"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Routine not found".into()));
    }
    Ok(Json(StatusResponse::ok("Routine updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_routine(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusResponse>> {
    let affected = Routine::delete(&state.db, user_id, id)
        .await
        .map_err(ApiError::internal("Failed to delete routine"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Routine not found".into()));
    }
    Ok(Json(StatusResponse::ok("Routine deleted successfully")))
}
