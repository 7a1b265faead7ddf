use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    dto::StatusResponse,
    error::{ApiError, ApiResult},
    meals::{
        dto::{group_weekly, MealPlanResponse, MealPlanUpdate},
        repo,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/meals", get(get_meal_plan).put(put_meal_plan))
}

#[instrument(skip(state))]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<MealPlanResponse>> {
    let rows = repo::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch meals"))?;
    Ok(Json(MealPlanResponse {
        weekly_meals: group_weekly(rows),
    }))
}

#[instrument(skip(state, payload))]
pub async fn put_meal_plan(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<MealPlanUpdate>,
) -> ApiResult<Json<StatusResponse>> {
    let cells = payload.validate()?;
    for cell in &cells {
        repo::upsert(&state.db, user_id, &cell.day, &cell.meal_type, &cell.meal)
            .await
            .map_err(ApiError::internal("Failed to update meal"))?;
    }
    Ok(Json(StatusResponse::ok("Meal plan updated successfully")))
}
