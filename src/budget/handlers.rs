use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    budget::{
        dto::{BudgetPayload, BudgetResponse, BudgetUpdated},
        repo::{effective_budget, Budget},
    },
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/budget", get(get_budget).put(put_budget))
}

#[instrument(skip(state))]
pub async fn get_budget(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<BudgetResponse>> {
    let monthly_budget = effective_budget(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch budget"))?;
    Ok(Json(BudgetResponse { monthly_budget }))
}

#[instrument(skip(state, payload))]
pub async fn put_budget(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<BudgetPayload>,
) -> ApiResult<Json<BudgetUpdated>> {
    let monthly_budget = payload.validate()?;
    Budget::upsert(&state.db, user_id, monthly_budget)
        .await
        .map_err(ApiError::internal("Failed to update budget"))?;
    info!(%user_id, %monthly_budget, "budget updated");
    Ok(Json(BudgetUpdated {
        success: true,
        message: "Budget updated successfully".into(),
        monthly_budget,
    }))
}
