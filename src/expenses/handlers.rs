use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    budget,
    dto::StatusResponse,
    error::{ApiError, ApiResult},
    expenses::{
        dto::{ExpenseList, ExpensePayload},
        repo::Expense,
    },
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", put(update_expense).delete(delete_expense))
}

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ExpenseList>> {
    let expenses = Expense::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch expenses"))?;
    let current_spent: Decimal = expenses.iter().map(|e| e.amount).sum();
    let monthly_budget = budget::repo::effective_budget(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch expenses"))?;
    Ok(Json(ExpenseList {
        expenses,
        current_spent,
        monthly_budget,
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<ExpensePayload>,
) -> ApiResult<Json<Expense>> {
    let fields = payload.validate()?;
    let date = fields
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let expense = Expense::insert(
        &state.db,
        user_id,
        &fields.description,
        fields.amount,
        date,
        &fields.category,
    )
    .await
    .map_err(ApiError::internal("Failed to create expense"))?;
    Ok(Json(expense))
}

#[instrument(skip(state, payload))]
pub async fn update_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<ExpensePayload>,
) -> ApiResult<Json<StatusResponse>> {
    let fields = payload.validate()?;
    let date = fields
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let affected = Expense::update(
        &state.db,
        user_id,
        id,
        &fields.description,
        fields.amount,
        date,
        &fields.category,
    )
    .await
    .map_err(ApiError::internal("Failed to update expense"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Expense not found".into()));
    }
    Ok(Json(StatusResponse::ok("Expense updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_expense(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusResponse>> {
    let affected = Expense::delete(&state.db, user_id, id)
        .await
        .map_err(ApiError::internal("Failed to delete expense"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Expense not found".into()));
    }
    Ok(Json(StatusResponse::ok("Expense deleted successfully")))
}
