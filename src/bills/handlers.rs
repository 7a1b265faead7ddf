use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    bills::{
        dto::{BillList, BillPayload},
        repo::SplitBill,
    },
    dto::StatusResponse,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bills", get(list_bills).post(create_bill))
        .route("/bills/:id", axum::routing::delete(delete_bill))
}

#[instrument(skip(state))]
pub async fn list_bills(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<BillList>> {
    let bills = SplitBill::list_by_user(&state.db, user_id)
        .await
        .map_err(ApiError::internal("Failed to fetch bills"))?;
    Ok(Json(BillList { bills }))
}

#[instrument(skip(state, payload))]
pub async fn create_bill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<BillPayload>,
) -> ApiResult<Json<SplitBill>> {
    let fields = payload.validate()?;
    let date = fields
        .date
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());
    let bill = SplitBill::insert(
        &state.db,
        user_id,
        &fields.description,
        fields.total_amount,
        fields.split_between,
        date,
        &fields.friends,
    )
    .await
    .map_err(ApiError::internal("Failed to create bill"))?;
    Ok(Json(bill))
}

#[instrument(skip(state))]
pub async fn delete_bill(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusResponse>> {
    let affected = SplitBill::delete(&state.db, user_id, id)
        .await
        .map_err(ApiError::internal("Failed to delete bill"))?;
    if affected == 0 {
        return Err(ApiError::NotFound("Bill not found".into()));
    }
    Ok(Json(StatusResponse::ok("Bill deleted successfully")))
}
