//! Payment endpoint

use axum::Json;
use axum::extract::State;
use rust_decimal::Decimal;

use crate::db;
use crate::error::AppError;
use crate::models::{RecordPaymentRequest, RecordPaymentResponse};
use crate::state::AppState;

use super::ApiResult;

/// POST /api/payments
pub async fn record_payment(
    State(state): State<AppState>,
    Json(req): Json<RecordPaymentRequest>,
) -> ApiResult<RecordPaymentResponse> {
    if req.amount < Decimal::ZERO {
        return Err(AppError::validation("amount must be non-negative"));
    }

    let payment_id =
        db::payments::record_payment(&state.pool, req.booking_id, req.amount, req.mode).await?;
    Ok(Json(RecordPaymentResponse { payment_id }))
}
