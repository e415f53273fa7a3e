//! Booking endpoints: create, detail, checkout

use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};

use crate::db;
use crate::error::AppError;
use crate::models::{BookingDetail, BookingOutcome, CreateBookingRequest};
use crate::state::AppState;

use super::ApiResult;

/// POST /api/bookings
///
/// Validates the request shape, then runs the whole reservation as one
/// database transaction (customer resolution included).
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> ApiResult<BookingOutcome> {
    if req.checkin_date >= req.checkout_date {
        return Err(AppError::invalid_range());
    }
    if req.customer.email.trim().is_empty() || req.customer.national_id.trim().is_empty() {
        return Err(AppError::validation("email and national_id are required"));
    }

    let outcome = db::bookings::create_booking(&state.pool, &req).await?;
    Ok(Json(outcome))
}

/// GET /api/bookings/:booking_id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> ApiResult<BookingDetail> {
    let detail = db::bookings::get_detail(&state.pool, booking_id).await?;
    Ok(Json(detail))
}

/// POST /api/bookings/:booking_id/checkout
pub async fn checkout(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> ApiResult<Value> {
    db::bookings::checkout(&state.pool, booking_id).await?;
    Ok(Json(json!({ "booking_id": booking_id, "checked_out": true })))
}
