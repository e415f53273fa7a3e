//! API routes

pub mod bookings;
pub mod health;
pub mod payments;
pub mod rooms;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

/// Create the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/rooms/available", get(rooms::list_available))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/{booking_id}", get(bookings::get_booking))
        .route(
            "/api/bookings/{booking_id}/checkout",
            post(bookings::checkout),
        )
        .route("/api/payments", post(payments::record_payment))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
