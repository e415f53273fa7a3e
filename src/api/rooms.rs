//! Room search endpoint

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::db;
use crate::models::Room;
use crate::state::AppState;

use super::ApiResult;

/// GET /api/rooms/available
#[derive(Deserialize)]
pub struct AvailableRoomsQuery {
    pub min_capacity: Option<i32>,
    pub category: Option<String>,
}

pub async fn list_available(
    State(state): State<AppState>,
    Query(query): Query<AvailableRoomsQuery>,
) -> ApiResult<Vec<Room>> {
    let min_capacity = query.min_capacity.unwrap_or(1).max(1);
    let rooms =
        db::rooms::list_available(&state.pool, min_capacity, query.category.as_deref()).await?;
    Ok(Json(rooms))
}
