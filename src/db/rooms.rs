//! Room inventory queries and locked status transitions

use sqlx::{PgConnection, PgPool};

use crate::error::AppError;
use crate::models::{Room, STATUS_AVAILABLE};

/// Rooms open for booking: status = available, capacity ≥ `min_capacity`,
/// optionally restricted to one category. Cheapest first.
pub async fn list_available(
    pool: &PgPool,
    min_capacity: i32,
    category: Option<&str>,
) -> Result<Vec<Room>, AppError> {
    let rows: Vec<Room> = if let Some(category) = category {
        sqlx::query_as(
            r#"
            SELECT room_number, category, price, capacity, status
            FROM rooms
            WHERE status = 'available' AND capacity >= $1 AND category = $2
            ORDER BY price
            "#,
        )
        .bind(min_capacity)
        .bind(category)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as(
            r#"
            SELECT room_number, category, price, capacity, status
            FROM rooms
            WHERE status = 'available' AND capacity >= $1
            ORDER BY price
            "#,
        )
        .bind(min_capacity)
        .fetch_all(pool)
        .await?
    };
    Ok(rows)
}

/// Read the room under a row lock and verify it is available.
///
/// `FOR UPDATE` serializes concurrent booking attempts on the same room:
/// of two transactions racing for one available room, the second blocks
/// here until the first commits, then observes `occupied` and fails with
/// `RoomUnavailable` instead of double-booking.
pub async fn lock_for_booking(conn: &mut PgConnection, room_number: i64) -> Result<Room, AppError> {
    let room: Room = sqlx::query_as(
        r#"
        SELECT room_number, category, price, capacity, status
        FROM rooms
        WHERE room_number = $1
        FOR UPDATE
        "#,
    )
    .bind(room_number)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::not_found(format!("Room {room_number}")))?;

    if room.status != STATUS_AVAILABLE {
        return Err(AppError::room_unavailable(room_number));
    }
    Ok(room)
}

/// Flip the room's occupancy status. Runs on the caller's transaction.
pub async fn set_status(
    conn: &mut PgConnection,
    room_number: i64,
    status: &str,
) -> Result<(), AppError> {
    sqlx::query("UPDATE rooms SET status = $1 WHERE room_number = $2")
        .bind(status)
        .bind(room_number)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
