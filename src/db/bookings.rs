//! The booking transaction, booking detail, and checkout

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{
    BookingDetail, BookingOutcome, CreateBookingRequest, STATUS_AVAILABLE, STATUS_OCCUPIED,
    booking_total,
};
use crate::util::now_millis;

use super::{customers, rooms};

/// Create a booking as one atomic unit: resolve/create customer, acquire
/// the room under a row lock, insert the booking, flip the room to
/// occupied. Any failure rolls back every step.
pub async fn create_booking(
    pool: &PgPool,
    req: &CreateBookingRequest,
) -> Result<BookingOutcome, AppError> {
    // Guarded here as well as at the API boundary so the invariant holds
    // for every caller of the transaction
    if req.checkin_date >= req.checkout_date {
        return Err(AppError::invalid_range());
    }

    let now = now_millis();
    let mut tx = pool.begin().await?;

    let customer_id = customers::resolve_or_create(&mut tx, &req.customer, now).await?;
    let room = rooms::lock_for_booking(&mut tx, req.room_number).await?;

    let (booking_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO bookings (created_at, checkin_date, checkout_date, customer_id, room_number)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(now)
    .bind(req.checkin_date)
    .bind(req.checkout_date)
    .bind(customer_id)
    .bind(req.room_number)
    .fetch_one(&mut *tx)
    .await?;

    rooms::set_status(&mut tx, req.room_number, STATUS_OCCUPIED).await?;

    tx.commit().await?;

    let total_amount = booking_total(room.price, req.checkin_date, req.checkout_date);
    tracing::info!(
        booking_id,
        customer_id,
        room_number = req.room_number,
        %total_amount,
        "Booking created"
    );

    Ok(BookingOutcome {
        booking_id,
        customer_id,
        total_amount,
    })
}

#[derive(sqlx::FromRow)]
struct BookingDetailRow {
    booking_id: i64,
    created_at: i64,
    checkin_date: chrono::NaiveDate,
    checkout_date: chrono::NaiveDate,
    room_number: i64,
    category: String,
    price: rust_decimal::Decimal,
    customer_id: i64,
    customer_name: String,
    customer_email: String,
    customer_phone: Option<String>,
}

/// Joined booking view with the owed total computed from the room's current
/// price and the stay length.
pub async fn get_detail(pool: &PgPool, booking_id: i64) -> Result<BookingDetail, AppError> {
    let row: BookingDetailRow = sqlx::query_as(
        r#"
        SELECT b.id AS booking_id, b.created_at, b.checkin_date, b.checkout_date,
               b.room_number, r.category, r.price,
               c.id AS customer_id, c.name AS customer_name, c.email AS customer_email,
               (SELECT p.phone FROM customer_phones p
                WHERE p.customer_id = c.id
                ORDER BY p.id
                LIMIT 1) AS customer_phone
        FROM bookings b
        JOIN customers c ON c.id = b.customer_id
        JOIN rooms r ON r.room_number = b.room_number
        WHERE b.id = $1
        "#,
    )
    .bind(booking_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::booking_not_found(booking_id))?;

    let total_amount = booking_total(row.price, row.checkin_date, row.checkout_date);
    Ok(BookingDetail {
        booking_id: row.booking_id,
        created_at: row.created_at,
        checkin_date: row.checkin_date,
        checkout_date: row.checkout_date,
        room_number: row.room_number,
        category: row.category,
        price: row.price,
        customer_id: row.customer_id,
        customer_name: row.customer_name,
        customer_email: row.customer_email,
        customer_phone: row.customer_phone,
        total_amount,
    })
}

/// Release the booking's room back to available. Idempotent in effect:
/// repeated calls leave the room available and still succeed.
pub async fn checkout(pool: &PgPool, booking_id: i64) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    let (room_number,): (i64,) = sqlx::query_as("SELECT room_number FROM bookings WHERE id = $1")
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::booking_not_found(booking_id))?;

    rooms::set_status(&mut tx, room_number, STATUS_AVAILABLE).await?;

    tx.commit().await?;
    tracing::info!(booking_id, room_number, "Checkout complete");
    Ok(())
}
