//! Payment ledger

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::PaymentMode;
use crate::util::now_millis;

/// Record a payment against an existing booking. The amount is accepted
/// as-is; reconciliation against the owed total is the operator's job.
/// Room state is never touched here.
pub async fn record_payment(
    pool: &PgPool,
    booking_id: i64,
    amount: Decimal,
    mode: PaymentMode,
) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM bookings WHERE id = $1")
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(AppError::booking_not_found(booking_id));
    }

    let (payment_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO payments (amount, mode, created_at, booking_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(amount)
    .bind(mode.as_str())
    .bind(now_millis())
    .bind(booking_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(payment_id, booking_id, %amount, "Payment recorded");
    Ok(payment_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::bookings;
    use crate::error::ErrorCode;
    use crate::models::{CreateBookingRequest, CustomerProfile, STATUS_OCCUPIED};

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            customer: CustomerProfile {
                name: "Asha Rao".into(),
                email: "asha@example.com".into(),
                mobile: "5550001111".into(),
                national_id: "IN-0001".into(),
                dob: None,
                street: None,
                city: None,
                state: None,
                country: None,
            },
            room_number: 101,
            checkin_date: "2024-06-01".parse().unwrap(),
            checkout_date: "2024-06-04".parse().unwrap(),
        }
    }

    #[sqlx::test]
    async fn test_payment_against_unknown_booking(pool: PgPool) {
        let err = record_payment(&pool, 9999, Decimal::from(100), PaymentMode::Cash)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test]
    async fn test_payment_recorded_without_touching_room_state(pool: PgPool) {
        let outcome = bookings::create_booking(&pool, &request()).await.unwrap();

        let payment_id =
            record_payment(&pool, outcome.booking_id, Decimal::from(2000), PaymentMode::Online)
                .await
                .unwrap();

        let (amount, mode): (Decimal, String) =
            sqlx::query_as("SELECT amount, mode FROM payments WHERE id = $1")
                .bind(payment_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(amount, Decimal::from(2000));
        assert_eq!(mode, "online");

        // Paying does not release the room
        let (status,): (String,) =
            sqlx::query_as("SELECT status FROM rooms WHERE room_number = 101")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(status, STATUS_OCCUPIED);
    }
}
