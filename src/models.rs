//! Domain rows and request/response types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Room status values as stored in the `rooms.status` column
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_OCCUPIED: &str = "occupied";

/// A room row. `status` is the authoritative occupancy state, only ever
/// written inside the booking and checkout transactions.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Room {
    pub room_number: i64,
    pub category: String,
    pub price: Decimal,
    pub capacity: i32,
    pub status: String,
}

/// Payment mode accepted by the payment ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Cash,
    Card,
    Online,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Online => "online",
        }
    }
}

/// Customer profile fields carried on a booking request. Used only when no
/// existing customer matches the identity (email / national id).
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerProfile {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub national_id: String,
    pub dob: Option<NaiveDate>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// POST /api/bookings request body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    #[serde(flatten)]
    pub customer: CustomerProfile,
    pub room_number: i64,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
}

/// Result of a committed booking transaction
#[derive(Debug, Clone, Serialize)]
pub struct BookingOutcome {
    pub booking_id: i64,
    pub customer_id: i64,
    pub total_amount: Decimal,
}

/// POST /api/payments request body
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub booking_id: i64,
    pub amount: Decimal,
    pub mode: PaymentMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordPaymentResponse {
    pub payment_id: i64,
}

/// Joined booking view: booking + customer + room + computed total
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    pub booking_id: i64,
    pub created_at: i64,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub room_number: i64,
    pub category: String,
    pub price: Decimal,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub total_amount: Decimal,
}

/// Total owed for a stay: nightly price × nights. Computed at read time from
/// the room's current price and the booking dates, never stored.
///
/// Callers must have already validated `checkin < checkout`.
pub fn booking_total(price: Decimal, checkin: NaiveDate, checkout: NaiveDate) -> Decimal {
    let nights = (checkout - checkin).num_days();
    price * Decimal::from(nights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_booking_total_three_nights() {
        // Room 101 scenario: 1500/night, 2024-06-01 → 2024-06-04
        let total = booking_total(
            Decimal::from(1500),
            date("2024-06-01"),
            date("2024-06-04"),
        );
        assert_eq!(total, Decimal::from(4500));
    }

    #[test]
    fn test_booking_total_single_night() {
        let total = booking_total(
            Decimal::new(249950, 2), // 2499.50
            date("2024-06-01"),
            date("2024-06-02"),
        );
        assert_eq!(total, Decimal::new(249950, 2));
    }

    #[test]
    fn test_booking_total_across_month_boundary() {
        let total = booking_total(Decimal::from(100), date("2024-01-30"), date("2024-02-02"));
        assert_eq!(total, Decimal::from(300));
    }

    #[test]
    fn test_payment_mode_round_trip() {
        let mode: PaymentMode = serde_json::from_str("\"online\"").unwrap();
        assert_eq!(mode, PaymentMode::Online);
        assert_eq!(mode.as_str(), "online");
        assert_eq!(serde_json::to_string(&mode).unwrap(), "\"online\"");
    }

    #[test]
    fn test_create_booking_request_flattens_profile() {
        let req: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "5550001111",
            "national_id": "IN-1234-5678",
            "room_number": 101,
            "checkin_date": "2024-06-01",
            "checkout_date": "2024-06-04"
        }))
        .unwrap();
        assert_eq!(req.customer.email, "asha@example.com");
        assert_eq!(req.room_number, 101);
        assert!(req.customer.dob.is_none());
    }
}
