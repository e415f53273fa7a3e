//! Database access layer
//!
//! Free functions over `&PgPool` (reads) or `&mut PgConnection` (steps that
//! must run inside a caller-owned transaction). One transaction per logical
//! operation; any error rolls the whole operation back.

pub mod bookings;
pub mod customers;
pub mod payments;
pub mod rooms;
