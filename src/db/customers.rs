//! Customer directory: resolve-or-create by unique identity
//!
//! Identity is email OR national id. Resolution is idempotent and
//! non-destructive: profile fields on the request never update an existing
//! row.

use sqlx::PgConnection;

use crate::error::AppError;
use crate::models::CustomerProfile;

/// Resolve the customer matching the profile's email/national id, or create
/// one. Runs on the booking transaction's connection so a later failure
/// rolls the creation back too.
///
/// Fails with `IdentityConflict` when email and national id match two
/// *different* existing rows — detected before any write.
///
/// Racing creations are handled by the unique constraints on
/// `customers.email` / `customers.national_id`: `ON CONFLICT DO NOTHING`
/// swallows the loser's insert without aborting the transaction, and the
/// follow-up lookup resolves to the winner's row.
pub async fn resolve_or_create(
    conn: &mut PgConnection,
    profile: &CustomerProfile,
    now: i64,
) -> Result<i64, AppError> {
    if let Some(id) = find_by_identity(conn, &profile.email, &profile.national_id).await? {
        return Ok(id);
    }

    let inserted: Option<(i64,)> = sqlx::query_as(
        r#"
        INSERT INTO customers (name, dob, email, national_id, street, city, state, country, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT DO NOTHING
        RETURNING id
        "#,
    )
    .bind(&profile.name)
    .bind(profile.dob)
    .bind(&profile.email)
    .bind(&profile.national_id)
    .bind(&profile.street)
    .bind(&profile.city)
    .bind(&profile.state)
    .bind(&profile.country)
    .bind(now)
    .fetch_optional(&mut *conn)
    .await?;

    match inserted {
        Some((id,)) => {
            sqlx::query("INSERT INTO customer_phones (customer_id, phone) VALUES ($1, $2)")
                .bind(id)
                .bind(&profile.mobile)
                .execute(&mut *conn)
                .await?;
            tracing::info!(customer_id = id, "Created customer");
            Ok(id)
        }
        None => {
            // Lost an insert race; the winner committed between our lookup
            // and the insert. Re-resolve by the same identity, ambiguity
            // check included: the racing commits may have split email and
            // national id across two rows.
            find_by_identity(conn, &profile.email, &profile.national_id)
                .await?
                .ok_or_else(|| AppError::internal("Customer insert conflicted but no row matches"))
        }
    }
}

/// Look up the customer matching either identity field.
///
/// Fails with `IdentityConflict` when email and national id match two
/// different rows.
async fn find_by_identity(
    conn: &mut PgConnection,
    email: &str,
    national_id: &str,
) -> Result<Option<i64>, AppError> {
    let matches: Vec<(i64,)> =
        sqlx::query_as("SELECT id FROM customers WHERE email = $1 OR national_id = $2")
            .bind(email)
            .bind(national_id)
            .fetch_all(&mut *conn)
            .await?;

    match matches.as_slice() {
        [] => Ok(None),
        [(id,)] => Ok(Some(*id)),
        _ => Err(AppError::identity_conflict()),
    }
}
