use crate::models::{DbBooking, DbBookingDetail};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fetch every booking with its student, instructor, and skill resolved,
/// newest session first.
pub async fn list_bookings(pool: &Pool<Postgres>) -> Result<Vec<DbBookingDetail>> {
    tracing::debug!("Listing all bookings");

    let bookings = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT
            b.id, b.skill_description, b.date, b.status, b.created_at, b.updated_at,
            st.id AS student_id, st.name AS student_name, st.email AS student_email,
            i.id AS instructor_id, i.name AS instructor_name, i.email AS instructor_email,
            sk.id AS skill_id, sk.name AS skill_name
        FROM bookings b
        JOIN students st ON st.id = b.student_id
        JOIN instructors i ON i.id = b.instructor_id
        JOIN skills sk ON sk.id = b.skill_id
        ORDER BY b.date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    tracing::debug!("Found {} bookings", bookings.len());
    Ok(bookings)
}

/// Fetch a single booking with its associations resolved.
pub async fn get_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBookingDetail>> {
    tracing::debug!("Getting booking by id: {}", id);

    let booking = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT
            b.id, b.skill_description, b.date, b.status, b.created_at, b.updated_at,
            st.id AS student_id, st.name AS student_name, st.email AS student_email,
            i.id AS instructor_id, i.name AS instructor_name, i.email AS instructor_email,
            sk.id AS skill_id, sk.name AS skill_name
        FROM bookings b
        JOIN students st ON st.id = b.student_id
        JOIN instructors i ON i.id = b.instructor_id
        JOIN skills sk ON sk.id = b.skill_id
        WHERE b.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Set the status of a single booking and return the updated row.
///
/// Returns `None` when no booking has the given id. The update is
/// unconditional: there is no check that the booking is still pending.
pub async fn set_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Option<DbBooking>> {
    tracing::debug!("Setting booking {} status to {}", id, status);

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, student_id, instructor_id, skill_id, skill_description,
                  date, status, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

/// Set the status of every booking whose id is in `ids`, returning the number
/// of rows matched.
///
/// A row whose status already equals the target still counts as matched, so
/// re-approving an approved booking reports success rather than zero.
pub async fn set_booking_statuses(
    pool: &Pool<Postgres>,
    ids: &[Uuid],
    status: &str,
) -> Result<u64> {
    tracing::debug!("Setting {} bookings to status {}", ids.len(), status);

    let result = sqlx::query(
        r#"
        UPDATE bookings
        SET status = $2, updated_at = NOW()
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids)
    .bind(status)
    .execute(pool)
    .await?;

    let matched = result.rows_affected();
    tracing::debug!("Updated {} of {} requested bookings", matched, ids.len());
    Ok(matched)
}
