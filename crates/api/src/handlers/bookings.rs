use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use skillbook_core::{
    errors::BookingError,
    models::booking::{
        Booking, BookingStatus, MessageResponse, PersonRef, SkillRef, StatusChangeResponse,
    },
};
use skillbook_db::models::DbBookingDetail;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Convert a joined repository row into the wire model.
///
/// The status column carries a CHECK constraint, so the parse only fails on
/// data written outside this service.
fn to_wire(row: DbBookingDetail) -> Result<Booking, BookingError> {
    Ok(Booking {
        id: row.id,
        student: PersonRef {
            id: row.student_id,
            name: row.student_name,
            email: row.student_email,
        },
        instructor: PersonRef {
            id: row.instructor_id,
            name: row.instructor_name,
            email: row.instructor_email,
        },
        skill: SkillRef {
            id: row.skill_id,
            name: row.skill_name,
        },
        skill_description: row.skill_description,
        date: row.date,
        status: row.status.parse()?,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

/// `GET /api/bookings` — every booking with student/instructor/skill
/// resolved. An empty collection is reported as 404, matching the
/// established behavior of this endpoint.
#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let rows = skillbook_db::repositories::booking::list_bookings(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    if rows.is_empty() {
        return Err(AppError(BookingError::NotFound(
            "No bookings found".to_string(),
        )));
    }

    let bookings = rows
        .into_iter()
        .map(to_wire)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(bookings))
}

/// Transition one booking and serve the populated record back.
async fn transition_one(
    state: Arc<ApiState>,
    id: Uuid,
    status: BookingStatus,
) -> Result<Json<StatusChangeResponse>, AppError> {
    // Unconditional update: no pending-state check, approving an approved
    // booking is a no-op transition.
    let updated = skillbook_db::repositories::booking::set_booking_status(
        &state.db_pool,
        id,
        status.as_str(),
    )
    .await
    .map_err(BookingError::Transition)?;

    let Some(updated) = updated else {
        return Err(AppError(BookingError::NotFound(
            "Booking not found".to_string(),
        )));
    };

    // Re-read through the join so the response carries the resolved
    // student/instructor/skill sub-objects.
    let detail = skillbook_db::repositories::booking::get_booking(&state.db_pool, updated.id)
        .await
        .map_err(BookingError::Transition)?
        .ok_or_else(|| BookingError::NotFound("Booking not found".to_string()))?;

    Ok(Json(StatusChangeResponse {
        message: format!("Booking {}", status.as_str()),
        booking: to_wire(detail)?,
    }))
}

/// `PUT /api/bookings/:id/approve`
#[axum::debug_handler]
pub async fn approve_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusChangeResponse>, AppError> {
    transition_one(state, id, BookingStatus::Approved).await
}

/// `PUT /api/bookings/:id/reject`
#[axum::debug_handler]
pub async fn reject_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StatusChangeResponse>, AppError> {
    transition_one(state, id, BookingStatus::Rejected).await
}

/// Extract and validate the `bookingIds` array from a bulk request body.
///
/// The body is taken as raw JSON so that every malformed shape (missing
/// field, not an array, empty array, non-UUID entry) yields the same 400
/// response rather than a framework-level rejection.
fn parse_booking_ids(payload: &Value) -> Result<Vec<Uuid>, BookingError> {
    let invalid = || BookingError::Validation("Invalid booking IDs".to_string());

    let ids = payload
        .get("bookingIds")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    if ids.is_empty() {
        return Err(invalid());
    }

    ids.iter()
        .map(|v| v.as_str().and_then(|s| Uuid::parse_str(s).ok()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)
}

/// Transition every booking in the request and report the matched count.
async fn transition_many(
    state: Arc<ApiState>,
    payload: Value,
    status: BookingStatus,
    verb: &str,
) -> Result<Json<MessageResponse>, AppError> {
    let ids = parse_booking_ids(&payload)?;

    let matched = skillbook_db::repositories::booking::set_booking_statuses(
        &state.db_pool,
        &ids,
        status.as_str(),
    )
    .await
    .map_err(BookingError::Database)?;

    // Unknown ids are skipped by the store; only a fully-unmatched request
    // is an error. A matched row whose status was already the target still
    // counts.
    if matched == 0 {
        return Err(AppError(BookingError::NotFound(format!(
            "No bookings found to {}",
            verb
        ))));
    }

    Ok(Json(MessageResponse {
        message: format!("{} bookings {}", matched, status.as_str()),
    }))
}

/// `PUT /api/bookings/approve` with body `{"bookingIds": [...]}`
#[axum::debug_handler]
pub async fn approve_many(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    transition_many(state, payload, BookingStatus::Approved, "approve").await
}

/// `PUT /api/bookings/reject` with body `{"bookingIds": [...]}`
#[axum::debug_handler]
pub async fn reject_many(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Value>,
) -> Result<Json<MessageResponse>, AppError> {
    transition_many(state, payload, BookingStatus::Rejected, "reject").await
}
