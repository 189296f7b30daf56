use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::IntoResponse;
use axum::Json;
use mockall::predicate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use skillbook_core::{
    errors::BookingError,
    models::booking::{
        Booking, BookingStatus, MessageResponse, PersonRef, SkillRef, StatusChangeResponse,
    },
};
use skillbook_db::models::DbBookingDetail;
use uuid::Uuid;

use crate::test_utils::{make_booking, make_detail, TestContext};
use skillbook_api::middleware::error_handling::AppError;

fn detail_to_booking(row: DbBookingDetail) -> Result<Booking, BookingError> {
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

// Test wrappers that run the handler logic against the mock repository
// instead of a live database.

async fn test_list_wrapper(ctx: &mut TestContext) -> Result<Json<Vec<Booking>>, AppError> {
    let rows = ctx
        .booking_repo
        .list_bookings()
        .await
        .map_err(BookingError::Database)?;

    if rows.is_empty() {
        return Err(AppError(BookingError::NotFound(
            "No bookings found".to_string(),
        )));
    }

    let bookings = rows
        .into_iter()
        .map(detail_to_booking)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(bookings))
}

async fn test_transition_one_wrapper(
    ctx: &mut TestContext,
    id: Uuid,
    status: BookingStatus,
) -> Result<Json<StatusChangeResponse>, AppError> {
    let updated = ctx
        .booking_repo
        .set_booking_status(id, status.as_str())
        .await
        .map_err(BookingError::Transition)?;

    let Some(updated) = updated else {
        return Err(AppError(BookingError::NotFound(
            "Booking not found".to_string(),
        )));
    };

    let detail = ctx
        .booking_repo
        .get_booking(updated.id)
        .await
        .map_err(BookingError::Transition)?
        .ok_or_else(|| BookingError::NotFound("Booking not found".to_string()))?;

    Ok(Json(StatusChangeResponse {
        message: format!("Booking {}", status.as_str()),
        booking: detail_to_booking(detail)?,
    }))
}

async fn test_transition_many_wrapper(
    ctx: &mut TestContext,
    payload: Value,
    status: BookingStatus,
    verb: &str,
) -> Result<Json<MessageResponse>, AppError> {
    let invalid = || BookingError::Validation("Invalid booking IDs".to_string());

    let ids = payload
        .get("bookingIds")
        .and_then(Value::as_array)
        .ok_or_else(invalid)?;

    if ids.is_empty() {
        return Err(AppError(invalid()));
    }

    let ids = ids
        .iter()
        .map(|v| v.as_str().and_then(|s| Uuid::parse_str(s).ok()))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    let matched = ctx
        .booking_repo
        .set_booking_statuses(ids, status.as_str())
        .await
        .map_err(BookingError::Database)?;

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

#[tokio::test]
async fn test_approve_booking_success() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.booking_repo
        .expect_set_booking_status()
        .with(predicate::eq(id), predicate::eq("approved"))
        .returning(|id, status| Ok(Some(make_booking(id, status))));
    ctx.booking_repo
        .expect_get_booking()
        .with(predicate::eq(id))
        .returning(|id| Ok(Some(make_detail(id, "approved"))));

    let response = test_transition_one_wrapper(&mut ctx, id, BookingStatus::Approved)
        .await
        .expect("approve should succeed");

    assert_eq!(response.0.message, "Booking approved");
    assert_eq!(response.0.booking.id, id);
    assert_eq!(response.0.booking.status, BookingStatus::Approved);
    assert_eq!(response.0.booking.student.name, "Ada Student");
}

#[tokio::test]
async fn test_reject_booking_success() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.booking_repo
        .expect_set_booking_status()
        .with(predicate::eq(id), predicate::eq("rejected"))
        .returning(|id, status| Ok(Some(make_booking(id, status))));
    ctx.booking_repo
        .expect_get_booking()
        .returning(|id| Ok(Some(make_detail(id, "rejected"))));

    let response = test_transition_one_wrapper(&mut ctx, id, BookingStatus::Rejected)
        .await
        .expect("reject should succeed");

    assert_eq!(response.0.message, "Booking rejected");
    assert_eq!(response.0.booking.status, BookingStatus::Rejected);
}

#[tokio::test]
async fn test_approve_booking_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    // Absent id: the store matches nothing and nothing is mutated.
    ctx.booking_repo
        .expect_set_booking_status()
        .with(predicate::eq(id), predicate::eq("approved"))
        .returning(|_, _| Ok(None));
    ctx.booking_repo.expect_get_booking().never();

    let error = test_transition_one_wrapper(&mut ctx, id, BookingStatus::Approved)
        .await
        .expect_err("approve of unknown id should fail");

    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bulk_approve_empty_ids_rejected() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_set_booking_statuses().never();

    let payload = json!({ "bookingIds": [] });
    let error =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect_err("empty id list should fail validation");

    let response = error.into_response();
    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_approve_missing_field_rejected() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_set_booking_statuses().never();

    let payload = json!({ "ids": [Uuid::new_v4()] });
    let error =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect_err("missing bookingIds should fail validation");

    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_bulk_approve_non_array_rejected() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_set_booking_statuses().never();

    let payload = json!({ "bookingIds": "not-a-list" });
    let error =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect_err("non-array bookingIds should fail validation");

    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_bulk_approve_non_uuid_entry_rejected() {
    let mut ctx = TestContext::new();
    ctx.booking_repo.expect_set_booking_statuses().never();

    let payload = json!({ "bookingIds": ["not-a-uuid"] });
    let error =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect_err("malformed id should fail validation");

    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_bulk_approve_reports_matched_count() {
    let mut ctx = TestContext::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    ctx.booking_repo
        .expect_set_booking_statuses()
        .with(
            predicate::eq(vec![first, second]),
            predicate::eq("approved"),
        )
        .returning(|ids, _| Ok(ids.len() as u64));

    let payload = json!({ "bookingIds": [first, second] });
    let response =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect("bulk approve should succeed");

    assert_eq!(response.0.message, "2 bookings approved");
}

#[tokio::test]
async fn test_bulk_approve_zero_matched_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_set_booking_statuses()
        .returning(|_, _| Ok(0));

    let payload = json!({ "bookingIds": [Uuid::new_v4()] });
    let error =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect_err("zero matched rows should report not found");

    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_list_bookings_empty_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.booking_repo
        .expect_list_bookings()
        .returning(|| Ok(Vec::new()));

    let error = test_list_wrapper(&mut ctx)
        .await
        .expect_err("empty collection should report not found");

    assert_eq!(
        error.into_response().status(),
        axum::http::StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_list_bookings_resolves_associations() {
    let mut ctx = TestContext::new();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    ctx.booking_repo.expect_list_bookings().returning(move || {
        Ok(vec![
            make_detail(first, "pending"),
            make_detail(second, "approved"),
        ])
    });

    let response = test_list_wrapper(&mut ctx)
        .await
        .expect("list should succeed");

    assert_eq!(response.0.len(), 2);
    assert_eq!(response.0[0].id, first);
    assert_eq!(response.0[0].status, BookingStatus::Pending);
    assert_eq!(response.0[0].instructor.name, "Grace Instructor");
    assert_eq!(response.0[0].skill.name, "Rust");
    assert_eq!(response.0[1].status, BookingStatus::Approved);
}

#[tokio::test]
async fn test_bulk_transitions_end_to_end_scenario() {
    // Store starts with A(pending), B(pending), C(approved). ApproveMany([A,B])
    // must match 2 and leave C untouched; RejectMany([A, unknown]) must match
    // only A.
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let c = Uuid::new_v4();
    let unknown = Uuid::new_v4();

    let store: Arc<Mutex<HashMap<Uuid, String>>> = Arc::new(Mutex::new(HashMap::from([
        (a, "pending".to_string()),
        (b, "pending".to_string()),
        (c, "approved".to_string()),
    ])));

    let mut ctx = TestContext::new();
    let mock_store = Arc::clone(&store);
    ctx.booking_repo
        .expect_set_booking_statuses()
        .returning(move |ids, status| {
            let mut store = mock_store.lock().unwrap();
            let mut matched = 0;
            for id in ids {
                if let Some(current) = store.get_mut(&id) {
                    *current = status.to_string();
                    matched += 1;
                }
            }
            Ok(matched)
        });

    let payload = json!({ "bookingIds": [a, b] });
    let response =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
            .await
            .expect("bulk approve should succeed");
    assert_eq!(response.0.message, "2 bookings approved");

    {
        let store = store.lock().unwrap();
        assert_eq!(store[&a], "approved");
        assert_eq!(store[&b], "approved");
        assert_eq!(store[&c], "approved");
    }

    // Unknown ids are skipped; A still counts as matched.
    let payload = json!({ "bookingIds": [a, unknown] });
    let response =
        test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Rejected, "reject")
            .await
            .expect("bulk reject should succeed");
    assert_eq!(response.0.message, "1 bookings rejected");

    let store = store.lock().unwrap();
    assert_eq!(store[&a], "rejected");
    assert_eq!(store[&b], "approved");
}

#[tokio::test]
async fn test_bulk_transition_is_idempotent() {
    // Re-applying the same transition keeps the final status and still counts
    // every matched row.
    let id = Uuid::new_v4();
    let store: Arc<Mutex<HashMap<Uuid, String>>> =
        Arc::new(Mutex::new(HashMap::from([(id, "pending".to_string())])));

    let mut ctx = TestContext::new();
    let mock_store = Arc::clone(&store);
    ctx.booking_repo
        .expect_set_booking_statuses()
        .returning(move |ids, status| {
            let mut store = mock_store.lock().unwrap();
            let mut matched = 0;
            for id in ids {
                if let Some(current) = store.get_mut(&id) {
                    *current = status.to_string();
                    matched += 1;
                }
            }
            Ok(matched)
        });

    for _ in 0..2 {
        let payload = json!({ "bookingIds": [id] });
        let response =
            test_transition_many_wrapper(&mut ctx, payload, BookingStatus::Approved, "approve")
                .await
                .expect("bulk approve should succeed");
        assert_eq!(response.0.message, "1 bookings approved");
    }

    assert_eq!(store.lock().unwrap()[&id], "approved");
}
