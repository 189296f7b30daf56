use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

/// Booking-approval routes. The bulk routes are static segments, so axum
/// matches them ahead of the `:id` captures.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/api/bookings/approve",
            put(handlers::bookings::approve_many),
        )
        .route(
            "/api/bookings/reject",
            put(handlers::bookings::reject_many),
        )
        .route(
            "/api/bookings/:id/approve",
            put(handlers::bookings::approve_booking),
        )
        .route(
            "/api/bookings/:id/reject",
            put(handlers::bookings::reject_booking),
        )
}
