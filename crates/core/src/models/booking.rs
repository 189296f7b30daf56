use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BookingError;

/// Approval state of a booking.
///
/// `Pending` is the initial state assigned at creation; the admin flow only
/// ever moves a booking to `Approved` or `Rejected`, and neither of those has
/// a further transition in this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "rejected" => Ok(BookingStatus::Rejected),
            other => Err(BookingError::Validation(format!(
                "Unknown booking status: {}",
                other
            ))),
        }
    }
}

/// Student or instructor reference embedded in a booking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Skill reference embedded in a booking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRef {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
}

/// A booking as served to clients, with the student, instructor, and skill
/// associations resolved to sub-objects. Field names follow the established
/// wire format (`_id`, camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub student: PersonRef,
    pub instructor: PersonRef,
    pub skill: SkillRef,
    pub skill_description: String,
    pub date: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response body for single approve/reject endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusChangeResponse {
    pub message: String,
    pub booking: Booking,
}

/// Request body for the bulk approve/reject endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkStatusRequest {
    pub booking_ids: Vec<Uuid>,
}

/// Message-only response body, used by bulk endpoints and error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
