use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub student_id: Uuid,
    pub instructor_id: Uuid,
    pub skill_id: Uuid,
    pub skill_description: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking row joined with its student, instructor, and skill, flattened the
/// way the list query returns it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingDetail {
    pub id: Uuid,
    pub skill_description: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub student_id: Uuid,
    pub student_name: String,
    pub student_email: String,
    pub instructor_id: Uuid,
    pub instructor_name: String,
    pub instructor_email: String,
    pub skill_id: Uuid,
    pub skill_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStudent {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInstructor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSkill {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
