//! # Skillbook Core
//!
//! Shared domain types for the Skillbook booking-approval service: the
//! booking wire model, the status enumeration, request/response DTOs, and
//! the error taxonomy used by the database, API, and admin crates.

/// Error types shared across the workspace
pub mod errors;
/// Domain models and request/response types
pub mod models;
