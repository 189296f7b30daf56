//! # Skillbook Admin
//!
//! Client-side counterpart of the booking API: a component-local view model
//! holding the fetched booking list and the admin's selection set, plus an
//! HTTP client for the approval endpoints.
//!
//! The view model (`state::BookingsView`) is pure — no network, no rendering —
//! so selection and optimistic-update behavior can be unit tested in
//! isolation. The client (`client::AdminClient`) performs the bulk fan-out
//! and reports per-item failures instead of a single boolean.

pub mod client;
pub mod config;
pub mod state;
