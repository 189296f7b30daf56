use eyre::{eyre, Result};
use reqwest::StatusCode;
use serde_json::json;
use tokio::task::JoinSet;
use uuid::Uuid;

use skillbook_core::models::booking::{
    Booking, BookingStatus, MessageResponse, StatusChangeResponse,
};

use crate::config::AdminConfig;

/// Result of a fan-out bulk transition: which ids were updated and which
/// failed, with the failure text.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    pub done: Vec<Uuid>,
    pub failed: Vec<(Uuid, String)>,
}

impl BulkOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

fn action_path(status: BookingStatus) -> Result<&'static str> {
    match status {
        BookingStatus::Approved => Ok("approve"),
        BookingStatus::Rejected => Ok("reject"),
        BookingStatus::Pending => Err(eyre!("no endpoint transitions a booking back to pending")),
    }
}

/// HTTP client for the booking-approval API.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    config: AdminConfig,
}

impl AdminClient {
    pub fn new(config: AdminConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the full booking list.
    ///
    /// The server reports an empty collection as 404; the admin view treats
    /// that as an empty list, not an error.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let response = self
            .http
            .get(self.config.api_url("/api/bookings"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(eyre!("Failed to fetch bookings: {}", error_text));
        }

        Ok(response.json().await?)
    }

    pub async fn approve(&self, id: Uuid) -> Result<Booking> {
        self.transition(id, BookingStatus::Approved).await
    }

    pub async fn reject(&self, id: Uuid) -> Result<Booking> {
        self.transition(id, BookingStatus::Rejected).await
    }

    /// Transition a single booking via `PUT /api/bookings/:id/:action`.
    pub async fn transition(&self, id: Uuid, status: BookingStatus) -> Result<Booking> {
        let action = action_path(status)?;
        let response = self
            .http
            .put(self.config.api_url(&format!("/api/bookings/{}/{}", id, action)))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(eyre!("Failed to {} booking {}: {}", action, id, error_text));
        }

        let body: StatusChangeResponse = response.json().await?;
        Ok(body.booking)
    }

    pub async fn approve_many(&self, ids: &[Uuid]) -> Result<String> {
        self.transition_many(ids, BookingStatus::Approved).await
    }

    pub async fn reject_many(&self, ids: &[Uuid]) -> Result<String> {
        self.transition_many(ids, BookingStatus::Rejected).await
    }

    /// Transition a set of bookings in one request via the bulk endpoint,
    /// returning the server's count message.
    pub async fn transition_many(&self, ids: &[Uuid], status: BookingStatus) -> Result<String> {
        let action = action_path(status)?;
        let response = self
            .http
            .put(self.config.api_url(&format!("/api/bookings/{}", action)))
            .json(&json!({ "bookingIds": ids }))
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(eyre!("Failed to {} bookings: {}", action, error_text));
        }

        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    /// Issue one transition request per id concurrently and wait for all of
    /// them.
    ///
    /// There is no ordering guarantee among the requests, no cancellation,
    /// and no short-circuit on first failure: every request runs to
    /// completion and the outcome lists each failure individually. Failures
    /// are also logged.
    pub async fn transition_each(
        &self,
        ids: Vec<Uuid>,
        status: BookingStatus,
    ) -> Result<BulkOutcome> {
        // Reject the pending target before spawning anything.
        action_path(status)?;

        let mut tasks = JoinSet::new();
        for id in ids {
            let client = self.clone();
            tasks.spawn(async move { (id, client.transition(id, status).await) });
        }

        let mut outcome = BulkOutcome::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((id, Ok(_))) => outcome.done.push(id),
                Ok((id, Err(err))) => {
                    tracing::warn!("Failed to update booking {}: {}", id, err);
                    outcome.failed.push((id, err.to_string()));
                }
                Err(err) => {
                    tracing::warn!("Bulk transition task failed to run: {}", err);
                }
            }
        }

        Ok(outcome)
    }
}
