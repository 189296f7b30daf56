use thiserror::Error;

/// Error taxonomy for the booking-approval service.
///
/// `NotFound` and `Validation` carry the exact message the API returns to the
/// client, so their Display passes the message through unchanged.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// Store failure while updating a single booking. The observed API maps
    /// this to 400 rather than 500, unlike list/bulk store failures.
    #[error("Failed to update booking: {0}")]
    Transition(eyre::Report),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
