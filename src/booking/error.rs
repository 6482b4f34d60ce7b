use thiserror::Error;

/// Booking domain errors. Every variant maps onto one HTTP status at the handler boundary.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Missing or malformed request data (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Well-formed request that breaks a business rule (400)
    #[error("{0}")]
    PolicyViolation(String),

    #[error("{0}")]
    NotFound(String),

    /// Ownership or role mismatch (401)
    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl BookingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        BookingError::InvalidInput(message.into())
    }

    pub fn policy_violation(message: impl Into<String>) -> Self {
        BookingError::PolicyViolation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        BookingError::Unauthorized(message.into())
    }

    pub fn booking_not_found(id: impl std::fmt::Display) -> Self {
        BookingError::NotFound(format!("No booking with the id of {}", id))
    }

    pub fn hotel_not_found(id: impl std::fmt::Display) -> Self {
        BookingError::NotFound(format!("No hotel with the id of {}", id))
    }

    /// True for failures the caller did not cause
    pub fn is_internal(&self) -> bool {
        matches!(self, BookingError::Internal(_) | BookingError::Database(_))
    }
}
