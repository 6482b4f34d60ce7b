use async_trait::async_trait;
use uuid::Uuid;

use crate::booking::{BookingError, BookingPolicy, BookingScope, StayDates};
use crate::database::models::{Booking, BookingDetails, Hotel};
use crate::types::Principal;

/// Persistence seam for the booking handlers.
///
/// `create_booking` and `update_booking` run the validator themselves so that
/// the reads it depends on and the write happen as one atomic unit.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, BookingError>;

    async fn list_bookings(&self, scope: BookingScope) -> Result<Vec<BookingDetails>, BookingError>;

    async fn find_booking(&self, id: Uuid) -> Result<Option<BookingDetails>, BookingError>;

    /// Check hotel, dates and the principal's booking count, then insert.
    async fn create_booking(
        &self,
        hotel_id: Uuid,
        principal: &Principal,
        stay: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Booking, BookingError>;

    /// Apply a partial date change. `Ok(None)` when the booking no longer exists.
    async fn update_booking(
        &self,
        id: Uuid,
        changes: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Option<Booking>, BookingError>;

    /// Returns whether a booking was removed
    async fn delete_booking(&self, id: Uuid) -> Result<bool, BookingError>;

    async fn health_check(&self) -> Result<(), BookingError>;

    /// Short label for logs and the health endpoint
    fn backend(&self) -> &'static str;
}
