use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::booking::{
    validate_new_booking, validate_stay_change, BookingError, BookingFacts, BookingPolicy, BookingScope,
    StayDates,
};
use crate::database::models::{Booking, BookingDetails, Hotel, HotelSummary};
use crate::database::store::BookingStore;
use crate::types::Principal;

#[derive(Default)]
struct MemoryState {
    hotels: HashMap<Uuid, Hotel>,
    /// Kept in insertion order so listings are stable
    bookings: Vec<Booking>,
}

impl MemoryState {
    fn details(&self, booking: &Booking) -> Result<BookingDetails, BookingError> {
        let hotel = self.hotels.get(&booking.hotel_id).ok_or_else(|| {
            BookingError::Internal(format!(
                "booking {} references missing hotel {}",
                booking.id, booking.hotel_id
            ))
        })?;
        Ok(BookingDetails::new(booking, HotelSummary::from(hotel)))
    }
}

/// Process-local store for tests and `serve --memory`.
/// Every mutation holds the write lock for its whole check-then-write sequence.
#[derive(Clone, Default)]
pub struct MemoryBookingStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_hotels(hotels: impl IntoIterator<Item = Hotel>) -> Self {
        let store = Self::new();
        for hotel in hotels {
            store.insert_hotel(hotel).await;
        }
        store
    }

    pub async fn insert_hotel(&self, hotel: Hotel) {
        let mut state = self.state.write().await;
        state.hotels.insert(hotel.id, hotel);
    }

    pub async fn booking_count(&self) -> usize {
        self.state.read().await.bookings.len()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_hotel(&self, id: Uuid) -> Result<Option<Hotel>, BookingError> {
        Ok(self.state.read().await.hotels.get(&id).cloned())
    }

    async fn list_bookings(&self, scope: BookingScope) -> Result<Vec<BookingDetails>, BookingError> {
        let state = self.state.read().await;
        state
            .bookings
            .iter()
            .filter(|b| scope.matches(b.hotel_id, b.user_id))
            .map(|b| state.details(b))
            .collect()
    }

    async fn find_booking(&self, id: Uuid) -> Result<Option<BookingDetails>, BookingError> {
        let state = self.state.read().await;
        state
            .bookings
            .iter()
            .find(|b| b.id == id)
            .map(|b| state.details(b))
            .transpose()
    }

    async fn create_booking(
        &self,
        hotel_id: Uuid,
        principal: &Principal,
        stay: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Booking, BookingError> {
        let mut state = self.state.write().await;

        let existing_bookings = state.bookings.iter().filter(|b| b.user_id == principal.id).count() as i64;
        let facts = BookingFacts {
            hotel_id,
            hotel_exists: state.hotels.contains_key(&hotel_id),
            principal,
            existing_bookings,
        };
        let accepted = validate_new_booking(stay, &facts, policy)?;

        let booking = Booking::new(hotel_id, principal.id, accepted);
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update_booking(
        &self,
        id: Uuid,
        changes: &StayDates,
        policy: &BookingPolicy,
    ) -> Result<Option<Booking>, BookingError> {
        let mut state = self.state.write().await;

        let Some(booking) = state.bookings.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };

        let accepted = validate_stay_change(&booking.stay(), changes, policy)?;
        booking.check_in_date = accepted.check_in;
        booking.check_out_date = accepted.check_out;
        Ok(Some(booking.clone()))
    }

    async fn delete_booking(&self, id: Uuid) -> Result<bool, BookingError> {
        let mut state = self.state.write().await;
        let before = state.bookings.len();
        state.bookings.retain(|b| b.id != id);
        Ok(state.bookings.len() < before)
    }

    async fn health_check(&self) -> Result<(), BookingError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
