use uuid::Uuid;

use crate::types::{Principal, Role};

/// Which bookings a listing may return. The store turns this into its own filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingScope {
    All,
    Hotel(Uuid),
    User(Uuid),
}

impl BookingScope {
    /// Non-admins only ever see their own bookings; a hotel filter is an admin privilege.
    pub fn for_principal(principal: &Principal, hotel_id: Option<Uuid>) -> Self {
        match principal.role {
            Role::User => BookingScope::User(principal.id),
            Role::Admin => match hotel_id {
                Some(hotel_id) => BookingScope::Hotel(hotel_id),
                None => BookingScope::All,
            },
        }
    }

    pub fn matches(&self, hotel_id: Uuid, user_id: Uuid) -> bool {
        match self {
            BookingScope::All => true,
            BookingScope::Hotel(id) => *id == hotel_id,
            BookingScope::User(id) => *id == user_id,
        }
    }
}
