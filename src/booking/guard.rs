use uuid::Uuid;

use super::error::BookingError;
use crate::types::{Principal, Role};

/// Mutations the ownership guard protects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Update,
    Delete,
}

impl BookingAction {
    fn verb(&self) -> &'static str {
        match self {
            BookingAction::Update => "update",
            BookingAction::Delete => "delete",
        }
    }
}

/// Owners may act on their own bookings; admins on any booking.
pub fn authorize(owner_id: Uuid, principal: &Principal, action: BookingAction) -> Result<(), BookingError> {
    let permitted = match principal.role {
        Role::Admin => true,
        Role::User => principal.id == owner_id,
    };

    if permitted {
        Ok(())
    } else {
        tracing::warn!(
            "User {} denied {} on booking owned by {}",
            principal.id,
            action.verb(),
            owner_id
        );
        Err(BookingError::unauthorized(format!(
            "User {} is not authorized to {} this booking",
            principal.id,
            action.verb()
        )))
    }
}
