use axum::extract::{Extension, Path, State};
use serde_json::Value;

use super::utils::parse_id;
use crate::booking::{authorize, BookingAction, BookingError};
use crate::error::BookingResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::Principal;

/// DELETE /api/v1/bookings/:id - remove a booking (owner or admin)
pub async fn booking_delete(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> ApiResult<Value> {
    let booking_id = parse_id(&id).ok_or_else(|| BookingError::booking_not_found(&id))?;

    let existing = state
        .store
        .find_booking(booking_id)
        .await
        .or_internal("Cannot delete Booking")?
        .ok_or_else(|| BookingError::booking_not_found(&id))?;

    authorize(existing.user_id, &principal, BookingAction::Delete)?;

    let removed = state
        .store
        .delete_booking(booking_id)
        .await
        .or_internal("Cannot delete Booking")?;
    if !removed {
        return Err(BookingError::booking_not_found(&id).into());
    }

    tracing::info!("Booking {} deleted by {}", booking_id, principal.id);
    Ok(ApiResponse::empty())
}
