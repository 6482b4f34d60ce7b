use axum::extract::{rejection::JsonRejection, Extension, Path, State};
use axum::Json;

use super::utils::{parse_id, read_body};
use crate::booking::{authorize, BookingAction, BookingError, BookingRequest};
use crate::database::models::Booking;
use crate::error::BookingResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::Principal;

/// PUT /api/v1/bookings/:id - change the dates of a booking (owner or admin)
pub async fn booking_update(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<Booking> {
    let booking_id = parse_id(&id).ok_or_else(|| BookingError::booking_not_found(&id))?;

    let existing = state
        .store
        .find_booking(booking_id)
        .await
        .or_internal("Cannot update Booking")?
        .ok_or_else(|| BookingError::booking_not_found(&id))?;

    authorize(existing.user_id, &principal, BookingAction::Update)?;

    let changes = read_body(body)?.parse()?;
    let updated = state
        .store
        .update_booking(booking_id, &changes, state.policy())
        .await
        .or_internal("Cannot update Booking")?
        .ok_or_else(|| BookingError::booking_not_found(&id))?;

    tracing::info!("Booking {} updated by {}", updated.id, principal.id);
    Ok(ApiResponse::success(updated))
}
