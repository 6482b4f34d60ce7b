use axum::extract::{Path, State};

use super::utils::parse_id;
use crate::booking::BookingError;
use crate::database::models::BookingDetails;
use crate::error::BookingResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/v1/bookings/:id - single booking with its hotel
pub async fn booking_get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<BookingDetails> {
    let booking_id = parse_id(&id).ok_or_else(|| BookingError::booking_not_found(&id))?;

    let booking = state
        .store
        .find_booking(booking_id)
        .await
        .or_internal("Cannot find Booking")?
        .ok_or_else(|| BookingError::booking_not_found(&id))?;

    Ok(ApiResponse::success(booking))
}
