use axum::extract::{rejection::JsonRejection, Extension, Path, State};
use axum::Json;

use super::utils::{parse_id, read_body};
use crate::booking::{BookingError, BookingRequest};
use crate::database::models::Booking;
use crate::error::{ApiError, BookingResultExt};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::Principal;

/// POST /api/v1/hotels/:hotel_id/booking - book a stay for the caller
///
/// The owner is always the authenticated principal; hotel existence, dates,
/// stay length and the per-user limit are checked atomically with the insert.
pub async fn booking_create(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(hotel_id): Path<String>,
    body: Result<Json<BookingRequest>, JsonRejection>,
) -> ApiResult<Booking> {
    let hotel = parse_id(&hotel_id).ok_or_else(|| BookingError::hotel_not_found(&hotel_id))?;

    // An unknown hotel outranks any problem with the body
    let stay = match read_body(body).and_then(|request| request.parse().map_err(ApiError::from)) {
        Ok(stay) => stay,
        Err(input_error) => {
            state
                .store
                .find_hotel(hotel)
                .await
                .or_internal("Cannot create Booking")?
                .ok_or_else(|| BookingError::hotel_not_found(&hotel_id))?;
            return Err(input_error);
        }
    };

    let booking = state
        .store
        .create_booking(hotel, &principal, &stay, state.policy())
        .await
        .map_err(|err| {
            if !err.is_internal() {
                tracing::info!("Booking by {} at hotel {} rejected: {}", principal.id, hotel, err);
            }
            err
        })
        .or_internal("Cannot create Booking")?;

    Ok(ApiResponse::success(booking))
}
