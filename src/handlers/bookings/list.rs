use axum::extract::{Extension, Path, State};

use super::utils::parse_id;
use crate::booking::{BookingError, BookingScope};
use crate::database::models::BookingDetails;
use crate::error::BookingResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::Principal;

/// GET /api/v1/bookings - bookings visible to the caller
pub async fn bookings_list(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> ApiResult<Vec<BookingDetails>> {
    list_scoped(&state, BookingScope::for_principal(&principal, None)).await
}

/// GET /api/v1/hotels/:hotel_id/bookings - same listing; admins get it filtered to the hotel
pub async fn hotel_bookings_list(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(hotel_id): Path<String>,
) -> ApiResult<Vec<BookingDetails>> {
    // Only admins filter by hotel, so only they get an error for a malformed id
    let hotel = if principal.role.is_admin() {
        Some(parse_id(&hotel_id).ok_or_else(|| BookingError::hotel_not_found(&hotel_id))?)
    } else {
        None
    };
    list_scoped(&state, BookingScope::for_principal(&principal, hotel)).await
}

async fn list_scoped(state: &AppState, scope: BookingScope) -> ApiResult<Vec<BookingDetails>> {
    let bookings = state.store.list_bookings(scope).await.or_internal("Cannot find Booking")?;
    tracing::debug!("Listed {} bookings for {:?}", bookings.len(), scope);
    Ok(ApiResponse::listed(bookings))
}
