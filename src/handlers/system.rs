use axum::{extract::State, http::Uri, response::Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Hotel Booking API",
            "version": version,
            "endpoints": {
                "health": "/health (public)",
                "bookings": "/api/v1/bookings[/:id] (protected)",
                "hotel_bookings": "/api/v1/hotels/:hotelId/bookings (protected)",
                "create_booking": "/api/v1/hotels/:hotelId/booking (protected)",
            }
        }
    }))
}

/// GET /health - store connectivity
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let backend = state.store.backend();

    state.store.health_check().await.map_err(|e| {
        tracing::warn!("Health check failed for {} store: {}", backend, e);
        ApiError::service_unavailable(format!("{} store unavailable", backend))
    })?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "store": backend
        }
    })))
}

/// Fallback for unknown routes, keeping the JSON envelope
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} not found", uri.path()))
}
