use axum::extract::rejection::JsonRejection;
use axum::Json;
use uuid::Uuid;

use crate::booking::BookingRequest;
use crate::error::ApiError;

/// Path ids that are not UUIDs cannot name an existing record
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Unwrap the JSON body, treating a request without a JSON content type as empty
/// so the validator can report the missing dates in its usual order.
pub fn read_body(body: Result<Json<BookingRequest>, JsonRejection>) -> Result<BookingRequest, ApiError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(BookingRequest::default()),
        Err(rejection) => Err(ApiError::invalid_json(rejection.body_text())),
    }
}
