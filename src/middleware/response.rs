use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Wrapper for API responses that automatically adds the success envelope:
/// `{ "success": true, "count"?: n, "data": ... }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub count: Option<usize>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response (200 OK)
    pub fn success(data: T) -> Self {
        Self { data, count: None }
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// Collection response carrying `count` alongside `data`
    pub fn listed(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            data,
            count: Some(count),
        }
    }
}

impl ApiResponse<Value> {
    /// `data: {}` for operations that leave nothing to return
    pub fn empty() -> Self {
        Self::success(Value::Object(Map::new()))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        // Convert data to JSON Value for consistent envelope format
        let data_value = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to serialize response data"
                    })),
                )
                    .into_response();
            }
        };

        let mut envelope = Map::new();
        envelope.insert("success".into(), Value::Bool(true));
        if let Some(count) = self.count {
            envelope.insert("count".into(), json!(count));
        }
        envelope.insert("data".into(), data_value);

        (StatusCode::OK, Json(Value::Object(envelope))).into_response()
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
