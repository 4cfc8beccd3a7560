use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No data provided")]
    MissingData,
    #[error("{0}")]
    InvalidRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("rejecting request: {self}");
        match self {
            // The form route answers in plain text
            ApiError::MissingData => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            ApiError::InvalidRequest(_) => {
                let body = axum::Json(json!({ "error": self.to_string(), "success": false }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}
