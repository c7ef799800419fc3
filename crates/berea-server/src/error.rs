use axum::Json;
use axum::response::{IntoResponse, Response};
use berea_core::HttpError;

/// Convert a domain error to a JSON error response
pub fn error_response<E: HttpError>(error: &E) -> Response {
    let status = error.status_code();
    let body = serde_json::json!({
        "error": {
            "message": error.client_message(),
            "type": error.error_type(),
        }
    });

    (status, Json(body)).into_response()
}
