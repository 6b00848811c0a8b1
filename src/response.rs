use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tracing::error;

/// Serialize `payload` as the JSON response body with the given status.
///
/// Falls back to a plain-text 500 if the payload cannot be encoded.
pub fn send_success<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => (
            status,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode response payload");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode JSON").into_response()
        }
    }
}

/// Wrap `message` in the `{"error": ...}` envelope.
pub fn send_error(status: StatusCode, message: &str) -> Response {
    send_success(status, &json!({ "error": message }))
}
