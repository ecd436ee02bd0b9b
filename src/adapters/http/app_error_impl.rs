use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::InvalidInput(msg) => error_resp(StatusCode::BAD_REQUEST, msg),
            AppError::EmailDelivery(msg) => error_resp(StatusCode::BAD_GATEWAY, msg),
            // Never expose internals to the client.
            AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        }
    }
}

fn error_resp(status: StatusCode, message: String) -> Response {
    let body = serde_json::json!({ "error": message });
    (status, Json(body)).into_response()
}
