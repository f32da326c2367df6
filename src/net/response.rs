use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Error half of every handler: an already-rendered `{ "ok": false }`
/// envelope with the right status code.
pub struct ResponseError(Response);

impl IntoResponse for ResponseError {
    fn into_response(self) -> Response {
        self.0
    }
}

impl<E> From<E> for ResponseError
where
    E: Into<color_eyre::eyre::Error>,
{
    fn from(value: E) -> Self {
        let report = Into::<color_eyre::eyre::Error>::into(value);
        error!("unhandled error in request handler: {report:#}");
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, report.to_string())
    }
}

impl ResponseError {
    pub fn with_status(status_code: StatusCode, message: impl Into<String>) -> Self {
        let body = json!({ "ok": false, "error": message.into() });
        ResponseError((status_code, Json(body)).into_response())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_GATEWAY, message)
    }
}

pub type Result<T, E = ResponseError> = axum::response::Result<T, E>;
