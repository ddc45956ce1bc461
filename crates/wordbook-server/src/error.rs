use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use wordbook_core::LookupError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Lookup failure rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            LookupError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            LookupError::NotFound(_) => StatusCode::NOT_FOUND,
            LookupError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            LookupError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Lookup failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
