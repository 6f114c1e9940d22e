//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roster_domain::error::RosterError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

/// Maps [`RosterError`] and body rejections to an HTTP response.
pub enum ApiError {
    /// An application operation failed.
    Domain(RosterError),
    /// The request body could not be decoded.
    Payload(JsonRejection),
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::Payload(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, field) = match &self {
            Self::Domain(RosterError::Validation(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), Some(err.field()))
            }
            Self::Domain(RosterError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string(), None),
            // Cause text is returned verbatim.
            Self::Domain(err @ RosterError::Storage(_)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None)
            }
            Self::Payload(rejection) => (rejection.status(), rejection.body_text(), None),
        };

        (status, Json(ErrorBody { error, field })).into_response()
    }
}
