use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::ServiceError;
use tracing::{error, warn};

/// Error returned by handlers; rendered as `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    BadRequest(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { ApiError::Service(e) }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self { ApiError::BadRequest(e.body_text()) }
}

impl From<PathRejection> for ApiError {
    fn from(e: PathRejection) -> Self { ApiError::BadRequest(e.body_text()) }
}

impl ApiError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Service(e) => match e {
                ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
                ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid credentials".into()),
                ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                ServiceError::Conflict(msg) => (StatusCode::CONFLICT, msg),
                other => {
                    error!(code = other.code(), error = %other, "request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".into())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %msg, "request rejected");
        }
        (status, Json(ErrorBody { error: msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Unauthorized, StatusCode::UNAUTHORIZED),
            (ServiceError::not_found("user"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Storage("disk".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Hash("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let (_, msg) = ApiError::from(ServiceError::Storage("/srv/data/users.json: denied".into())).status_and_message();
        assert_eq!(msg, "internal server error");
    }
}
