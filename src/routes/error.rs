use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;
use crate::core::CoreError;
use crate::models::ErrorResponse;
use crate::services::AuthError;

/// Error type returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Core(CoreError::Validation(_)) => "validation_error",
            ApiError::Core(CoreError::Conflict(_)) => "conflict",
            ApiError::Core(CoreError::NotFound(_)) => "not_found",
            ApiError::Core(CoreError::Authorization(_)) => "forbidden",
            ApiError::Auth(AuthError::Hashing(_) | AuthError::TokenEncoding(_)) => "internal_error",
            ApiError::Auth(_) => "unauthorized",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl From<error::BlockingError> for ApiError {
    fn from(err: error::BlockingError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Core(CoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Core(CoreError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Core(CoreError::Authorization(_)) => StatusCode::FORBIDDEN,
            ApiError::Auth(AuthError::Hashing(_) | AuthError::TokenEncoding(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status.as_u16(), self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }

        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Error for malformed request payloads, rendered with the shared error body
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PayloadError {
    error: &'static str,
    message: String,
    status: StatusCode,
}

impl ResponseError for PayloadError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorResponse {
            error: self.error.to_string(),
            message: self.message.clone(),
            status_code: self.status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
///
/// Well-formed JSON whose fields have the wrong shape is a validation error;
/// anything else is reported as invalid JSON.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    match err {
        error::JsonPayloadError::Deserialize(err) if err.is_data() => {
            ApiError::Core(CoreError::Validation(err.to_string())).into()
        }
        err => PayloadError {
            error: "invalid_json",
            message: format!("Invalid JSON: {}", err),
            status: StatusCode::BAD_REQUEST,
        }
        .into(),
    }
}

/// Handle query payload errors
pub fn handle_query_payload_error(
    err: error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    PayloadError {
        error: "invalid_query",
        message: format!("Invalid query: {}", err),
        status: StatusCode::BAD_REQUEST,
    }
    .into()
}

/// Handle unparseable path segments, such as a non-numeric profile id
pub fn handle_path_error(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
    PayloadError {
        error: "not_found",
        message: format!("Not found: {}", err),
        status: StatusCode::NOT_FOUND,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status_codes() {
        let cases = [
            (CoreError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (CoreError::Conflict("x".into()), StatusCode::CONFLICT),
            (CoreError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (CoreError::Authorization("x".into()), StatusCode::FORBIDDEN),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        assert_eq!(
            ApiError::from(AuthError::MissingToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::InvalidCredentials).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::Hashing("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
