use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a003_order::SectionErrors;
use contracts::shared::validation::FieldErrors;
use contracts::system::auth::{ApiError, SessionError};

/// Handler error rendered as an [`ApiError`] body
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid token")]
    InvalidToken,

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("order validation failed in {} section(s)", .0.len())]
    OrderValidation(SectionErrors),

    #[error("{0} not found")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Session(SessionError::Forbidden(_)) => (StatusCode::FORBIDDEN, "forbidden"),
            Self::Session(e) => (StatusCode::UNAUTHORIZED, e.code()),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "invalid_token"),
            Self::Validation(_) | Self::OrderValidation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_failed")
            }
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn body(&self) -> ApiError {
        let (_, code) = self.status_and_code();
        let message = match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };
        let body = ApiError::new(code, message);
        match self {
            Self::Validation(errors) => body.with_fields(serde_json::to_value(errors).unwrap_or_default()),
            Self::OrderValidation(errors) => {
                body.with_fields(serde_json::to_value(errors).unwrap_or_default())
            }
            _ => body,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        match &self {
            Self::Internal(e) => tracing::error!(error = %e, "internal server error"),
            Self::Session(e) => tracing::debug!(error = %e, "session rejected"),
            _ => {}
        }
        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn expired_session_maps_to_401() {
        let err = AppError::from(SessionError::Expired {
            expired_at: Utc::now(),
        });
        assert_eq!(err.status_and_code(), (StatusCode::UNAUTHORIZED, "session_expired"));
        assert_eq!(err.body().error, "session_expired");
    }

    #[test]
    fn validation_carries_fields() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "Name is required");
        let body = AppError::Validation(errors).body();
        assert_eq!(body.error, "validation_failed");
        assert_eq!(body.field_errors().unwrap().get("name"), Some("Name is required"));
    }

    #[test]
    fn internal_message_is_hidden() {
        let body = AppError::Internal(anyhow::anyhow!("lock poisoned")).body();
        assert_eq!(body.message, "An internal error occurred");
    }
}
