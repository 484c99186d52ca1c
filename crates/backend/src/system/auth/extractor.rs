use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use chrono::Utc;
use contracts::system::auth::SessionContext;

use super::middleware::session_from_headers;
use crate::shared::data::store::AppState;
use crate::shared::error::AppError;

/// Session of the current request
/// Usage in handlers: `async fn handler(CurrentSession(session): CurrentSession) -> Response`
///
/// Taken from request extensions when `require_session` already ran,
/// otherwise read from the `Authorization` header.
pub struct CurrentSession(pub SessionContext);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<SessionContext>() {
            return Ok(CurrentSession(session.clone()));
        }
        let app = AppState::from_ref(state);
        session_from_headers(&parts.headers, &app.config.auth.jwt_secret, Utc::now()).map(CurrentSession)
    }
}

/// Gate for registry reads: passes when `auth.allow_anonymous_reads` is on,
/// otherwise requires an active session
pub struct ReadAccess;

#[async_trait]
impl<S> FromRequestParts<S> for ReadAccess
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = AppState::from_ref(state);
        if app.config.auth.allow_anonymous_reads {
            return Ok(ReadAccess);
        }
        CurrentSession::from_request_parts(parts, state).await?;
        Ok(ReadAccess)
    }
}
