use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use contracts::system::auth::{SessionContext, SessionError};

use crate::shared::data::store::AppState;
use crate::shared::error::AppError;

/// Token from an `Authorization: Bearer ...` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Build the session of a request; missing, invalid and expired tokens are
/// distinct errors
pub fn session_from_headers(
    headers: &HeaderMap,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<SessionContext, AppError> {
    let token = bearer_token(headers).ok_or(SessionError::Missing)?;
    let claims = super::jwt::decode_claims(token, secret).map_err(|e| {
        tracing::debug!("rejected token: {:#}", e);
        AppError::InvalidToken
    })?;
    let session = SessionContext::from_claims(token, &claims);
    session.ensure_active(now)?;
    Ok(session)
}

/// Middleware that requires an active session.
/// The session is stored in request extensions for [`super::extractor::CurrentSession`].
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = session_from_headers(req.headers(), &state.config.auth.jwt_secret, Utc::now())?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::jwt::issue_token;
    use axum::http::HeaderValue;
    use chrono::Duration;
    use contracts::system::auth::Role;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("Basic abc")), None);
        assert_eq!(bearer_token(&headers("Bearer  ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn missing_and_expired_are_reported_separately() {
        let now = Utc::now();
        let missing = session_from_headers(&HeaderMap::new(), "k", now).unwrap_err();
        assert!(matches!(missing, AppError::Session(SessionError::Missing)));

        let token = issue_token("op", Role::Operator, Duration::minutes(-1), "k").unwrap();
        let expired = session_from_headers(&headers(&format!("Bearer {}", token)), "k", now).unwrap_err();
        assert!(matches!(expired, AppError::Session(SessionError::Expired { .. })));

        let bad = session_from_headers(&headers("Bearer not.a.jwt"), "k", now).unwrap_err();
        assert!(matches!(bad, AppError::InvalidToken));
    }

    #[test]
    fn valid_token_builds_session() {
        let token = issue_token("op", Role::Operator, Duration::minutes(10), "k").unwrap();
        let session = session_from_headers(&headers(&format!("Bearer {}", token)), "k", Utc::now()).unwrap();
        assert_eq!(session.user.username, "op");
        assert_eq!(session.role, Role::Operator);
        assert_eq!(session.access_token, token);
    }
}
