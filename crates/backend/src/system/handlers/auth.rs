use axum::Json;
use contracts::system::auth::SessionContext;

use crate::system::auth::extractor::CurrentSession;

/// GET /api/system/auth/session
///
/// Session behind the bearer token; the UI stores it and checks expiry
/// before each call.
pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<SessionContext> {
    Json(session)
}
