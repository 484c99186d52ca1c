use contracts::system::auth::SessionContext;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchange a bearer token for the session it represents
pub async fn fetch_session(access_token: &str) -> Result<SessionContext, String> {
    let response = Request::get(&api_url("/api/system/auth/session"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Token rejected: {}", response.status()));
    }

    response
        .json::<SessionContext>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
