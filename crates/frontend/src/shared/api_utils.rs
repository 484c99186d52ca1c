//! API utilities for frontend-backend communication
//!
//! Every call that needs credentials takes the [`SessionContext`] explicitly
//! and checks it before touching the network, so an expired session shows up
//! as [`ApiFailure::Session`] instead of a bare 401.

use chrono::Utc;
use contracts::system::auth::{ApiError, SessionContext, SessionError};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiFailure {
    /// Rejected locally or by the server because of the session
    Session(SessionError),
    /// Server answered with an error body
    Api { status: u16, error: ApiError },
    Network(String),
}

impl ApiFailure {
    pub fn message(&self) -> String {
        match self {
            ApiFailure::Session(SessionError::Missing) => "Sign in to continue".to_string(),
            ApiFailure::Session(SessionError::Expired { expired_at }) => format!(
                "Your session expired at {}. Sign in again to continue.",
                expired_at.format("%Y-%m-%d %H:%M")
            ),
            ApiFailure::Session(e) => e.to_string(),
            ApiFailure::Api { error, .. } => error.message.clone(),
            ApiFailure::Network(e) => format!("Network error: {}", e),
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ApiFailure::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}

fn authorized(builder: RequestBuilder, session: Option<&SessionContext>) -> Result<RequestBuilder, ApiFailure> {
    match session {
        None => Ok(builder),
        Some(s) => {
            let token = s.ensure_active(Utc::now()).map_err(ApiFailure::Session)?;
            Ok(builder.header("Authorization", &format!("Bearer {}", token)))
        }
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    let status = response.status();
    if !response.ok() {
        let error = response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::new("http_error", format!("HTTP {}", status)));
        return Err(match error.error.as_str() {
            "session_missing" => ApiFailure::Session(SessionError::Missing),
            _ => ApiFailure::Api { status, error },
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiFailure::Network(format!("Failed to parse response: {}", e)))
}

/// GET `path`; `session` is attached when given
pub async fn get_json<T: DeserializeOwned>(path: &str, session: Option<&SessionContext>) -> Result<T, ApiFailure> {
    let builder = authorized(Request::get(&api_url(path)), session)?;
    let response = builder
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;
    read_response(response).await
}

/// POST `body` as JSON to `path`
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    session: Option<&SessionContext>,
) -> Result<T, ApiFailure> {
    let builder = authorized(Request::post(&api_url(path)), session)?;
    let response = builder
        .json(body)
        .map_err(|e| ApiFailure::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::Network(e.to_string()))?;
    read_response(response).await
}
