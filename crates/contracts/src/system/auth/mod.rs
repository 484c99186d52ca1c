use crate::shared::validation::FieldErrors;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Operator,
    /// Read-only walkthrough account
    Demo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ManageCustomers,
    ManageVendors,
    CreateOrders,
    ViewDashboard,
}

impl Role {
    pub fn default_permissions(&self) -> Vec<Permission> {
        match self {
            Role::Admin | Role::Manager => vec![
                Permission::ManageCustomers,
                Permission::ManageVendors,
                Permission::CreateOrders,
                Permission::ViewDashboard,
            ],
            Role::Operator => vec![Permission::CreateOrders, Permission::ViewDashboard],
            Role::Demo => vec![Permission::ViewDashboard],
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Role::Demo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("not signed in")]
    Missing,
    #[error("session expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },
    #[error("permission {0:?} is not granted")]
    Forbidden(Permission),
}

impl SessionError {
    /// Stable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::Missing => "session_missing",
            SessionError::Expired { .. } => "session_expired",
            SessionError::Forbidden(_) => "forbidden",
        }
    }
}

/// Signed-in user as seen by the UI and the request handlers.
/// Passed explicitly wherever a call needs credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub access_token: String,
    pub user: UserInfo,
    pub role: Role,
    pub permissions: Vec<Permission>,
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(
        access_token: impl Into<String>,
        user: UserInfo,
        role: Role,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            user,
            role,
            permissions: role.default_permissions(),
            expires_at,
        }
    }

    /// Rebuild a session from decoded token claims
    pub fn from_claims(access_token: impl Into<String>, claims: &TokenClaims) -> Self {
        let expires_at = Utc
            .timestamp_opt(claims.exp as i64, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        let user = UserInfo {
            id: claims.sub.clone(),
            username: claims.username.clone(),
            full_name: None,
            email: None,
            role: claims.role,
        };
        Self::new(access_token, user, claims.role, expires_at)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Token to attach to an outgoing request
    pub fn ensure_active(&self, now: DateTime<Utc>) -> Result<&str, SessionError> {
        if self.access_token.is_empty() {
            return Err(SessionError::Missing);
        }
        if self.is_expired(now) {
            return Err(SessionError::Expired {
                expired_at: self.expires_at,
            });
        }
        Ok(&self.access_token)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    pub fn authorize(&self, permission: Permission, now: DateTime<Utc>) -> Result<&str, SessionError> {
        let token = self.ensure_active(now)?;
        if !self.has_permission(permission) {
            return Err(SessionError::Forbidden(permission));
        }
        Ok(token)
    }
}

/// Token of an optional session; a missing session is [`SessionError::Missing`]
pub fn ensure_session(session: Option<&SessionContext>, now: DateTime<Utc>) -> Result<&str, SessionError> {
    session.ok_or(SessionError::Missing)?.ensure_active(now)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: Role,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Error body returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: serde_json::Value) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Flat field errors carried in `fields`, if they have that shape
    pub fn field_errors(&self) -> Option<FieldErrors> {
        self.fields
            .clone()
            .and_then(|v| serde_json::from_value(v).ok())
    }
}

impl From<&SessionError> for ApiError {
    fn from(e: &SessionError) -> Self {
        ApiError::new(e.code(), e.to_string())
    }
}
