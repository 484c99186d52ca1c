use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use contracts::system::auth::{Role, TokenClaims};

use crate::shared::config::AuthConfig;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Lifetime of the development token logged at startup
pub const DEV_TOKEN_LIFETIME_HOURS: i64 = 24;

/// Sign `claims` with the shared secret (HS256)
pub fn encode_claims(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

/// Token for `username` valid for `lifetime` from now
pub fn issue_token(username: &str, role: Role, lifetime: Duration, secret: &str) -> Result<String> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: format!("dev-{}", username),
        username: username.to_string(),
        role,
        exp: (now + lifetime).timestamp().max(0) as usize,
        iat: now.timestamp().max(0) as usize,
    };
    encode_claims(&claims, secret)
}

/// Manager token for `dev_token_user`, logged at startup; `None` when the
/// option is unset
pub fn development_token(auth: &AuthConfig) -> Result<Option<String>> {
    let Some(user) = auth.dev_token_user.as_deref() else {
        return Ok(None);
    };
    issue_token(
        user,
        Role::Manager,
        Duration::hours(DEV_TOKEN_LIFETIME_HOURS),
        &auth.jwt_secret,
    )
    .map(Some)
}

/// Check the signature and extract claims.
///
/// Expiry is not checked here; callers turn the claims into a
/// `SessionContext` and ask it, so an expired token is reported as
/// `session_expired` rather than as a bad token.
pub fn decode_claims(token: &str, secret: &str) -> Result<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_with_same_secret() {
        let token = issue_token("maria", Role::Manager, Duration::hours(1), "s3cret").unwrap();
        let claims = decode_claims(&token, "s3cret").unwrap();
        assert_eq!(claims.username, "maria");
        assert_eq!(claims.role, Role::Manager);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token("maria", Role::Manager, Duration::hours(1), "s3cret").unwrap();
        assert!(decode_claims(&token, "other").is_err());
    }

    fn auth(dev_token_user: Option<&str>) -> AuthConfig {
        AuthConfig {
            jwt_secret: "s3cret".into(),
            allow_anonymous_reads: true,
            dev_token_user: dev_token_user.map(str::to_string),
        }
    }

    #[test]
    fn no_development_token_unless_configured() {
        assert!(development_token(&auth(None)).unwrap().is_none());
    }

    #[test]
    fn development_token_is_a_day_long_manager_session() {
        let token = development_token(&auth(Some("dev"))).unwrap().unwrap();
        let claims = decode_claims(&token, "s3cret").unwrap();
        assert_eq!(claims.username, "dev");
        assert_eq!(claims.role, Role::Manager);
        assert_eq!(claims.exp - claims.iat, (DEV_TOKEN_LIFETIME_HOURS * 3600) as usize);
    }

    #[test]
    fn expired_token_still_decodes() {
        let token = issue_token("maria", Role::Manager, Duration::hours(-2), "s3cret").unwrap();
        assert!(decode_claims(&token, "s3cret").is_ok());
    }
}
