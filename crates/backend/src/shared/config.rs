use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Registry lists and lookups without a session
    #[serde(default = "default_true")]
    pub allow_anonymous_reads: bool,
    /// When set, a development token for this user is logged at startup
    #[serde(default)]
    pub dev_token_user: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    #[serde(default = "default_true")]
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Env var that overrides `auth.jwt_secret`
pub const JWT_SECRET_ENV: &str = "APP_JWT_SECRET";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[auth]
jwt_secret = "change-me-in-production"
allow_anonymous_reads = true

[cors]
allow_any_origin = true
"#;

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}: {}", addr, e))
    }

    /// Embedded default, without file or env overrides
    pub fn embedded() -> anyhow::Result<Self> {
        Ok(toml::from_str(DEFAULT_CONFIG)?)
    }

    fn apply_env(mut self) -> Self {
        if let Ok(secret) = std::env::var(JWT_SECRET_ENV) {
            if !secret.trim().is_empty() {
                tracing::info!("JWT secret taken from {}", JWT_SECRET_ENV);
                self.auth.jwt_secret = secret;
            }
        }
        self
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `APP_JWT_SECRET` overrides the secret in either case.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config.apply_env());
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(Config::embedded()?.apply_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = Config::embedded().unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.auth.allow_anonymous_reads);
        assert!(config.auth.dev_token_user.is_none());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn optional_sections_default() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [auth]
            jwt_secret = "s"
            "#,
        )
        .unwrap();
        assert!(config.cors.allow_any_origin);
        assert!(config.auth.allow_anonymous_reads);
    }

    #[test]
    fn bad_host_is_an_error() {
        let mut config = Config::embedded().unwrap();
        config.server.host = "not a host".into();
        assert!(config.socket_addr().is_err());
    }
}
