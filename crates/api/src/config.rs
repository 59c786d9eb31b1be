use std::path::PathBuf;
use std::time::Duration;

use skillsync_chat::relay::{parse_models, DEFAULT_BASE_URL, DEFAULT_MODELS};
use skillsync_chat::ChatConfig;

use crate::auth::jwt::JwtConfig;

/// Default minimum password length for registration.
const DEFAULT_PASSWORD_MIN_LENGTH: usize = 8;
/// Default access token lifetime in minutes.
const DEFAULT_ACCESS_TTL_MINS: i64 = 15;
/// Default refresh token lifetime in days.
const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Minimum password length accepted at registration (default: `8`).
    pub password_min_length: usize,
    /// Optional replacement for the embedded skill catalog.
    pub catalog_path: Option<PathBuf>,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Upstream chat API settings.
    pub chat: ChatConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PASSWORD_MIN_LENGTH`  | `8`                        |
    /// | `SKILL_CATALOG_PATH`   | embedded catalog           |
    ///
    /// Token and chat settings are documented on [`jwt_config_from_env`] and
    /// [`chat_config_from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let password_min_length: usize = std::env::var("PASSWORD_MIN_LENGTH")
            .unwrap_or_else(|_| DEFAULT_PASSWORD_MIN_LENGTH.to_string())
            .parse()
            .expect("PASSWORD_MIN_LENGTH must be a valid usize");

        let catalog_path = std::env::var("SKILL_CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            password_min_length,
            catalog_path,
            jwt: jwt_config_from_env(),
            chat: chat_config_from_env(),
        }
    }
}

/// Load the token signing settings.
///
/// | Env Var                   | Default  |
/// |---------------------------|----------|
/// | `JWT_SECRET`              | required |
/// | `JWT_ACCESS_EXPIRY_MINS`  | `15`     |
/// | `JWT_REFRESH_EXPIRY_DAYS` | `7`      |
///
/// # Panics
///
/// Panics if `JWT_SECRET` is unset or blank, or a lifetime is not a
/// positive integer.
pub fn jwt_config_from_env() -> JwtConfig {
    let secret = std::env::var("JWT_SECRET")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .expect("JWT_SECRET must be set to a non-empty value");

    let access_mins = positive_env("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_TTL_MINS);
    let refresh_days = positive_env("JWT_REFRESH_EXPIRY_DAYS", DEFAULT_REFRESH_TTL_DAYS);

    JwtConfig {
        secret,
        access_ttl: chrono::Duration::minutes(access_mins),
        refresh_ttl: chrono::Duration::days(refresh_days),
    }
}

fn positive_env(name: &str, default: i64) -> i64 {
    let value: i64 = std::env::var(name)
        .map(|raw| raw.parse().unwrap_or_else(|_| panic!("{name} must be an integer")))
        .unwrap_or(default);
    assert!(value > 0, "{name} must be positive");
    value
}

/// Load the chat relay settings.
///
/// | Env Var             | Default                                            |
/// |---------------------|----------------------------------------------------|
/// | `CHAT_API_KEY`      | unset (relay disabled)                             |
/// | `CHAT_API_BASE_URL` | `https://generativelanguage.googleapis.com/v1beta` |
/// | `CHAT_MODELS`       | `gemini-1.5-flash,gemini-1.5-pro,gemini-pro`       |
/// | `CHAT_TIMEOUT_SECS` | `20`                                               |
pub fn chat_config_from_env() -> ChatConfig {
    let api_key = std::env::var("CHAT_API_KEY")
        .ok()
        .filter(|s| !s.trim().is_empty());

    let base_url =
        std::env::var("CHAT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

    let models = std::env::var("CHAT_MODELS")
        .map(|raw| parse_models(&raw))
        .unwrap_or_else(|_| DEFAULT_MODELS.iter().map(|m| m.to_string()).collect());

    let timeout_secs: u64 = std::env::var("CHAT_TIMEOUT_SECS")
        .unwrap_or_else(|_| "20".into())
        .parse()
        .expect("CHAT_TIMEOUT_SECS must be a valid u64");

    if api_key.is_none() {
        tracing::warn!("CHAT_API_KEY is not set; the chat relay is disabled");
    }

    ChatConfig {
        api_key,
        base_url,
        models,
        timeout: Duration::from_secs(timeout_secs),
    }
}
