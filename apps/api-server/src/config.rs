//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use codeshare_core::domain::DEFAULT_SHARE_ID_LENGTH;
use codeshare_core::services::CategoryPolicy;
use codeshare_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub migrate_on_start: bool,
    pub share_id_length: usize,
    pub category_policy: CategoryPolicy,
    /// Largest accepted `POST /share` body.
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            max_connections: parse_var("DB_MAX_CONNECTIONS", 100),
            min_connections: parse_var("DB_MIN_CONNECTIONS", 10),
            connect_timeout: Duration::from_secs(parse_var("DB_CONNECT_TIMEOUT_SECS", 10)),
            sqlx_logging: flag_var("DB_SQL_LOGGING", false),
            ..DatabaseConfig::new(url)
        });

        let category_policy = if flag_var("STRICT_CATEGORIES", false) {
            CategoryPolicy::Strict
        } else {
            CategoryPolicy::Permissive
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            migrate_on_start: flag_var("MIGRATE_ON_START", false),
            share_id_length: parse_var("SHARE_ID_LENGTH", DEFAULT_SHARE_ID_LENGTH),
            category_policy,
            max_body_bytes: parse_var("MAX_BODY_BYTES", 10 * 1024 * 1024),
        }
    }
}

/// Parse a variable, falling back to `default` when unset or malformed.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// `true`/`1` enable, `false`/`0` disable, anything else keeps the default.
fn flag_var(key: &str, default: bool) -> bool {
    match env::var(key).map(|v| v.to_lowercase()) {
        Ok(v) if v == "true" || v == "1" => true,
        Ok(v) if v == "false" || v == "0" => false,
        _ => default,
    }
}
