//! Runtime configuration
//!
//! Read once at startup from the process environment, with `config.env` and
//! `.env` loaded first when present.

use std::env;
use std::time::Duration;

const DEFAULT_APP_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 50;
const DEFAULT_CONNECT_ATTEMPTS: u32 = 10;
const DEFAULT_CONNECT_RETRY_SECS: u64 = 2;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on (all interfaces)
    pub app_port: u16,
    /// PostgreSQL URL, either `DATABASE_URL` or assembled from `DB_*` parts
    pub database_url: String,
    /// Connection pool size
    pub db_max_connections: u32,
    /// How many times startup tries to reach the database
    pub db_connect_attempts: u32,
    /// Pause between startup connection attempts
    pub db_connect_retry_delay: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        // config.env takes precedence over .env; both are optional
        if dotenvy::from_filename("config.env").is_err() {
            tracing::debug!("config.env not found, using process environment");
        }
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            database_url_from_parts(
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_NAME").unwrap_or_else(|_| "wallet".to_string()),
                &env::var("DB_SSLMODE").unwrap_or_else(|_| "disable".to_string()),
            )
        });

        Self {
            app_port: parse_or("APP_PORT", DEFAULT_APP_PORT),
            database_url,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS),
            db_connect_attempts: parse_or("DB_CONNECT_ATTEMPTS", DEFAULT_CONNECT_ATTEMPTS),
            db_connect_retry_delay: Duration::from_secs(parse_or(
                "DB_CONNECT_RETRY_SECS",
                DEFAULT_CONNECT_RETRY_SECS,
            )),
        }
    }
}

/// Read a numeric variable, falling back to `default` when unset or malformed
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Build a postgres URL from its parts. Credentials are percent-encoded.
pub fn database_url_from_parts(
    host: &str,
    port: &str,
    user: &str,
    password: &str,
    name: &str,
    sslmode: &str,
) -> String {
    format!(
        "postgres://{}:{}@{}:{}/{}?sslmode={}",
        urlencoding::encode(user),
        urlencoding::encode(password),
        host,
        port,
        name,
        sslmode
    )
}
