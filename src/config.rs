//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;

use anyhow::Context;

/// Top-level intake service configuration.
///
/// Loaded once at startup via [`IntakeConfig::from_env`].
#[derive(Debug, Clone)]
pub struct IntakeConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// PostgreSQL connection string. When unset the service runs on the
    /// seeded in-memory stores (useful for local development and demos).
    pub database_url: Option<String>,

    /// Maximum number of database connections in the pool.
    pub database_max_connections: u32,

    /// Minimum idle connections in the pool.
    pub database_min_connections: u32,

    /// Timeout in seconds for acquiring a database connection.
    pub database_connect_timeout_secs: u64,

    /// Public base URL of the site, used to build redirect URLs.
    pub site_url: String,

    /// Payment provider secret key.
    pub stripe_secret_key: String,

    /// Payment provider API base. Overridable so tests can point at a stub.
    pub stripe_api_base: String,

    /// ISO currency code for checkout sessions, lowercase.
    pub checkout_currency: String,

    /// Locale used for redirect URLs when the request does not carry one.
    pub default_locale: String,
}

impl IntakeConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        let database_url = std::env::var("DATABASE_URL").ok();

        let database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS", 10);
        let database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS", 2);
        let database_connect_timeout_secs = parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5);

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").unwrap_or_default();
        let stripe_api_base = std::env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string());

        let checkout_currency =
            std::env::var("CHECKOUT_CURRENCY").unwrap_or_else(|_| "usd".to_string());
        let default_locale = std::env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string());

        Ok(Self {
            listen_addr,
            database_url,
            database_max_connections,
            database_min_connections,
            database_connect_timeout_secs,
            site_url,
            stripe_secret_key,
            stripe_api_base,
            checkout_currency,
            default_locale,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
