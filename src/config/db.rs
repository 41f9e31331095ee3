//! Database settings from `DB_*` environment variables.

use crate::config::non_empty;
use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Variables that must be set and non-empty for the process to start.
pub const REQUIRED_DB_VARS: [&str; 6] = [
    "DB_HOST",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_PORT",
    "DB_SSL_MODE",
];

#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    pub ssl_mode: PgSslMode,
    pub timezone: String,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Every missing required variable is reported at once.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let missing: Vec<&'static str> = REQUIRED_DB_VARS
            .iter()
            .copied()
            .filter(|name| non_empty(&lookup, name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        let get = |name: &str| non_empty(&lookup, name).unwrap_or_default();

        let port = get("DB_PORT")
            .parse::<u16>()
            .map_err(|e| ConfigError::Invalid {
                var: "DB_PORT",
                reason: e.to_string(),
            })?;
        let ssl_mode = PgSslMode::from_str(&get("DB_SSL_MODE")).map_err(|e| ConfigError::Invalid {
            var: "DB_SSL_MODE",
            reason: e.to_string(),
        })?;
        let max_connections = match non_empty(&lookup, "DB_MAX_CONNECTIONS") {
            Some(v) => v.parse::<u32>().map_err(|e| ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(DbConfig {
            host: get("DB_HOST"),
            user: get("DB_USER"),
            password: get("DB_PASSWORD"),
            name: get("DB_NAME"),
            port,
            ssl_mode,
            timezone: non_empty(&lookup, "DB_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into()),
            max_connections,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
            .options([("TimeZone", self.timezone.as_str())])
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .field("timezone", &self.timezone)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
