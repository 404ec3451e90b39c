//! Database connection settings read from `DB_*` environment variables.
//!
//! Environment variables:
//!   DB_HOST      # required
//!   DB_PORT      # required, 0-65535
//!   DB_USER      # required
//!   DB_PASS      # optional, may be empty
//!   DB_NAME      # required
//!   DB_SSLMODE   # optional (default: prefer)

use std::fmt;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASS: &str = "DB_PASS";
pub const ENV_NAME: &str = "DB_NAME";
pub const ENV_SSLMODE: &str = "DB_SSLMODE";

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },

    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be one of disable, allow, prefer, require, verify-ca, verify-full, got '{value}'")]
    InvalidSslMode { var: &'static str, value: String },
}

/// libpq-style SSL negotiation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    Disable,
    Allow,
    #[default]
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::Allow => "allow",
            Self::Prefer => "prefer",
            Self::Require => "require",
            Self::VerifyCa => "verify-ca",
            Self::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(Self::Disable),
            "allow" => Ok(Self::Allow),
            "prefer" => Ok(Self::Prefer),
            "require" => Ok(Self::Require),
            "verify-ca" => Ok(Self::VerifyCa),
            "verify-full" => Ok(Self::VerifyFull),
            _ => Err(ConfigError::InvalidSslMode {
                var: ENV_SSLMODE,
                value: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<SslMode> for PgSslMode {
    fn from(mode: SslMode) -> Self {
        match mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Allow => PgSslMode::Allow,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
            SslMode::VerifyCa => PgSslMode::VerifyCa,
            SslMode::VerifyFull => PgSslMode::VerifyFull,
        }
    }
}

/// PostgreSQL connection settings
#[derive(Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub ssl_mode: SslMode,
}

impl StorageConfig {
    /// Read settings from the process environment.
    ///
    /// Call after `.env` has been loaded so file values are visible.
    pub fn from_env() -> crate::Result<Self> {
        Ok(Self::from_lookup(|key| std::env::var(key).ok())?)
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing { var })
        };

        let port_raw = required(ENV_PORT)?;
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort {
                var: ENV_PORT,
                value: port_raw.clone(),
            })?;

        let ssl_mode = match lookup(ENV_SSLMODE) {
            Some(v) if !v.trim().is_empty() => v.parse()?,
            _ => SslMode::default(),
        };

        Ok(Self {
            host: required(ENV_HOST)?,
            port,
            user: required(ENV_USER)?,
            password: lookup(ENV_PASS).unwrap_or_default(),
            db_name: required(ENV_NAME)?,
            ssl_mode,
        })
    }

    /// Key/value DSN in libpq format.
    pub fn dsn(&self) -> String {
        self.format_dsn(&self.password)
    }

    /// DSN with the password masked, safe for logs.
    pub fn redacted_dsn(&self) -> String {
        self.format_dsn("***")
    }

    fn format_dsn(&self, password: &str) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            self.host, self.port, self.user, password, self.db_name, self.ssl_mode
        )
    }

    /// sqlx connect options built from the individual fields.
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.db_name)
            .ssl_mode(self.ssl_mode.into());

        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("db_name", &self.db_name)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}
