//! Server configuration from environment variables.

use std::env;
use std::fmt;

/// Longest accepted token lifetime: one hundred years.
pub const MAX_JWT_EXPIRY_HOURS: u64 = 24 * 365 * 100;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable fmt layer.
    Pretty,
    /// One JSON object per line.
    Json,
}

/// A user entry from `AUTH_USERS`.
///
/// `password` is either plaintext or an Argon2 PHC string.
#[derive(Clone, PartialEq, Eq)]
pub struct UserEntry {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for UserEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEntry")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Server port to listen on.
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
    /// CORS allowed origins (comma-separated or "*" for all).
    pub cors_allowed_origins: String,
    /// HS256 signing secret. A random one is generated at startup when unset.
    pub jwt_secret: Option<String>,
    /// Token lifetime in hours.
    pub jwt_expiry_hours: u64,
    /// Users allowed to log in.
    pub users: Vec<UserEntry>,
    /// Seed the sample quotes at startup.
    pub seed_quotes: bool,
    /// Serve the GraphiQL playground on GET.
    pub graphiql_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 4000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            cors_allowed_origins: "*".to_string(),
            jwt_secret: None,
            jwt_expiry_hours: 24,
            users: Vec::new(),
            seed_quotes: true,
            graphiql_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// All optional:
    /// - `PORT`: Server port (default: 4000)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `LOG_FORMAT`: "pretty" or "json" (default: "pretty")
    /// - `CORS_ALLOWED_ORIGINS`: Allowed CORS origins (default: "*")
    /// - `JWT_SECRET`: Token signing secret (default: random per process)
    /// - `JWT_EXPIRY_HOURS`: Token lifetime (default: 24)
    /// - `AUTH_USERS`: Whitespace-separated `username:password` entries
    /// - `SEED_QUOTES`: Seed sample quotes (default: true)
    /// - `GRAPHIQL_ENABLED`: Serve the playground (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(s) => parse_number("PORT", &s)?,
            None => defaults.port,
        };

        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match lookup("LOG_FORMAT") {
            Some(s) => parse_log_format(&s)?,
            None => defaults.log_format,
        };

        let cors_allowed_origins =
            lookup("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        let jwt_secret = lookup("JWT_SECRET").filter(|s| !s.is_empty());

        let jwt_expiry_hours = match lookup("JWT_EXPIRY_HOURS") {
            Some(s) => parse_number("JWT_EXPIRY_HOURS", &s)?,
            None => defaults.jwt_expiry_hours,
        };
        if jwt_expiry_hours > MAX_JWT_EXPIRY_HOURS {
            return Err(ConfigError::InvalidValue {
                name: "JWT_EXPIRY_HOURS".to_string(),
                reason: format!("must be at most {}", MAX_JWT_EXPIRY_HOURS),
            });
        }

        let users = match lookup("AUTH_USERS") {
            Some(s) => parse_users(&s)?,
            None => Vec::new(),
        };

        let seed_quotes = match lookup("SEED_QUOTES") {
            Some(s) => parse_bool("SEED_QUOTES", &s)?,
            None => defaults.seed_quotes,
        };

        let graphiql_enabled = match lookup("GRAPHIQL_ENABLED") {
            Some(s) => parse_bool("GRAPHIQL_ENABLED", &s)?,
            None => defaults.graphiql_enabled,
        };

        Ok(Self {
            port,
            log_level,
            log_format,
            cors_allowed_origins,
            jwt_secret,
            jwt_expiry_hours,
            users,
            seed_quotes,
            graphiql_enabled,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .field("users", &self.users)
            .field("seed_quotes", &self.seed_quotes)
            .field("graphiql_enabled", &self.graphiql_enabled)
            .finish()
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidValue {
            name: "LOG_FORMAT".to_string(),
            reason: format!("expected \"pretty\" or \"json\", got {:?}", other),
        }),
    }
}

/// Parse `username:password` entries separated by whitespace.
///
/// Splits on the first colon only, so the password may contain colons.
fn parse_users(value: &str) -> Result<Vec<UserEntry>, ConfigError> {
    value
        .split_whitespace()
        .map(|entry| {
            let (username, password) = entry
                .split_once(':')
                .filter(|(u, p)| !u.is_empty() && !p.is_empty())
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "AUTH_USERS".to_string(),
                    reason: "entries must be username:password".to_string(),
                })?;
            Ok(UserEntry {
                username: username.to_string(),
                password: password.to_string(),
            })
        })
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
