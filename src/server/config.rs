use axum::http::HeaderValue;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

/// Address the HTTP server binds to. Not configurable.
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

const DEFAULT_SSL_MODE: &str = "disable";

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// Any origin (`Access-Control-Allow-Origin: *`).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

pub struct Config {
    pub database_url: String,

    pub cors_allowed_origins: CorsOrigins,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - A variable holds an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = required(&lookup, "DB_HOST")?;
        let port = parse_port(required(&lookup, "DB_PORT")?)?;
        let user = required(&lookup, "DB_USER")?;
        let password = required(&lookup, "DB_PASSWORD")?;
        let name = required(&lookup, "DB_NAME")?;
        let ssl_mode = lookup("SSL_MODE").unwrap_or_else(|| DEFAULT_SSL_MODE.to_string());

        let database_url = database_url(&host, port, &user, &password, &name, &ssl_mode)?;
        let cors_allowed_origins = parse_cors_origins(lookup("CORS_ALLOWED_ORIGINS"))?;

        Ok(Self {
            database_url,
            cors_allowed_origins,
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn invalid(name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| invalid("DB_PORT", &value, e.to_string()))
}

/// Builds a Postgres connection URL, percent-encoding credentials and database name.
fn database_url(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    name: &str,
    ssl_mode: &str,
) -> Result<String, ConfigError> {
    let mut url =
        Url::parse("postgres://localhost").map_err(|e| invalid("DB_HOST", host, e.to_string()))?;

    url.set_host(Some(host))
        .map_err(|e| invalid("DB_HOST", host, e.to_string()))?;
    url.set_port(Some(port))
        .map_err(|_| invalid("DB_PORT", &port.to_string(), "port cannot be set"))?;
    url.set_username(user)
        .map_err(|_| invalid("DB_USER", user, "username cannot be set"))?;
    url.set_password(Some(password))
        .map_err(|_| invalid("DB_PASSWORD", "***", "password cannot be set"))?;
    url.path_segments_mut()
        .map_err(|_| invalid("DB_NAME", name, "database name cannot be set"))?
        .clear()
        .push(name);
    url.query_pairs_mut().append_pair("sslmode", ssl_mode);

    Ok(url.into())
}

/// `*` or an empty value allows any origin; otherwise a comma-separated origin list.
fn parse_cors_origins(value: Option<String>) -> Result<CorsOrigins, ConfigError> {
    let Some(value) = value else {
        return Ok(CorsOrigins::Any);
    };

    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return Ok(CorsOrigins::Any);
    }

    let origins = trimmed
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| invalid("CORS_ALLOWED_ORIGINS", origin, e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsOrigins::List(origins))
}
