use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

pub const DEFAULT_QUIZ_SIZE: usize = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub session_ttl_minutes: i64,
    pub session_secure_cookie: bool,
    pub quiz_size: usize,
    pub static_dir: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_source(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let quiz_size: usize = parse_or(&lookup, "QUIZ_SIZE", DEFAULT_QUIZ_SIZE)?;
        if quiz_size < 1 {
            return Err(Error::Config(format!(
                "Invalid value for QUIZ_SIZE: {} (must be at least 1)",
                quiz_size
            )));
        }

        Ok(Self {
            server_address: lookup("SERVER_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            database_url: database_url(&lookup)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            session_ttl_minutes: parse_or(&lookup, "SESSION_TTL_MINUTES", 24 * 60)?,
            session_secure_cookie: parse_or(&lookup, "SESSION_SECURE_COOKIE", false)?,
            quiz_size,
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}

// DATABASE_URL wins; otherwise the URL is assembled from the DB_* parts.
fn database_url<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
        return Ok(url);
    }

    let host = required(lookup, "DB_HOST")?;
    let user = required(lookup, "DB_USER")?;
    let name = required(lookup, "DB_NAME")?;
    let port: u16 = parse_or(lookup, "DB_PORT", 5432)?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();

    let credentials = if password.is_empty() {
        user
    } else {
        format!("{}:{}", user, password)
    };
    Ok(format!("postgres://{}@{}:{}/{}", credentials, host, port, name))
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| {
        Error::Config(format!(
            "Missing environment variable: {} (or set DATABASE_URL)",
            name
        ))
    })
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
