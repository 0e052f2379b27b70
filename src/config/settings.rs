//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use argon2::Params;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRES_IN_SECONDS, DEFAULT_MIN_PASSWORD_LENGTH,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEV_JWT_SECRET, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expires_in: u64,
    pub server_host: String,
    pub server_port: u16,
    pub min_password_length: usize,
    pub hash_cost: HashCost,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expires_in", &self.jwt_expires_in)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("min_password_length", &self.min_password_length)
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything except the
    /// database URL and signing secret.
    ///
    /// # Errors
    /// Returns an error if the secret is shorter than the minimum length.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        validate_secret(&jwt_secret)?;

        Ok(Self {
            database_url: database_url.into(),
            jwt_secret,
            jwt_expires_in: DEFAULT_JWT_EXPIRES_IN_SECONDS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            hash_cost: HashCost::default(),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if JWT_SECRET is missing in release builds, too short,
    /// or if a numeric variable cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };
        validate_secret(&jwt_secret)?;

        let defaults = HashCost::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expires_in: parse_var("JWT_EXPIRES_IN", DEFAULT_JWT_EXPIRES_IN_SECONDS)?,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            min_password_length: parse_var("MIN_PASSWORD_LENGTH", DEFAULT_MIN_PASSWORD_LENGTH)?,
            hash_cost: HashCost {
                memory_kib: parse_var("ARGON2_MEMORY_KIB", defaults.memory_kib)?,
                iterations: parse_var("ARGON2_ITERATIONS", defaults.iterations)?,
                parallelism: parse_var("ARGON2_PARALLELISM", defaults.parallelism)?,
            },
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn validate_secret(secret: &str) -> AppResult<()> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(AppError::internal(format!(
            "JWT_SECRET must be at least {} characters long",
            MIN_JWT_SECRET_LENGTH
        )));
    }
    Ok(())
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::internal(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}
