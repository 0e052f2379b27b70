//! Authentication service - Handles registration and login.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! DDD: Uses the domain `Credentials` hasher for passwords.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::token_service::{Claims, TokenService};
use crate::config::Config;
use crate::domain::{Credentials, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}

/// Policy values for the auth flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthSettings {
    /// Lifetime of issued tokens in seconds
    pub token_ttl_seconds: u64,
    /// Minimum accepted password length at registration
    pub min_password_length: usize,
}

impl From<&Config> for AuthSettings {
    fn from(config: &Config) -> Self {
        Self {
            token_ttl_seconds: config.jwt_expires_in,
            min_password_length: config.min_password_length,
        }
    }
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a token.
    ///
    /// Fails with `NotFound` for an unknown email and `InvalidCredentials`
    /// for a wrong password; transports must present both the same way.
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a bearer token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    credentials: Credentials,
    tokens: Arc<TokenService>,
    settings: AuthSettings,
    // Verified against on unknown emails so both failure paths cost the same
    dummy_password: Password,
}

impl Authenticator {
    /// Create new auth service instance.
    ///
    /// Hashes the dummy password up front, so call this at startup.
    ///
    /// # Errors
    /// Returns `AppError::Credential` if the dummy password cannot be hashed.
    pub fn new(
        users: Arc<dyn UserRepository>,
        credentials: Credentials,
        tokens: Arc<TokenService>,
        settings: AuthSettings,
    ) -> AppResult<Self> {
        let dummy_password = credentials.hash("dummy-password-never-matches")?;

        Ok(Self {
            users,
            credentials,
            tokens,
            settings,
            dummy_password,
        })
    }

    fn validate_registration(&self, name: &str, email: &str, password: &str) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if email.trim().is_empty() {
            return Err(AppError::validation("Email is required"));
        }
        if password.chars().count() < self.settings.min_password_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.settings.min_password_length
            )));
        }
        Ok(())
    }

    async fn hash_password(&self, password: String) -> AppResult<Password> {
        let credentials = self.credentials.clone();
        tokio::task::spawn_blocking(move || credentials.hash(&password))
            .await
            .map_err(|e| AppError::credential(format!("Hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, stored: Password, password: String) -> AppResult<bool> {
        let credentials = self.credentials.clone();
        tokio::task::spawn_blocking(move || credentials.verify(&stored, &password))
            .await
            .map_err(|e| AppError::credential(format!("Verification task failed: {}", e)))
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        self.validate_registration(&name, &email, &password)?;

        let password_hash = self.hash_password(password).await?;
        let user = User::new(name, email, password_hash);
        self.users.create(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user = match self.users.find_by_email(&email).await {
            Ok(user) => user,
            Err(AppError::NotFound) => {
                // SECURITY: burn a verification anyway so timing does not
                // reveal whether the email exists
                self.verify_password(self.dummy_password.clone(), password)
                    .await?;
                tracing::debug!("Login rejected: unknown email");
                return Err(AppError::NotFound);
            }
            Err(e) => return Err(e),
        };

        if !self.verify_password(user.password.clone(), password).await? {
            tracing::debug!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .issue(&user.id.to_string(), self.settings.token_ttl_seconds)?;

        tracing::info!(user_id = %user.id, "Token issued");
        Ok(TokenResponse { access_token })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
