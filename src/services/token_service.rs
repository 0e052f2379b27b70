//! Token service - Issues and verifies signed bearer tokens.
//!
//! Tokens are HS256 JWTs signed with a server-held secret. They are
//! stateless: rotating the secret invalidates every outstanding token.

use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id string)
    pub sub: String,
    /// Absolute expiry, Unix seconds
    pub exp: i64,
    /// Issue time, Unix seconds
    pub iat: i64,
}

/// Signs and verifies bearer tokens with a symmetric key.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl TokenService {
    /// Create a token service for the given signing secret.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by hand: `now >= exp` with no leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Issue a token for `subject` valid for `ttl_seconds` from now.
    pub fn issue(&self, subject: &str, ttl_seconds: u64) -> AppResult<String> {
        self.issue_at(subject, ttl_seconds, Utc::now().timestamp())
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn issue_at(&self, subject: &str, ttl_seconds: u64, now: i64) -> AppResult<String> {
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);
        let claims = Claims {
            sub: subject.to_string(),
            exp: now.saturating_add(ttl),
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    fn verify_at(&self, token: &str, now: i64) -> AppResult<Claims> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AppError::InvalidSignature,
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::MalformedToken,
            })?
            .claims;

        if now >= claims.exp {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}
