//! Password value object and credential hashing.
//!
//! DDD: Encapsulates password hashing as a domain value object.
//! DRY: Centralized Argon2 configuration.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashCost;
use crate::errors::{AppError, AppResult};

/// Stored password hash.
///
/// Only ever holds the Argon2 PHC string, never plaintext.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// The cost parameters are read from the stored hash, so hashes made
    /// under an older cost setting keep verifying. An unparsable hash never
    /// verifies.
    pub fn verify(&self, plain_text: &str) -> bool {
        match PasswordHash::new(&self.hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash could not be parsed: {}", e);
                false
            }
        }
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Argon2id hasher with a configurable cost.
#[derive(Debug, Clone)]
pub struct Credentials {
    params: Params,
}

impl Credentials {
    /// Create a hasher for the given cost.
    ///
    /// # Errors
    /// Returns `AppError::Credential` if Argon2 rejects the parameters.
    pub fn new(cost: HashCost) -> AppResult<Self> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| AppError::credential(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    /// Hash a password with a fresh random salt.
    ///
    /// # Errors
    /// Returns `AppError::Credential` if the algorithm cannot process the input.
    pub fn hash(&self, plain_text: &str) -> AppResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::credential(format!("Password hash failed: {}", e)))?;
        Ok(Password::from_hash(hash.to_string()))
    }

    /// Verify a plain text password against a stored hash.
    pub fn verify(&self, password: &Password, plain_text: &str) -> bool {
        password.verify(plain_text)
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Credentials {
        Credentials::new(HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_password_hash_and_verify() {
        let credentials = fast();
        let plain = "SecurePassword123!";
        let password = credentials.hash(plain).unwrap();

        assert!(credentials.verify(&password, plain));
        assert!(!credentials.verify(&password, "WrongPassword123"));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let password = fast().hash("TestPassword123").unwrap();
        assert_ne!(password.as_str(), "TestPassword123");
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = fast().hash(plain).unwrap().as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let credentials = fast();
        let plain = "SamePassword123";
        let pass1 = credentials.hash(plain).unwrap();
        let pass2 = credentials.hash(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1, pass2);
        // But both verify correctly
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_default_cost_hash_verifies() {
        let credentials = Credentials::default();
        let password = credentials.hash("DefaultCost123").unwrap();
        assert!(credentials.verify(&password, "DefaultCost123"));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string");
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_invalid_cost_rejected() {
        let result = Credentials::new(HashCost {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(matches!(result, Err(AppError::Credential(_))));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = fast().hash("Secret123!").unwrap();
        let rendered = format!("{:?}", password);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains(password.as_str()));
    }
}
